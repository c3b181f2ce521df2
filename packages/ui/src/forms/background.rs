//! # Background form: the student interview
//!
//! Collects the four medical background categories plus the interview's slice
//! of personal data (sex and address). The draft keeps each section behind an
//! [`Rc`], so an edit copies only the section it touches and every other
//! section stays shared with the previous draft.
//!
//! Submitting sends two requests in order:
//!
//! 1. `POST /api/backgrounds` with the four categories, the medical file and
//!    the signed-in user's id
//! 2. `POST /api/personal_data` with sex and address
//!
//! If the first fails the second is not sent. Nothing is rolled back when the
//! second fails. The outcome is announced with a blocking alert.

use std::rc::Rc;

use api::{
    ApiClient, BackgroundsPayload, FamilyBackground, GynecologicalBackground,
    NonPathologicalBackground, PathologicalBackground, PersonalData, PersonalDataSection,
    Transport, WithMedicalFile,
};
use dioxus::prelude::*;

use super::fields::record_fields;
use super::SexSelect;
use crate::auth::use_api;
use crate::browser;
use crate::FormError;

const SAVED: &str = "Antecedentes y datos personales guardados correctamente.";
const BACKGROUNDS_REJECTED: &str = "Error al guardar antecedentes.";
const PERSONAL_REJECTED: &str = "Error al guardar datos personales.";
const UNREACHABLE: &str = "Error de conexión con el servidor.";

record_fields! {
    pub enum InterviewField for PersonalDataSection: String {
        Sex => sex, "Sexo";
        Address => address, "Dirección";
    }
}

record_fields! {
    pub enum PathologicalField for PathologicalBackground: String {
        PersonalDiseases => personal_diseases, "Enfermedades personales";
        Medications => medications, "Medicamentos";
        Hospitalizations => hospitalizations, "Hospitalizaciones";
        Surgeries => surgeries, "Cirugías";
        Traumatisms => traumatisms, "Traumatismos";
        Transfusions => transfusions, "Transfusiones";
        Allergies => allergies, "Alergias";
        Others => others, "Otros";
    }
}

record_fields! {
    /// Hereditary conditions, one checkbox each.
    pub enum FamilyCondition for FamilyBackground: bool {
        Hypertension => hypertension, "Hipertensión";
        Diabetes => diabetes, "Diabetes";
        Cancer => cancer, "Cáncer";
        HeartDisease => heart_disease, "Enfermedad cardíaca";
        KidneyDisease => kidney_disease, "Enfermedad renal";
        LiverDisease => liver_disease, "Enfermedad hepática";
        MentalIllness => mental_illness, "Enfermedad mental";
        CongenitalMalformations => congenital_malformations, "Malformaciones congénitas";
    }
}

record_fields! {
    pub enum NonPathologicalField for NonPathologicalBackground: String {
        EducationLevel => education_level, "Nivel educativo";
        EconomicActivity => economic_activity, "Actividad económica";
        MaritalStatus => marital_status, "Estado civil";
        Dependents => dependents, "Dependientes";
        Occupation => occupation, "Ocupación";
        RecentTravels => recent_travels, "Viajes recientes";
        SocialActivities => social_activities, "Actividades sociales";
        Exercise => exercise, "Ejercicio";
        DietSupplements => diet_supplements, "Dieta y suplementos";
        Hygiene => hygiene, "Higiene";
        Hobbies => hobbies, "Pasatiempos";
        TobaccoUse => tobacco_use, "Consumo de tabaco";
        AlcoholUse => alcohol_use, "Consumo de alcohol";
        RecreationalDrugs => recreational_drugs, "Drogas recreativas";
        Addictions => addictions, "Adicciones";
        Others => others, "Otros";
    }
}

record_fields! {
    pub enum Habit for NonPathologicalBackground: bool {
        Tattoos => tattoos, "Tatuajes";
        Piercings => piercings, "Perforaciones";
    }
}

record_fields! {
    pub enum GynecologicalField for GynecologicalBackground: String {
        MenarcheAge => menarche_age, "Edad de la menarca";
        Pregnancies => pregnancies, "Embarazos";
        Births => births, "Partos";
        CSections => c_sections, "Cesáreas";
        Abortions => abortions, "Abortos";
        ContraceptiveMethod => contraceptive_method, "Método anticonceptivo";
        Others => others, "Otros";
    }
}

/// One change to one leaf of the draft.
#[derive(Debug, Clone, PartialEq)]
pub enum BackgroundEdit {
    Personal(InterviewField, String),
    Pathological(PathologicalField, String),
    Family(FamilyCondition, bool),
    FamilyOthers(String),
    NonPathological(NonPathologicalField, String),
    Habit(Habit, bool),
    Gynecological(GynecologicalField, String),
}

/// Working copy of the interview form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BackgroundDraft {
    pub personal: Rc<PersonalDataSection>,
    pub pathological: Rc<PathologicalBackground>,
    pub family: Rc<FamilyBackground>,
    pub non_pathological: Rc<NonPathologicalBackground>,
    pub gynecological: Rc<GynecologicalBackground>,
}

impl BackgroundDraft {
    /// An empty draft, with sex and address taken from `initial` if given.
    pub fn new(initial: Option<&PersonalData>) -> Self {
        Self::default().reseed(initial)
    }

    /// The draft with sex and address replaced from `initial`. The background
    /// sections are kept as typed.
    pub fn reseed(&self, initial: Option<&PersonalData>) -> Self {
        let personal = initial
            .map(|data| PersonalDataSection {
                sex: data.sex.clone(),
                address: data.address.clone(),
            })
            .unwrap_or_default();
        Self {
            personal: Rc::new(personal),
            ..self.clone()
        }
    }

    /// The draft after `edit`. Sections the edit does not touch are shared.
    pub fn apply(&self, edit: BackgroundEdit) -> Self {
        let mut next = self.clone();
        match edit {
            BackgroundEdit::Personal(field, value) => {
                *field.get_mut(Rc::make_mut(&mut next.personal)) = value;
            }
            BackgroundEdit::Pathological(field, value) => {
                *field.get_mut(Rc::make_mut(&mut next.pathological)) = value;
            }
            BackgroundEdit::Family(condition, checked) => {
                *condition.get_mut(Rc::make_mut(&mut next.family)) = checked;
            }
            BackgroundEdit::FamilyOthers(value) => {
                Rc::make_mut(&mut next.family).others = value;
            }
            BackgroundEdit::NonPathological(field, value) => {
                *field.get_mut(Rc::make_mut(&mut next.non_pathological)) = value;
            }
            BackgroundEdit::Habit(habit, checked) => {
                *habit.get_mut(Rc::make_mut(&mut next.non_pathological)) = checked;
            }
            BackgroundEdit::Gynecological(field, value) => {
                *field.get_mut(Rc::make_mut(&mut next.gynecological)) = value;
            }
        }
        next
    }

    pub fn backgrounds_payload(&self, medical_file_id: i64, user_id: Option<i64>) -> BackgroundsPayload {
        BackgroundsPayload {
            pathological: (*self.pathological).clone(),
            family: (*self.family).clone(),
            non_pathological: (*self.non_pathological).clone(),
            gynecological: (*self.gynecological).clone(),
            medical_file_id,
            user_id,
        }
    }

    pub fn personal_data_payload(&self, medical_file_id: i64) -> WithMedicalFile<PersonalDataSection> {
        WithMedicalFile::new((*self.personal).clone(), Some(medical_file_id))
    }
}

/// Save the draft: backgrounds first, then personal data.
pub async fn submit_background<T: Transport>(
    api: &ApiClient<T>,
    draft: &BackgroundDraft,
    medical_file_id: i64,
) -> Result<(), FormError> {
    let user_id = api.session().user().map(|user| user.id);

    let backgrounds = draft.backgrounds_payload(medical_file_id, user_id);
    if let Err(e) = api.save_backgrounds(&backgrounds).await {
        tracing::error!(error = %e, medical_file_id, "saving backgrounds failed");
        return Err(FormError::from_api(&e, BACKGROUNDS_REJECTED, UNREACHABLE));
    }

    let personal = draft.personal_data_payload(medical_file_id);
    if let Err(e) = api.save_personal_data_section(&personal).await {
        tracing::error!(error = %e, medical_file_id, "saving interview personal data failed");
        return Err(FormError::from_api(&e, PERSONAL_REJECTED, UNREACHABLE));
    }

    tracing::info!(medical_file_id, "interview saved");
    Ok(())
}

/// Interview form for one medical file.
#[component]
pub fn BackgroundForm(medical_file_id: i64, #[props(default)] initial: Option<PersonalData>) -> Element {
    let api = use_api();
    let mut draft = use_signal(|| BackgroundDraft::new(initial.as_ref()));
    let mut applied = use_signal(|| initial.clone());
    let mut saving = use_signal(|| false);

    if *applied.peek() != initial {
        let next = draft.peek().reseed(initial.as_ref());
        draft.set(next);
        applied.set(initial.clone());
    }

    let mut edit = move |change: BackgroundEdit| {
        let next = draft.peek().apply(change);
        draft.set(next);
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        spawn(async move {
            saving.set(true);
            let snapshot = draft();
            match submit_background(&api, &snapshot, medical_file_id).await {
                Ok(()) => browser::alert(SAVED),
                Err(e) => browser::alert(&e.to_string()),
            }
            saving.set(false);
        });
    };

    let current = draft();

    rsx! {
        form {
            class: "row p-4 rounded shadow-md background-form",
            onsubmit: handle_submit,
            h2 { class: "mb-4", "Antecedentes Médicos del Paciente" }

            h4 { class: "mt-4 mb-2", "Datos Personales" }
            div {
                class: "mb-2 col-6",
                label { class: "form-label", r#for: "interview-sex", {InterviewField::Sex.label()} }
                SexSelect {
                    id: "interview-sex",
                    value: current.personal.sex.clone(),
                    on_change: move |value: String| edit(BackgroundEdit::Personal(InterviewField::Sex, value)),
                }
            }
            div {
                class: "mb-2 col-6",
                label { class: "form-label", r#for: "interview-address", {InterviewField::Address.label()} }
                textarea {
                    id: "interview-address",
                    name: InterviewField::Address.key(),
                    class: "form-control",
                    value: current.personal.address.clone(),
                    oninput: move |evt: FormEvent| edit(BackgroundEdit::Personal(InterviewField::Address, evt.value())),
                }
            }

            h4 { class: "mt-4 mb-2", "Antecedentes Patológicos" }
            for field in PathologicalField::ALL.iter().copied() {
                div {
                    class: "mb-2 col-6",
                    label { class: "form-label", {field.label()} }
                    textarea {
                        name: field.key(),
                        class: "form-control",
                        value: field.get(&current.pathological).clone(),
                        oninput: move |evt: FormEvent| edit(BackgroundEdit::Pathological(field, evt.value())),
                    }
                }
            }

            h4 { class: "mt-4 mb-2", "Antecedentes Familiares" }
            for condition in FamilyCondition::ALL.iter().copied() {
                div {
                    class: "form-check col-6 mb-2",
                    input {
                        id: format!("family-{}", condition.key()),
                        name: condition.key(),
                        class: "form-check-input",
                        r#type: "checkbox",
                        checked: *condition.get(&current.family),
                        onchange: move |evt: FormEvent| edit(BackgroundEdit::Family(condition, evt.checked())),
                    }
                    label { class: "form-check-label", r#for: format!("family-{}", condition.key()), {condition.label()} }
                }
            }
            div {
                class: "mb-2 col-6",
                label { class: "form-label", "Otros antecedentes familiares" }
                textarea {
                    name: "others",
                    class: "form-control",
                    value: current.family.others.clone(),
                    oninput: move |evt: FormEvent| edit(BackgroundEdit::FamilyOthers(evt.value())),
                }
            }

            h4 { class: "mt-4 mb-2", "Antecedentes No Patológicos" }
            for field in NonPathologicalField::ALL.iter().copied() {
                div {
                    class: "mb-2 col-6",
                    label { class: "form-label", {field.label()} }
                    textarea {
                        name: field.key(),
                        class: "form-control",
                        value: field.get(&current.non_pathological).clone(),
                        oninput: move |evt: FormEvent| edit(BackgroundEdit::NonPathological(field, evt.value())),
                    }
                }
            }
            for habit in Habit::ALL.iter().copied() {
                div {
                    class: "form-check col-6 mb-2",
                    input {
                        id: format!("habit-{}", habit.key()),
                        name: habit.key(),
                        class: "form-check-input",
                        r#type: "checkbox",
                        checked: *habit.get(&current.non_pathological),
                        onchange: move |evt: FormEvent| edit(BackgroundEdit::Habit(habit, evt.checked())),
                    }
                    label { class: "form-check-label", r#for: format!("habit-{}", habit.key()), {habit.label()} }
                }
            }

            h4 { class: "mt-4 mb-2", "Antecedentes Ginecológicos" }
            for field in GynecologicalField::ALL.iter().copied() {
                div {
                    class: "mb-2 col-6",
                    label { class: "form-label", {field.label()} }
                    input {
                        name: field.key(),
                        class: "form-control",
                        r#type: "text",
                        value: field.get(&current.gynecological).clone(),
                        oninput: move |evt: FormEvent| edit(BackgroundEdit::Gynecological(field, evt.value())),
                    }
                }
            }

            div {
                class: "mt-4 col-12",
                button {
                    r#type: "submit",
                    class: "btn btn-primary me-2",
                    disabled: saving(),
                    if saving() { "Guardando..." } else { "Guardar" }
                }
                button {
                    r#type: "button",
                    class: "btn btn-secondary",
                    onclick: move |_| browser::history_back(),
                    "Cancelar"
                }
            }
        }
    }
}
