//! Patient personal data form.

use api::{ApiClient, PersonalData, Transport, WithMedicalFile};
use dioxus::prelude::*;

use super::fields::record_fields;
use super::SexSelect;
use crate::auth::use_api;
use crate::FormError;

/// Shown when a mandatory field is blank; nothing is sent in that case.
pub const MISSING_REQUIRED: &str = "Completa todos los campos obligatorios (*).";

const REJECTED: &str = "Error al guardar datos personales.";
const UNREACHABLE: &str = "Error de conexión con el servidor.";
const SAVED: &str = "Datos personales guardados correctamente.";

record_fields! {
    pub enum PersonalField for PersonalData: String {
        FirstName => first_name, "Primer nombre";
        SecondName => second_name, "Segundo nombre";
        FirstSurname => first_surname, "Apellido paterno";
        SecondSurname => second_surname, "Apellido materno";
        Sex => sex, "Sexo";
        BirthDay => birth_day, "Fecha de nacimiento";
        Address => address, "Dirección";
        Phone => phone, "Teléfono";
    }
}

impl PersonalField {
    pub const REQUIRED: [PersonalField; 4] = [
        PersonalField::FirstName,
        PersonalField::FirstSurname,
        PersonalField::Sex,
        PersonalField::Address,
    ];

    pub fn is_required(self) -> bool {
        Self::REQUIRED.contains(&self)
    }

    fn input_type(self) -> &'static str {
        match self {
            Self::BirthDay => "date",
            Self::Phone => "tel",
            _ => "text",
        }
    }
}

/// Mandatory fields left blank, in display order.
pub fn missing_fields(data: &PersonalData) -> Vec<PersonalField> {
    PersonalField::REQUIRED
        .into_iter()
        .filter(|field| field.get(data).trim().is_empty())
        .collect()
}

/// Validate and save the record under the given medical file.
pub async fn submit_personal_data<T: Transport>(
    api: &ApiClient<T>,
    data: &PersonalData,
    medical_file_id: Option<i64>,
) -> Result<(), FormError> {
    let missing = missing_fields(data);
    if !missing.is_empty() {
        tracing::debug!(?missing, "personal data incomplete");
        return Err(FormError::Invalid(MISSING_REQUIRED.to_string()));
    }

    let payload = WithMedicalFile::new(data.clone(), medical_file_id);
    api.save_personal_data(&payload).await.map(|_| ()).map_err(|e| {
        tracing::error!(error = %e, ?medical_file_id, "saving personal data failed");
        FormError::from_api(&e, REJECTED, UNREACHABLE)
    })
}

/// Personal data form.
///
/// `initial` is merged over an empty record and re-applied whenever the
/// parent passes a different value. In read-only mode every input is disabled
/// and the save button is hidden.
#[component]
pub fn FileForm(
    #[props(default)] initial: Option<PersonalData>,
    #[props(default)] medical_file_id: Option<i64>,
    #[props(default)] read_only: bool,
    #[props(default)] on_cancel: Option<EventHandler<()>>,
    #[props(default)] on_change: Option<EventHandler<PersonalData>>,
    #[props(default)] on_saved: Option<EventHandler<PersonalData>>,
) -> Element {
    let api = use_api();
    let mut form = use_signal(|| initial.clone().unwrap_or_default());
    let mut applied = use_signal(|| initial.clone());
    let mut error = use_signal(|| Option::<String>::None);
    let mut success = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    if *applied.peek() != initial {
        if let Some(data) = &initial {
            form.set(data.clone());
        }
        applied.set(initial.clone());
    }

    let mut update = move |field: PersonalField, value: String| {
        form.with_mut(|data| *field.get_mut(data) = value);
        if let Some(handler) = on_change {
            handler.call(form());
        }
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        spawn(async move {
            error.set(None);
            success.set(None);
            saving.set(true);

            let data = form();
            match submit_personal_data(&api, &data, medical_file_id).await {
                Ok(()) => {
                    success.set(Some(SAVED.to_string()));
                    if let Some(handler) = on_saved {
                        handler.call(data);
                    }
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            saving.set(false);
        });
    };

    rsx! {
        form {
            class: "row p-4 rounded shadow-md file-form",
            onsubmit: handle_submit,
            h2 { class: "mb-4", "Datos Personales del Paciente" }

            for field in PersonalField::ALL.iter().copied() {
                div {
                    class: "mb-2 col-6",
                    label {
                        class: "form-label",
                        r#for: field.key(),
                        {field.label()}
                        if field.is_required() { " *" }
                    }
                    if field == PersonalField::Sex {
                        SexSelect {
                            id: field.key(),
                            value: form.read().sex.clone(),
                            required: true,
                            disabled: read_only,
                            on_change: move |value: String| update(field, value),
                        }
                    } else {
                        input {
                            id: field.key(),
                            name: field.key(),
                            class: "form-control",
                            r#type: field.input_type(),
                            required: field.is_required(),
                            disabled: read_only,
                            value: field.get(&form.read()).clone(),
                            oninput: move |evt: FormEvent| update(field, evt.value()),
                        }
                    }
                }
            }

            if let Some(err) = error() {
                div { class: "alert alert-danger mt-3", "{err}" }
            }
            if let Some(msg) = success() {
                div { class: "alert alert-success mt-3", "{msg}" }
            }

            div {
                class: "d-flex gap-2 mt-4",
                if !read_only {
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: saving(),
                        if saving() { "Guardando..." } else { "Guardar" }
                    }
                }
                if let Some(cancel) = on_cancel {
                    button {
                        r#type: "button",
                        class: "btn btn-secondary",
                        onclick: move |_| cancel.call(()),
                        "Cancelar"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{MemoryTransport, Session};
    use serde_json::json;
    use store::MemoryStorage;

    fn complete() -> PersonalData {
        PersonalData {
            first_name: "María".into(),
            first_surname: "López".into(),
            sex: "femenino".into(),
            address: "Av. Central 12".into(),
            ..Default::default()
        }
    }

    fn client(transport: &MemoryTransport) -> ApiClient<MemoryTransport> {
        ApiClient::new(transport.clone(), Session::new(MemoryStorage::new()))
    }

    #[tokio::test]
    async fn test_any_blank_mandatory_field_blocks_the_request() {
        for field in PersonalField::REQUIRED {
            let transport = MemoryTransport::new().respond(200, json!({}));
            let api = client(&transport);
            let mut data = complete();
            *field.get_mut(&mut data) = "  ".into();

            let err = submit_personal_data(&api, &data, Some(4)).await.unwrap_err();

            assert_eq!(err, FormError::Invalid(MISSING_REQUIRED.into()), "{field:?}");
            assert_eq!(transport.request_count(), 0, "{field:?}");
        }
    }

    #[tokio::test]
    async fn test_complete_record_is_sent_once() {
        let transport = MemoryTransport::new().respond(200, json!({ "id": 1 }));
        let api = client(&transport);
        api.session().login("tok", &serde_json::from_value(json!({ "id": 3, "email": "p@x.y" })).unwrap());

        submit_personal_data(&api, &complete(), Some(4)).await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].path, "/api/personal_data");
        assert_eq!(requests[0].bearer.as_deref(), Some("tok"));
        let body = requests[0].body.as_ref().unwrap();
        assert_eq!(body["first_name"], "María");
        assert_eq!(body["address"], "Av. Central 12");
        assert_eq!(body["second_name"], "");
        assert_eq!(body["medical_file_id"], 4);
    }

    #[tokio::test]
    async fn test_rejection_message() {
        let transport = MemoryTransport::new().respond(422, json!({ "error": "Fecha inválida" }));
        let api = client(&transport);

        let err = submit_personal_data(&api, &complete(), None).await.unwrap_err();
        assert_eq!(err, FormError::Rejected("Fecha inválida".into()));
    }

    #[test]
    fn test_missing_fields_in_display_order() {
        let data = PersonalData {
            first_surname: "López".into(),
            ..Default::default()
        };
        assert_eq!(
            missing_fields(&data),
            vec![PersonalField::FirstName, PersonalField::Sex, PersonalField::Address]
        );
        assert!(missing_fields(&complete()).is_empty());
        assert!(!PersonalField::Phone.is_required());
    }
}
