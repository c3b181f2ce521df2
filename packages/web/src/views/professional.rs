use dioxus::prelude::*;
use ui::{PatientSource, PatientTable};

#[component]
pub fn ProfessionalDash() -> Element {
    rsx! {
        h1 { class: "mb-4", "Mis pacientes" }
        PatientTable { source: PatientSource::Professional }
    }
}
