use dioxus::prelude::*;
use ui::{PatientSource, PatientTable};

/// Patients waiting for an interview.
#[component]
pub fn StudentDash() -> Element {
    rsx! {
        h1 { class: "mb-4", "Expedientes disponibles" }
        p { class: "mb-4 text-muted", "Selecciona un expediente para comenzar a llenarlo." }
        PatientTable { source: PatientSource::Student }
    }
}
