use api::PersonalData;
use dioxus::prelude::*;
use ui::{use_api, BackgroundForm};

/// Interview for one medical file, pre-filled with the file's personal data.
#[component]
pub fn Interview(medical_file_id: i64) -> Element {
    // Track the id in a signal so the loader re-runs on route param change
    let mut file_signal = use_signal(|| medical_file_id);
    if *file_signal.peek() != medical_file_id {
        file_signal.set(medical_file_id);
    }

    let api = use_api();
    let mut initial = use_signal(|| Option::<PersonalData>::None);

    let _loader = use_resource(move || {
        let api = api.clone();
        let id = file_signal();
        async move {
            match api.personal_data_by_medical_file(id).await {
                Ok(data) => initial.set(Some(data)),
                Err(e) => {
                    // A file without personal data yet is normal here
                    tracing::debug!(medical_file_id = id, error = %e, "no personal data to pre-fill");
                    initial.set(None);
                }
            }
        }
    });

    rsx! {
        h1 { class: "mb-2", "Entrevista" }
        p { class: "text-muted mb-4", "Expediente #{medical_file_id}" }
        BackgroundForm { medical_file_id, initial: initial() }
    }
}
