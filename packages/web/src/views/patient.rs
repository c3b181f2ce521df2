use api::PersonalData;
use dioxus::prelude::*;
use ui::{use_api, use_auth, FileForm};

const LOAD_FAILED: &str = "No se pudieron cargar los datos personales.";

enum Load {
    Pending,
    Loaded(PersonalData),
    Failed(String),
}

/// The signed-in patient's own personal data, read-only until they choose to edit.
#[component]
pub fn PatientDash() -> Element {
    let api = use_api();
    let auth = use_auth();
    let mut state = use_signal(|| Load::Pending);
    let mut editing = use_signal(|| false);

    let _loader = use_resource(move || {
        let api = api.clone();
        async move {
            let next = match api.my_personal_data().await {
                Ok(data) => Load::Loaded(data),
                Err(e) => {
                    tracing::error!(error = %e, "loading own personal data failed");
                    Load::Failed(e.message_or(LOAD_FAILED))
                }
            };
            state.set(next);
        }
    });

    let medical_file_id = auth().user.and_then(|user| user.medical_file_id());

    let view = match &*state.read() {
        Load::Pending => rsx! {
            div { "Cargando datos personales..." }
        },
        Load::Failed(message) => rsx! {
            div { class: "text-danger", "{message}" }
        },
        Load::Loaded(data) => {
            let data = data.clone();
            rsx! {
                div {
                    class: "d-flex justify-content-between align-items-center mb-4",
                    h1 { "Mis datos personales" }
                    if !editing() {
                        button {
                            class: "btn btn-outline-primary",
                            onclick: move |_| editing.set(true),
                            "Editar"
                        }
                    }
                }
                FileForm {
                    initial: Some(data),
                    medical_file_id,
                    read_only: !editing(),
                    on_cancel: move |_| editing.set(false),
                    on_saved: move |saved: PersonalData| {
                        state.set(Load::Loaded(saved));
                        editing.set(false);
                    },
                }
            }
        }
    };
    view
}
