use api::PatientSummary;
use dioxus::prelude::*;

use super::{delete_row, load_rows, without_row, CONFIRM_DELETE};
use crate::auth::{use_api, AppClient};
use crate::browser;

/// Which patient list a table shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatientSource {
    /// Patients waiting for a student interview. Rows can be completed or deleted.
    Student,
    /// Patients under a professional's supervision. Read-only.
    Professional,
}

impl PatientSource {
    fn editable(self) -> bool {
        self == Self::Student
    }

    async fn load(self, api: &AppClient) -> Vec<PatientSummary> {
        match self {
            Self::Student => load_rows(api.student_patients(), "student patients").await,
            Self::Professional => {
                load_rows(api.professional_patients(), "professional patients").await
            }
        }
    }
}

fn cell(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or_default()
}

#[component]
pub fn PatientTable(source: PatientSource) -> Element {
    let api = use_api();
    let mut patients = use_signal(Vec::<PatientSummary>::new);

    let loader_api = api.clone();
    let _loader = use_resource(move || {
        let api = loader_api.clone();
        async move {
            patients.set(source.load(&api).await);
        }
    });

    let handle_delete = use_callback(move |user_id: i64| {
        if !browser::confirm(CONFIRM_DELETE) {
            return;
        }
        let api = api.clone();
        spawn(async move {
            if delete_row(&api, user_id).await {
                let remaining = without_row(&patients.read(), user_id);
                patients.set(remaining);
            }
        });
    });

    rsx! {
        table {
            class: "table table-hover",
            thead {
                tr {
                    th { scope: "col", "#" }
                    th { scope: "col", "Primer Nombre" }
                    th { scope: "col", "Segundo Nombre" }
                    th { scope: "col", "Primer Apellido" }
                    th { scope: "col", "Segundo Apellido" }
                    th { scope: "col", "Teléfono" }
                    th { scope: "col", "Email" }
                    if source.editable() {
                        th { scope: "col", "Acciones" }
                    }
                }
            }
            tbody {
                for (index, patient) in patients().into_iter().enumerate() {
                    tr {
                        key: "{patient.id}",
                        th { scope: "row", {(index + 1).to_string()} }
                        td { {cell(&patient.first_name)} }
                        td { {cell(&patient.second_name)} }
                        td { {cell(&patient.first_surname)} }
                        td { {cell(&patient.second_surname)} }
                        td { {cell(&patient.phone)} }
                        td { {cell(&patient.email)} }
                        if source.editable() {
                            td {
                                Link {
                                    class: "btn btn-success mx-3",
                                    to: format!("/dashboard/student/interview/{}", patient.id),
                                    "Completar"
                                }
                                button {
                                    class: "btn btn-danger",
                                    onclick: move |_| handle_delete.call(patient.id),
                                    "Eliminar"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
