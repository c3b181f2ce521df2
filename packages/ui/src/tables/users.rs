use api::UserInfo;
use dioxus::prelude::*;

use super::{delete_row, load_rows, without_row, CONFIRM_DELETE};
use crate::auth::use_api;
use crate::browser;

/// Every account, for administrators.
#[component]
pub fn UsersTable() -> Element {
    let api = use_api();
    let mut users = use_signal(Vec::<UserInfo>::new);

    let loader_api = api.clone();
    let _loader = use_resource(move || {
        let api = loader_api.clone();
        async move {
            users.set(load_rows(api.users(), "users").await);
        }
    });

    let handle_delete = use_callback(move |user_id: i64| {
        if !browser::confirm(CONFIRM_DELETE) {
            return;
        }
        let api = api.clone();
        spawn(async move {
            if delete_row(&api, user_id).await {
                let remaining = without_row(&users.read(), user_id);
                users.set(remaining);
            }
        });
    });

    rsx! {
        table {
            class: "table table-hover",
            thead {
                tr {
                    th { scope: "col", "ID" }
                    th { scope: "col", "Nombre" }
                    th { scope: "col", "Rol" }
                    th { scope: "col", "Estado" }
                    th { scope: "col", "Acciones" }
                }
            }
            tbody {
                for user in users() {
                    tr {
                        key: "{user.id}",
                        th { scope: "row", "{user.id}" }
                        td { {user.display_name()} }
                        td { {user.role.label()} }
                        td { {user.status.label()} }
                        td {
                            button {
                                class: "btn btn-danger",
                                onclick: move |_| handle_delete.call(user.id),
                                "Eliminar"
                            }
                        }
                    }
                }
            }
        }
    }
}
