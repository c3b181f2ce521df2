use dioxus::prelude::*;
use ui::UsersTable;

#[component]
pub fn AdminDash() -> Element {
    rsx! {
        h1 { class: "mb-4", "Usuarios" }
        UsersTable {}
    }
}
