use dioxus::prelude::*;
use ui::RegisterForm;

/// `/register?rol=...`
#[component]
pub fn Register(rol: String) -> Element {
    rsx! {
        RegisterForm { role: rol }
    }
}
