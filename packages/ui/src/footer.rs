use dioxus::prelude::*;

pub const CONTACT_EMAIL: &str = "info@expedientedigital.com";

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer {
            class: "text-center py-4 border-top text-white sanarte-footer",
            div {
                class: "container",
                p { class: "mb-1", "© SanArte · El Arte de Sanar" }
                p {
                    class: "mb-0 text-white-50",
                    "Contacto: "
                    a { href: "mailto:{CONTACT_EMAIL}", class: "text-white", "{CONTACT_EMAIL}" }
                }
            }
        }
    }
}
