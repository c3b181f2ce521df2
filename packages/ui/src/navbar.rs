use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaGaugeHigh, FaHeartPulse, FaRightToBracket};
use dioxus_free_icons::Icon;

use crate::auth::{use_auth, LogoutButton};

/// Top bar: brand, demo link, and either the dashboard and logout or a login link.
#[component]
pub fn Navbar() -> Element {
    let auth = use_auth();
    let signed_in = auth().user.is_some();

    rsx! {
        nav {
            class: "navbar navbar-expand-lg navbar-dark shadow-sm sanarte-navbar",
            div {
                class: "container",
                Link {
                    to: "/",
                    class: "navbar-brand d-flex align-items-center",
                    Icon { icon: FaHeartPulse, width: 28, height: 28 }
                    span { class: "fw-bold ms-2", "SanArte" }
                }

                div {
                    class: "d-flex align-items-center gap-2",
                    Link { to: "/demo", class: "btn btn-outline-light", "Ver Demo" }
                    if signed_in {
                        Link {
                            to: "/dashboard",
                            class: "btn btn-outline-light",
                            Icon { icon: FaGaugeHigh, width: 16, height: 16 }
                            span { class: "ms-1", "Mi panel" }
                        }
                        LogoutButton { class: "btn btn-light" }
                    } else {
                        Link {
                            to: "/login",
                            class: "btn btn-light",
                            Icon { icon: FaRightToBracket, width: 16, height: 16 }
                            span { class: "ms-1", "Iniciar Sesión" }
                        }
                    }
                }
            }
        }
    }
}
