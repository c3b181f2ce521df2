use dioxus::prelude::*;
use ui::use_auth;

use crate::guard::{access, home_for, Access};
use crate::Route;

/// Wraps every `/dashboard` page and applies the access rules first.
#[component]
pub fn DashboardLayout() -> Element {
    let auth = use_auth();
    let route = use_route::<Route>();
    let nav = use_navigator();
    let user = auth().user;

    match access(&route, user.as_ref()) {
        Access::SignIn => {
            tracing::debug!(?route, "no session, sending to login");
            nav.replace(Route::Login {});
            rsx! {}
        }
        Access::Forbidden => {
            tracing::warn!(?route, "role may not open this page");
            rsx! {
                div {
                    class: "container py-5 text-center",
                    h2 { "Acceso denegado" }
                    p { class: "text-muted", "Tu perfil no tiene permiso para ver esta sección." }
                    Link { to: Route::Dashboard {}, class: "btn btn-primary", "Ir a mi panel" }
                }
            }
        }
        Access::Granted => {
            let (name, role) = user
                .map(|u| (u.display_name(), u.role.label()))
                .unwrap_or_default();
            rsx! {
                div {
                    class: "container py-4",
                    div {
                        class: "d-flex justify-content-between align-items-center mb-4",
                        span { class: "text-muted", "{name}" }
                        span { class: "badge bg-secondary", "{role}" }
                    }
                    Outlet::<Route> {}
                }
            }
        }
    }
}

/// `/dashboard`: forwards to the page for the user's role.
#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    let target = auth().user.and_then(|user| home_for(user.role));
    match target {
        Some(route) => {
            nav.replace(route);
            rsx! {}
        }
        None => rsx! {
            div {
                class: "alert alert-warning",
                "Tu cuenta no tiene un rol con panel asignado. Contacta a un administrador."
            }
        },
    }
}
