use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    tracing::debug!(%path, "no route");

    rsx! {
        div {
            class: "container text-center py-5",
            h1 { "Página no encontrada" }
            p { class: "text-muted", "No existe nada en /{path}." }
            Link { to: Route::Home {}, class: "btn btn-primary", "Ir al inicio" }
        }
    }
}
