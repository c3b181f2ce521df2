use dioxus::prelude::*;

use crate::Route;

/// Placeholder detail page for a single item.
#[component]
pub fn Single(the_id: String) -> Element {
    rsx! {
        div {
            class: "container text-center py-5",
            h1 { class: "display-6", "Elemento {the_id}" }
            p { class: "text-muted", "Esta página mostrará el detalle del elemento seleccionado." }
            Link { to: Route::Home {}, class: "btn btn-primary", "Volver al inicio" }
        }
    }
}
