use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Demo() -> Element {
    rsx! {
        div {
            class: "container py-5",
            h1 { class: "mb-3", "Demo de SanArte" }
            p {
                "Recorre la plataforma: registra un perfil, inicia sesión y abre tu panel para ver "
                "expedientes, entrevistas y datos personales."
            }
            div {
                class: "ratio ratio-16x9 my-4",
                iframe {
                    src: "https://www.youtube.com/embed/Hac-5Z_1aVA",
                    title: "SanArte en acción",
                    allowfullscreen: true,
                }
            }
            Link { to: Route::Home {}, class: "btn btn-outline-dark", "Volver al inicio" }
        }
    }
}
