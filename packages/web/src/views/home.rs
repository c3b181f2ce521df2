use api::Role;
use dioxus::prelude::*;
use ui::icons::{
    FaHandshakeAngle, FaHeart, FaLaptopMedical, FaPeopleArrowsLeftRight, FaUserDoctor, FaUserGraduate,
};
use ui::Icon;

use crate::Route;

const TESTIMONIALS: [(&str, &str); 3] = [
    (
        "Una herramienta humana que me hizo sentir acompañada en todo momento.",
        "Paciente",
    ),
    (
        "SanArte me ayudó a integrar la práctica real con el aprendizaje académico.",
        "Estudiante de Terapia",
    ),
    (
        "Por fin una plataforma hecha desde la vocación, no solo desde la tecnología.",
        "Profesional en salud",
    ),
];

/// Landing page: pitch, testimonials, register-by-role and login links.
#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "container-fluid d-flex flex-column text-white home-hero",

            header {
                class: "py-5 border-bottom border-light text-center",
                h1 { class: "display-4 fw-bold", "SanArte · El Arte de Sanar" }
                p {
                    class: "lead mt-3 text-white-50",
                    "Un espacio donde lo clínico, lo académico y lo humano convergen con propósito."
                }
            }

            div {
                class: "container py-5",
                div {
                    class: "row row-cols-1 row-cols-md-3 g-4",
                    Feature {
                        title: "Entorno Académico",
                        text: "Aprendizaje con expedientes reales y supervisión constante.",
                        Icon { icon: FaUserGraduate, width: 32, height: 32 }
                    }
                    Feature {
                        title: "Gestión Profesional",
                        text: "Herramientas clínicas para optimizar atención y seguimiento.",
                        Icon { icon: FaUserDoctor, width: 32, height: 32 }
                    }
                    Feature {
                        title: "Trabajo Interdisciplinario",
                        text: "Un enfoque integral entre profesionales y pacientes.",
                        Icon { icon: FaPeopleArrowsLeftRight, width: 32, height: 32 }
                    }
                }

                section {
                    class: "mt-5",
                    h2 { class: "text-center mb-4 fw-bold", "Beneficios de SanArte" }
                    div {
                        class: "row row-cols-1 row-cols-md-3 g-4",
                        Feature {
                            title: "Accesibilidad Total",
                            text: "Información clínica disponible desde cualquier dispositivo.",
                            Icon { icon: FaLaptopMedical, width: 32, height: 32 }
                        }
                        Feature {
                            title: "Cuidado Humano",
                            text: "El paciente es protagonista de un proceso ético y empático.",
                            Icon { icon: FaHeart, width: 32, height: 32 }
                        }
                        Feature {
                            title: "Red Colaborativa",
                            text: "Profesionales y estudiantes conectados por un mismo propósito.",
                            Icon { icon: FaHandshakeAngle, width: 32, height: 32 }
                        }
                    }
                }

                section {
                    class: "mt-5",
                    h2 { class: "text-center mb-4 fw-bold", "Voces que Sanan" }
                    div {
                        class: "row g-4",
                        for (quote, author) in TESTIMONIALS {
                            div {
                                class: "col-md-4",
                                div {
                                    class: "card bg-transparent text-white border-light h-100 shadow-sm",
                                    div {
                                        class: "card-body",
                                        p { class: "card-text", "“{quote}”" }
                                        h6 { class: "card-subtitle mt-3 text-white-50", "{author}" }
                                    }
                                }
                            }
                        }
                    }
                }

                div {
                    class: "text-center mt-5",
                    h4 { class: "mb-4", "Crea tu cuenta" }
                    div {
                        class: "d-flex justify-content-center flex-wrap gap-3",
                        for role in Role::REGISTRABLE {
                            Link {
                                to: Route::Register { rol: role.as_str().to_string() },
                                class: "btn btn-outline-light btn-lg",
                                {role.label()}
                            }
                        }
                    }
                }

                div {
                    class: "text-center mt-4",
                    p { class: "text-white-50 mb-2", "¿Ya tienes una cuenta?" }
                    Link { to: Route::Login {}, class: "btn btn-light btn-lg text-dark", "Iniciar Sesión" }
                }
            }
        }
    }
}

#[component]
fn Feature(title: &'static str, text: &'static str, children: Element) -> Element {
    rsx! {
        div {
            class: "col",
            div {
                class: "card h-100 border-0 shadow home-card",
                div {
                    class: "card-body text-center",
                    div { class: "mb-3", {children} }
                    h5 { class: "card-title fw-bold", "{title}" }
                    p { class: "card-text", "{text}" }
                }
            }
        }
    }
}
