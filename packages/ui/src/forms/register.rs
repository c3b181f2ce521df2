use std::time::Duration;

use api::{ApiClient, Registration, Role, Transport};
use dioxus::prelude::*;

use super::fields::record_fields;
use super::{Redirect, SexSelect};
use crate::auth::{use_api, use_client_config};
use crate::browser;
use crate::FormError;

const REJECTED: &str = "Error al registrar";
const UNREACHABLE: &str = "Ocurrió un error en el servidor.";
const REGISTERED: &str = "Registro exitoso. Redirigiendo al inicio de sesión...";

record_fields! {
    /// Text inputs of the registration form. `sex` and `role` are handled
    /// separately: one is a select, the other comes from the link.
    pub enum RegisterField for Registration: String {
        FirstName => first_name, "Primer Nombre";
        SecondName => second_name, "Segundo Nombre";
        FirstSurname => first_surname, "Primer Apellido";
        SecondSurname => second_surname, "Segundo Apellido";
        BirthDay => birth_day, "Fecha de Nacimiento";
        Profession => profession, "Profesión";
        Phone => phone, "Teléfono";
        Email => email, "Correo Electrónico";
        Password => password, "Contraseña";
    }
}

impl RegisterField {
    fn input_type(self) -> &'static str {
        match self {
            Self::BirthDay => "date",
            Self::Phone => "tel",
            Self::Email => "email",
            Self::Password => "password",
            _ => "text",
        }
    }

    /// Whether the input must be filled in for the given wire role.
    fn required_for(self, role: &str) -> bool {
        match self {
            Self::Profession => self.visible_for(role),
            _ => matches!(
                self,
                Self::FirstName | Self::FirstSurname | Self::BirthDay | Self::Email | Self::Password
            ),
        }
    }

    /// Whether the input is shown for the given wire role.
    pub fn visible_for(self, role: &str) -> bool {
        self != Self::Profession || role == Role::Professional.as_str()
    }
}

/// Register a new account. Does not sign in.
pub async fn submit_registration<T: Transport>(
    api: &ApiClient<T>,
    registration: &Registration,
    delay: Duration,
) -> Result<Redirect, FormError> {
    match api.register(registration).await {
        Ok(_) => {
            tracing::info!(role = %registration.role, "registered");
            Ok(Redirect {
                to: "/login",
                after: delay,
            })
        }
        Err(e) => {
            tracing::warn!(error = %e, "registration failed");
            Err(FormError::from_api(&e, REJECTED, UNREACHABLE))
        }
    }
}

fn heading(role: &str) -> String {
    match Role::from_param(role) {
        Some(role) => format!("Registro de {}", role.label()),
        None => "Registro".to_string(),
    }
}

/// Registration form; `role` is the `?rol=` value of the link that led here.
#[component]
pub fn RegisterForm(role: String) -> Element {
    let api = use_api();
    let config = use_client_config();
    let nav = use_navigator();
    let mut registration = use_signal(|| Registration::for_role(&role));
    let mut error = use_signal(|| Option::<String>::None);
    let mut success = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Follow the query parameter when the same page is reached from another link
    if registration.peek().role != role.trim() {
        registration.with_mut(|r| r.role = role.trim().to_string());
    }

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        let delay = config.redirect_delay();
        spawn(async move {
            error.set(None);
            success.set(None);
            loading.set(true);

            match submit_registration(&api, &registration(), delay).await {
                Ok(redirect) => {
                    success.set(Some(REGISTERED.to_string()));
                    browser::sleep(redirect.after).await;
                    loading.set(false);
                    nav.push(redirect.to);
                }
                Err(e) => {
                    loading.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    let current_role = registration.read().role.clone();
    let title = heading(&current_role);

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "card auth-card",
                h2 { class: "text-center mb-4", "{title}" }

                form {
                    onsubmit: handle_register,

                    for field in RegisterField::ALL.iter().copied().filter(|f| f.visible_for(&current_role)) {
                        div {
                            class: "mb-3",
                            label { class: "form-label", r#for: field.key(), {field.label()} }
                            input {
                                id: field.key(),
                                name: field.key(),
                                class: "form-control",
                                r#type: field.input_type(),
                                required: field.required_for(&current_role),
                                value: field.get(&registration.read()).clone(),
                                oninput: move |evt: FormEvent| {
                                    registration.with_mut(|r| *field.get_mut(r) = evt.value())
                                },
                            }
                        }
                    }

                    div {
                        class: "mb-3",
                        label { class: "form-label", r#for: "sex", "Sexo" }
                        SexSelect {
                            id: "sex",
                            value: registration.read().sex.clone(),
                            on_change: move |sex: String| registration.with_mut(|r| r.sex = sex),
                        }
                    }

                    if let Some(err) = error() {
                        div { class: "alert alert-danger mt-3", "{err}" }
                    }
                    if let Some(msg) = success() {
                        div { class: "alert alert-success mt-3", "{msg}" }
                    }

                    div {
                        class: "text-center mt-4",
                        button {
                            r#type: "submit",
                            class: "btn btn-light btn-lg w-100",
                            disabled: loading(),
                            if loading() { "Registrando..." } else { "Registrarse" }
                        }
                    }
                }

                p {
                    class: "mt-3 text-center",
                    "¿Ya tienes cuenta? "
                    Link { to: "/login", "Inicia sesión" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::transport::Method;
    use api::{MemoryTransport, Session};
    use serde_json::json;
    use store::MemoryStorage;

    fn registration() -> Registration {
        let mut r = Registration::for_role("paciente");
        r.first_name = "Lucía".into();
        r.first_surname = "Pérez".into();
        r.email = "lucia@example.com".into();
        r.password = "secreto".into();
        r.sex = "femenino".into();
        r
    }

    #[tokio::test]
    async fn test_success_redirects_to_login_without_signing_in() {
        let storage = MemoryStorage::new();
        let transport = MemoryTransport::new().respond(201, json!({ "message": "ok" }));
        let api = ApiClient::new(transport.clone(), Session::new(storage.clone()));

        let redirect = submit_registration(&api, &registration(), Duration::from_secs(2))
            .await
            .unwrap();

        assert_eq!(redirect.to, "/login");
        assert_eq!(redirect.after, Duration::from_secs(2));
        assert!(storage.is_empty());

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::Post);
        assert_eq!(requests[0].path, "/api/register");
        let body = requests[0].body.as_ref().unwrap();
        assert_eq!(body["role"], "paciente");
        assert_eq!(body["first_name"], "Lucía");
        assert_eq!(body["profession"], "");
    }

    #[tokio::test]
    async fn test_rejection_uses_backend_message() {
        let transport =
            MemoryTransport::new().respond(400, json!({ "message": "El correo ya existe" }));
        let api = ApiClient::new(transport, Session::new(MemoryStorage::new()));

        let err = submit_registration(&api, &registration(), Duration::ZERO)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "El correo ya existe");
    }

    #[tokio::test]
    async fn test_fallback_messages() {
        let transport = MemoryTransport::new()
            .respond(500, json!(null))
            .fail("offline");
        let api = ApiClient::new(transport, Session::new(MemoryStorage::new()));

        let rejected = submit_registration(&api, &registration(), Duration::ZERO)
            .await
            .unwrap_err();
        assert_eq!(rejected, FormError::Rejected(REJECTED.into()));

        let unreachable = submit_registration(&api, &registration(), Duration::ZERO)
            .await
            .unwrap_err();
        assert_eq!(unreachable, FormError::Unreachable(UNREACHABLE.into()));
    }

    #[test]
    fn test_profession_only_for_professionals() {
        assert!(RegisterField::Profession.visible_for("profesional"));
        assert!(!RegisterField::Profession.visible_for("estudiante"));
        assert!(!RegisterField::Profession.visible_for(""));
        assert!(RegisterField::Email.visible_for("paciente"));
    }

    #[test]
    fn test_input_types_and_heading() {
        assert_eq!(RegisterField::BirthDay.input_type(), "date");
        assert_eq!(RegisterField::Phone.input_type(), "tel");
        assert_eq!(RegisterField::SecondName.input_type(), "text");

        let professional = Role::Professional.as_str();
        let student = Role::Student.as_str();
        assert!(RegisterField::BirthDay.required_for(student));
        assert!(RegisterField::Profession.required_for(professional));
        assert!(!RegisterField::Profession.required_for(student));
        assert!(!RegisterField::SecondName.required_for(professional));
        assert!(!RegisterField::Phone.required_for(student));
        assert_eq!(heading("estudiante"), format!("Registro de {}", Role::Student.label()));
        assert_eq!(heading("nadie"), "Registro");
    }
}
