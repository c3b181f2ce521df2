//! Email/password sign-in.

use std::time::Duration;

use api::{ApiClient, Credentials, LoginResponse, Transport, UserInfo};
use dioxus::prelude::*;

use super::fields::record_fields;
use super::Redirect;
use crate::auth::{use_api, use_auth, use_client_config, AuthState};
use crate::browser;
use crate::FormError;

const REJECTED: &str = "Error al iniciar sesión";
const UNREACHABLE: &str = "Ocurrió un error al conectar con el servidor.";
const SIGNED_IN: &str = "Inicio de sesión exitoso. Redirigiendo...";

record_fields! {
    pub enum LoginField for Credentials: String {
        Email => email, "Correo Electrónico";
        Password => password, "Contraseña";
    }
}

impl LoginField {
    fn input_type(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
        }
    }
}

/// Sign in and persist the session.
///
/// On success the token and user are written to the session before this
/// returns; on failure the session is left untouched.
pub async fn submit_login<T: Transport>(
    api: &ApiClient<T>,
    credentials: &Credentials,
    delay: Duration,
) -> Result<(UserInfo, Redirect), FormError> {
    match api.login(credentials).await {
        Ok(LoginResponse { token, user }) => {
            api.session().login(&token, &user);
            Ok((user, Redirect { to: "/", after: delay }))
        }
        Err(e) => {
            tracing::warn!(error = %e, "login failed");
            Err(FormError::from_api(&e, REJECTED, UNREACHABLE))
        }
    }
}

/// Login form component.
#[component]
pub fn LoginForm() -> Element {
    let api = use_api();
    let config = use_client_config();
    let mut auth = use_auth();
    let nav = use_navigator();
    let mut credentials = use_signal(Credentials::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut success = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        let delay = config.redirect_delay();
        spawn(async move {
            error.set(None);
            success.set(None);
            loading.set(true);

            match submit_login(&api, &credentials(), delay).await {
                Ok((user, redirect)) => {
                    auth.set(AuthState { user: Some(user) });
                    success.set(Some(SIGNED_IN.to_string()));
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

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "card auth-card",
                h2 { class: "text-center mb-4", "Iniciar Sesión" }

                form {
                    onsubmit: handle_login,

                    for field in LoginField::ALL.iter().copied() {
                        div {
                            class: "mb-3",
                            label { class: "form-label", r#for: field.key(), {field.label()} }
                            input {
                                id: field.key(),
                                name: field.key(),
                                class: "form-control",
                                r#type: field.input_type(),
                                required: true,
                                value: field.get(&credentials.read()).clone(),
                                oninput: move |evt: FormEvent| {
                                    credentials.with_mut(|c| *field.get_mut(c) = evt.value())
                                },
                            }
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
                            if loading() { "Entrando..." } else { "Entrar" }
                        }
                    }
                }

                p {
                    class: "mt-3 text-center",
                    "¿No tienes cuenta? "
                    Link { to: "/", "Elige tu perfil y regístrate" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::session::{TOKEN_KEY, USER_KEY};
    use api::{MemoryTransport, Session};
    use serde_json::json;
    use store::{MemoryStorage, SessionStorage};

    fn credentials() -> Credentials {
        Credentials {
            email: "ana@example.com".into(),
            password: "secreto".into(),
        }
    }

    #[tokio::test]
    async fn test_rejected_login_shows_message_and_stores_nothing() {
        let storage = MemoryStorage::new();
        let transport = MemoryTransport::new().respond(401, json!({ "message": "X" }));
        let api = ApiClient::new(transport.clone(), Session::new(storage.clone()));

        let err = submit_login(&api, &credentials(), Duration::from_secs(2))
            .await
            .unwrap_err();

        assert_eq!(err, FormError::Rejected("X".into()));
        assert_eq!(err.to_string(), "X");
        assert!(storage.get(TOKEN_KEY).is_none());
        assert!(storage.get(USER_KEY).is_none());
        assert_eq!(transport.request_count(), 1);
    }

    #[tokio::test]
    async fn test_bad_request_without_message_uses_fallback() {
        let transport = MemoryTransport::new().respond(400, json!({}));
        let api = ApiClient::new(transport, Session::new(MemoryStorage::new()));

        let err = submit_login(&api, &credentials(), Duration::ZERO)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), REJECTED);
    }

    #[tokio::test]
    async fn test_successful_login_persists_session_and_redirects_home() {
        let storage = MemoryStorage::new();
        let transport = MemoryTransport::new().respond(
            200,
            json!({
                "token": "jwt.abc.def",
                "user": { "id": 11, "email": "ana@example.com", "role": "estudiante", "names": "Ana" }
            }),
        );
        let api = ApiClient::new(transport, Session::new(storage.clone()));

        let (user, redirect) = submit_login(&api, &credentials(), Duration::from_millis(2000))
            .await
            .unwrap();

        assert_eq!(user.id, 11);
        assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("jwt.abc.def"));
        let stored: serde_json::Value =
            serde_json::from_str(&storage.get(USER_KEY).unwrap()).unwrap();
        assert_eq!(stored["email"], "ana@example.com");
        assert_eq!(
            redirect,
            Redirect {
                to: "/",
                after: Duration::from_millis(2000)
            }
        );
    }

    #[tokio::test]
    async fn test_unreachable_server() {
        let storage = MemoryStorage::new();
        let transport = MemoryTransport::new().fail("connection refused");
        let api = ApiClient::new(transport, Session::new(storage.clone()));

        let err = submit_login(&api, &credentials(), Duration::ZERO)
            .await
            .unwrap_err();

        assert_eq!(err, FormError::Unreachable(UNREACHABLE.into()));
        assert!(storage.is_empty());
    }

    #[test]
    fn test_fields_follow_payload_keys() {
        let mut creds = Credentials::default();
        *LoginField::Email.get_mut(&mut creds) = "a@b.c".into();

        assert_eq!(creds.email, "a@b.c");
        assert_eq!(LoginField::Password.key(), "password");
        assert_eq!(LoginField::Password.input_type(), "password");
    }
}
