//! Session context and hooks for the UI.

use api::{ApiClient, HttpTransport, UserInfo};
use dioxus::prelude::*;
use store::ClientConfig;

use crate::session::make_session;

/// The client every component talks to the backend through.
pub type AppClient = ApiClient<HttpTransport>;

/// Who is signed in, as far as rendering is concerned.
///
/// Mirrors the session's stored user so views re-render on login/logout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<UserInfo>,
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Get the shared API client (and through it, the session).
pub fn use_api() -> AppClient {
    use_context::<AppClient>()
}

pub fn use_client_config() -> ClientConfig {
    use_context::<ClientConfig>()
}

/// Provider component that builds the session and API client once.
/// Wrap your app with this component to enable authenticated requests.
#[component]
pub fn SessionProvider(config: ClientConfig, children: Element) -> Element {
    let api = use_context_provider(|| ApiClient::http(&config.api, make_session()));
    use_context_provider(|| config.clone());
    use_context_provider(|| {
        Signal::new(AuthState {
            user: api.session().user(),
        })
    });

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Cerrar sesión".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let api = use_api();
    let mut auth_state = use_auth();
    let nav = use_navigator();

    let onclick = move |_| {
        api.session().logout();
        auth_state.set(AuthState::default());
        nav.push("/login");
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
