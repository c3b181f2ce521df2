use dioxus::prelude::*;

use store::ClientConfig;
use ui::SessionProvider;
use views::{
    AdminDash, Dashboard, DashboardLayout, Demo, Home, Interview, Login, NotFound, PatientDash,
    ProfessionalDash, Register, Shell, Single, StudentDash,
};

mod guard;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/single/:the_id")]
        Single { the_id: String },
        #[route("/demo")]
        Demo {},
        #[route("/register?:rol")]
        Register { rol: String },
        #[route("/login")]
        Login {},
        #[nest("/dashboard")]
            #[layout(DashboardLayout)]
                #[route("/")]
                Dashboard {},
                #[route("/admin")]
                AdminDash {},
                #[route("/student")]
                StudentDash {},
                #[route("/student/interview/:medical_file_id")]
                Interview { medical_file_id: i64 },
                #[route("/professional")]
                ProfessionalDash {},
                #[route("/patient")]
                PatientDash {},
            #[end_layout]
        #[end_nest]
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";

/// Client settings compiled into the bundle.
const EMBEDDED_CONFIG: &str = include_str!("../sanarte.toml");

fn main() {
    dioxus::launch(App);
}

/// Embedded settings with the build-time `BACKEND_URL` applied.
fn load_config() -> ClientConfig {
    let backend_url = option_env!("BACKEND_URL");
    let config = match ClientConfig::load(EMBEDDED_CONFIG, backend_url) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, file = ClientConfig::filename(), "invalid embedded config, using defaults");
            ClientConfig::load("", backend_url).unwrap_or_default()
        }
    };
    tracing::info!(backend = %config.api.base_url, "client config loaded");
    config
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: BOOTSTRAP_CSS }
        document::Link { rel: "stylesheet", href: ui::UI_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            config,
            Router::<Route> {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = ClientConfig::from_toml(EMBEDDED_CONFIG).unwrap();
        assert_eq!(config.redirect_delay().as_millis(), 2000);
        assert!(config.api.base_url.starts_with("http"));
    }

    #[test]
    fn test_routes_parse() {
        assert_eq!("/".parse::<Route>().ok(), Some(Route::Home {}));
        assert_eq!(
            "/dashboard/student/interview/12".parse::<Route>().ok(),
            Some(Route::Interview { medical_file_id: 12 })
        );
        assert_eq!(
            "/register?rol=estudiante".parse::<Route>().ok(),
            Some(Route::Register { rol: "estudiante".into() })
        );
        assert!(matches!(
            "/no/such/page".parse::<Route>(),
            Ok(Route::NotFound { .. })
        ));
    }
}
