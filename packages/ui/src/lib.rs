//! # UI crate: shared components for SanArte
//!
//! Everything the pages are built from. The routes themselves live in the
//! `web` crate; components here navigate by path so they do not depend on it.
//!
//! | Module | Contents |
//! |--------|----------|
//! | `auth` | [`SessionProvider`], [`use_auth`], [`use_api`], [`LogoutButton`] |
//! | [`forms`] | Login, registration, personal data and interview forms |
//! | [`tables`] | Users table and patient tables |
//! | `navbar`, `footer` | Page chrome |
//! | [`browser`] | Alerts, confirmation, history and timers |

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const UI_CSS: Asset = asset!("/assets/ui.css");

mod auth;
pub use auth::{
    use_api, use_auth, use_client_config, AppClient, AuthState, LogoutButton, SessionProvider,
};

pub mod browser;

mod error;
pub use error::FormError;

pub mod forms;
pub use forms::{BackgroundForm, FileForm, LoginForm, RegisterForm};

pub mod tables;
pub use tables::{PatientSource, PatientTable, UsersTable};

mod navbar;
pub use navbar::Navbar;

mod footer;
pub use footer::Footer;

mod session;
pub use session::make_session;
