//! Login and registration payloads.

use serde::{Deserialize, Serialize};

use super::UserInfo;

/// Body of `POST /api/login`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Successful `POST /api/login` response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

/// Body of `POST /api/register`.
///
/// `role` holds the wire name (`"profesional"`, `"estudiante"`, `"paciente"`)
/// taken from the registration link; `profession` only matters for
/// professionals but is always sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Registration {
    pub first_name: String,
    pub second_name: String,
    pub first_surname: String,
    pub second_surname: String,
    pub birth_day: String,
    pub sex: String,
    pub role: String,
    pub profession: String,
    pub phone: String,
    pub email: String,
    pub password: String,
}

impl Registration {
    /// An empty registration for the given `?rol=` value.
    pub fn for_role(role: &str) -> Self {
        Self {
            role: role.trim().to_string(),
            ..Default::default()
        }
    }
}
