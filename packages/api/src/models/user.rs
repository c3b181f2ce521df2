//! # User records as the backend serialises them
//!
//! ## [`UserInfo`]
//!
//! The user object returned by `POST /api/login` (inside `{token, user}`) and by
//! `GET /api/users`. It is also what the session stores under the `user` key.
//! Every field except `id` and `email` defaults, so older or trimmed payloads
//! still deserialise.
//!
//! - `role`: [`Role`], the backend's Spanish role names (`"administrador"`,
//!   `"profesional"`, `"paciente"`, `"estudiante"`).
//! - `status`: [`UserStatus`], the approval state (`"preaprobado"`, `"aprobado"`,
//!   `"inactivo"`).
//! - `medical_file`: the patient's [`MedicalFileSummary`], when one exists.
//!
//! Unrecognised role or status strings map to an `Unknown` variant rather than
//! failing the whole payload.
//!
//! ## [`PatientSummary`]
//!
//! A row of the student and professional patient tables. The backend sends the
//! name split into four parts plus contact details; all of them may be missing.

use serde::{Deserialize, Serialize};

/// Role a user registers with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "administrador")]
    Admin,
    #[serde(rename = "profesional")]
    Professional,
    #[serde(rename = "paciente")]
    Patient,
    #[serde(rename = "estudiante")]
    Student,
    #[default]
    #[serde(other)]
    Unknown,
}

impl Role {
    /// Roles a visitor can pick when registering.
    pub const REGISTRABLE: [Role; 3] = [Role::Professional, Role::Student, Role::Patient];

    /// Parse the wire name, as used in the `?rol=` query parameter.
    pub fn from_param(value: &str) -> Option<Self> {
        match value.trim() {
            "administrador" => Some(Self::Admin),
            "profesional" => Some(Self::Professional),
            "paciente" => Some(Self::Patient),
            "estudiante" => Some(Self::Student),
            _ => None,
        }
    }

    /// The wire name; empty for [`Role::Unknown`].
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "administrador",
            Self::Professional => "profesional",
            Self::Patient => "paciente",
            Self::Student => "estudiante",
            Self::Unknown => "",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "Administrador",
            Self::Professional => "Profesional",
            Self::Patient => "Paciente",
            Self::Student => "Estudiante",
            Self::Unknown => "Desconocido",
        }
    }
}

/// Approval state of an account.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserStatus {
    #[default]
    #[serde(rename = "preaprobado")]
    PreApproved,
    #[serde(rename = "aprobado")]
    Approved,
    #[serde(rename = "inactivo")]
    Inactive,
    #[serde(other)]
    Unknown,
}

impl UserStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::PreApproved => "preaprobado",
            Self::Approved => "aprobado",
            Self::Inactive => "inactivo",
            Self::Unknown => "desconocido",
        }
    }
}

/// The medical file attached to a patient account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MedicalFileSummary {
    pub id: i64,
    pub user_id: Option<i64>,
    pub created_by: Option<i64>,
    pub supervised_by: Option<i64>,
}

/// User information as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub status: UserStatus,
    #[serde(default)]
    pub names: String,
    #[serde(default)]
    pub first_surname: String,
    #[serde(default)]
    pub second_surname: Option<String>,
    #[serde(default)]
    pub birth_day: Option<String>,
    #[serde(default)]
    pub profession: Option<String>,
    #[serde(default)]
    pub medical_file: Option<MedicalFileSummary>,
}

impl UserInfo {
    /// Names and surnames joined with single spaces, skipping blanks.
    pub fn full_name(&self) -> String {
        [
            self.names.as_str(),
            self.first_surname.as_str(),
            self.second_surname.as_deref().unwrap_or_default(),
        ]
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
    }

    /// Get display name, falling back to email if no name is set.
    pub fn display_name(&self) -> String {
        let name = self.full_name();
        if name.is_empty() {
            self.email.clone()
        } else {
            name
        }
    }

    pub fn medical_file_id(&self) -> Option<i64> {
        self.medical_file.as_ref().map(|file| file.id)
    }
}

/// Patient row shown to students and professionals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatientSummary {
    pub id: i64,
    pub first_name: Option<String>,
    pub second_name: Option<String>,
    pub first_surname: Option<String>,
    pub second_surname: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_from_login_payload() {
        let user: UserInfo = serde_json::from_value(serde_json::json!({
            "id": 7,
            "email": "ana@example.com",
            "role": "estudiante",
            "status": "aprobado",
            "names": "Ana",
            "first_surname": "López",
            "second_surname": null,
            "birth_day": "2001-04-09",
            "profession": null,
            "medical_file": null
        }))
        .unwrap();

        assert_eq!(user.role, Role::Student);
        assert_eq!(user.status, UserStatus::Approved);
        assert_eq!(user.full_name(), "Ana López");
        assert!(user.medical_file_id().is_none());
    }

    #[test]
    fn test_unknown_role_and_missing_fields() {
        let user: UserInfo = serde_json::from_value(serde_json::json!({
            "id": 1,
            "email": "root@example.com",
            "role": "superuser"
        }))
        .unwrap();

        assert_eq!(user.role, Role::Unknown);
        assert_eq!(user.status, UserStatus::PreApproved);
        assert_eq!(user.display_name(), "root@example.com");
    }

    #[test]
    fn test_medical_file_id() {
        let user: UserInfo = serde_json::from_value(serde_json::json!({
            "id": 3,
            "email": "p@example.com",
            "role": "paciente",
            "medical_file": { "id": 42, "user_id": 3 }
        }))
        .unwrap();

        assert_eq!(user.medical_file_id(), Some(42));
    }

    #[test]
    fn test_role_from_param() {
        assert_eq!(Role::from_param("profesional"), Some(Role::Professional));
        assert_eq!(Role::from_param(" paciente "), Some(Role::Patient));
        assert_eq!(Role::from_param("doctor"), None);
        assert_eq!(Role::from_param(""), None);
        assert_eq!(Role::Student.as_str(), "estudiante");
    }

    #[test]
    fn test_patient_summary_tolerates_nulls() {
        let rows: Vec<PatientSummary> = serde_json::from_value(serde_json::json!([
            { "id": 1, "first_name": "Luis", "second_name": null, "email": "l@example.com" },
            { "id": 2 }
        ]))
        .unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].first_name.as_deref(), Some("Luis"));
        assert!(rows[1].email.is_none());
    }
}
