//! Data models exchanged with the backend.

use serde::{Deserialize, Deserializer};

mod auth;
mod background;
mod personal_data;
mod user;

pub use auth::{Credentials, LoginResponse, Registration};
pub use background::{
    BackgroundsPayload, FamilyBackground, GynecologicalBackground, NonPathologicalBackground,
    PathologicalBackground, PersonalDataSection,
};
pub use personal_data::{PersonalData, Sex, WithMedicalFile};
pub use user::{MedicalFileSummary, PatientSummary, Role, UserInfo, UserStatus};

/// Reads `null` as the field's default, the way a missing key is read.
///
/// Nullable backend columns arrive as explicit `null`s.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
