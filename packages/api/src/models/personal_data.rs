//! Personal data of a patient, one-to-one with a medical file.

use serde::{Deserialize, Serialize};

/// Biological sex options accepted by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    Female,
    Male,
    Other,
}

impl Sex {
    pub const ALL: [Sex; 3] = [Sex::Female, Sex::Male, Sex::Other];

    /// The value sent over the wire.
    pub fn value(self) -> &'static str {
        match self {
            Self::Female => "femenino",
            Self::Male => "masculino",
            Self::Other => "otro",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Female => "Femenino",
            Self::Male => "Masculino",
            Self::Other => "Otro",
        }
    }
}

/// Patient personal data.
///
/// Fields are kept as the strings the form inputs produce; an empty string
/// means "not filled in". Missing or `null` keys in a response read as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalData {
    #[serde(deserialize_with = "super::null_as_default")]
    pub first_name: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub second_name: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub first_surname: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub second_surname: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub birth_day: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub sex: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub address: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub phone: String,
}

/// A record sent together with the medical file it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WithMedicalFile<T> {
    #[serde(flatten)]
    pub record: T,
    pub medical_file_id: Option<i64>,
}

impl<T> WithMedicalFile<T> {
    pub fn new(record: T, medical_file_id: Option<i64>) -> Self {
        Self {
            record,
            medical_file_id,
        }
    }
}
