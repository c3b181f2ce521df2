//! # Medical background records
//!
//! The interview form collects four categories of history, each stored by the
//! backend as its own row keyed by the medical file:
//!
//! | Record | Payload key | Content |
//! |--------|-------------|---------|
//! | [`PathologicalBackground`] | `patological_background` | Free text: diseases, medication, surgeries... |
//! | [`FamilyBackground`] | `family_background` | Hereditary condition flags plus free text |
//! | [`NonPathologicalBackground`] | `non_pathological_background` | Lifestyle text plus tattoo/piercing flags |
//! | [`GynecologicalBackground`] | `gynecological_background` | Counts and contraceptive method |
//!
//! Every category names its free-text catch-all `others`. The pathological key
//! keeps the backend's `patological_` spelling.
//!
//! Gynecological counts are typed into text inputs. They go over the wire as a
//! JSON integer when the text is numeric, `null` when blank, and the raw text
//! otherwise, so the backend's validation sees what the user typed.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathologicalBackground {
    #[serde(deserialize_with = "super::null_as_default")]
    pub personal_diseases: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub medications: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub hospitalizations: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub surgeries: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub traumatisms: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub transfusions: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub allergies: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub others: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FamilyBackground {
    #[serde(deserialize_with = "super::null_as_default")]
    pub hypertension: bool,
    #[serde(deserialize_with = "super::null_as_default")]
    pub diabetes: bool,
    #[serde(deserialize_with = "super::null_as_default")]
    pub cancer: bool,
    #[serde(deserialize_with = "super::null_as_default")]
    pub heart_disease: bool,
    #[serde(deserialize_with = "super::null_as_default")]
    pub kidney_disease: bool,
    #[serde(deserialize_with = "super::null_as_default")]
    pub liver_disease: bool,
    #[serde(deserialize_with = "super::null_as_default")]
    pub mental_illness: bool,
    #[serde(deserialize_with = "super::null_as_default")]
    pub congenital_malformations: bool,
    #[serde(deserialize_with = "super::null_as_default")]
    pub others: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NonPathologicalBackground {
    #[serde(deserialize_with = "super::null_as_default")]
    pub education_level: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub economic_activity: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub marital_status: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub dependents: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub occupation: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub recent_travels: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub social_activities: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub exercise: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub diet_supplements: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub hygiene: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub tattoos: bool,
    #[serde(deserialize_with = "super::null_as_default")]
    pub piercings: bool,
    #[serde(deserialize_with = "super::null_as_default")]
    pub hobbies: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub tobacco_use: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub alcohol_use: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub recreational_drugs: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub addictions: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub others: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GynecologicalBackground {
    #[serde(with = "count")]
    pub menarche_age: String,
    #[serde(with = "count")]
    pub pregnancies: String,
    #[serde(with = "count")]
    pub births: String,
    #[serde(with = "count")]
    pub c_sections: String,
    #[serde(with = "count")]
    pub abortions: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub contraceptive_method: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub others: String,
}

/// The personal-data subset edited on the interview form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalDataSection {
    #[serde(deserialize_with = "super::null_as_default")]
    pub sex: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub address: String,
}

/// Body of `POST /api/backgrounds`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BackgroundsPayload {
    #[serde(rename = "patological_background")]
    pub pathological: PathologicalBackground,
    #[serde(rename = "family_background")]
    pub family: FamilyBackground,
    #[serde(rename = "non_pathological_background")]
    pub non_pathological: NonPathologicalBackground,
    #[serde(rename = "gynecological_background")]
    pub gynecological: GynecologicalBackground,
    pub medical_file_id: i64,
    pub user_id: Option<i64>,
}

mod count {
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value;

    pub fn serialize<S: Serializer>(value: &str, serializer: S) -> Result<S::Ok, S::Error> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return serializer.serialize_none();
        }
        match trimmed.parse::<i64>() {
            Ok(n) => serializer.serialize_i64(n),
            Err(_) => serializer.serialize_str(value),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        Ok(match Option::<Value>::deserialize(deserializer)? {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s,
            Some(other) => other.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_counts_serialize_as_numbers_or_null() {
        let gyneco = GynecologicalBackground {
            menarche_age: "12".into(),
            pregnancies: " 2 ".into(),
            births: "".into(),
            c_sections: "ninguna".into(),
            ..Default::default()
        };
        let body = serde_json::to_value(&gyneco).unwrap();

        assert_eq!(body["menarche_age"], json!(12));
        assert_eq!(body["pregnancies"], json!(2));
        assert_eq!(body["births"], json!(null));
        assert_eq!(body["c_sections"], json!("ninguna"));
        assert_eq!(body["contraceptive_method"], json!(""));
    }

    #[test]
    fn test_counts_deserialize_from_numbers() {
        let gyneco: GynecologicalBackground = serde_json::from_value(json!({
            "menarche_age": 13,
            "pregnancies": null,
            "others": "n/a"
        }))
        .unwrap();

        assert_eq!(gyneco.menarche_age, "13");
        assert_eq!(gyneco.pregnancies, "");
        assert_eq!(gyneco.births, "");
        assert_eq!(gyneco.others, "n/a");
    }

    #[test]
    fn test_null_fields_read_as_defaults() {
        let family: FamilyBackground = serde_json::from_value(json!({
            "diabetes": true,
            "cancer": null,
            "others": null
        }))
        .unwrap();
        assert!(family.diabetes);
        assert!(!family.cancer);
        assert_eq!(family.others, "");

        let lifestyle: NonPathologicalBackground = serde_json::from_value(json!({
            "occupation": "docente",
            "tattoos": null,
            "hobbies": null
        }))
        .unwrap();
        assert_eq!(lifestyle.occupation, "docente");
        assert!(!lifestyle.tattoos);
        assert_eq!(lifestyle.hobbies, "");

        let section: PersonalDataSection =
            serde_json::from_value(json!({"sex": "otro", "address": null})).unwrap();
        assert_eq!(section.address, "");
    }

    #[test]
    fn test_payload_uses_backend_keys() {
        let payload = BackgroundsPayload {
            pathological: PathologicalBackground {
                allergies: "penicilina".into(),
                ..Default::default()
            },
            family: FamilyBackground {
                diabetes: true,
                ..Default::default()
            },
            non_pathological: NonPathologicalBackground::default(),
            gynecological: GynecologicalBackground::default(),
            medical_file_id: 5,
            user_id: Some(8),
        };
        let body = serde_json::to_value(&payload).unwrap();

        assert_eq!(body["patological_background"]["allergies"], "penicilina");
        assert_eq!(body["family_background"]["diabetes"], true);
        assert_eq!(body["non_pathological_background"]["tattoos"], false);
        assert!(body["gynecological_background"].is_object());
        assert_eq!(body["medical_file_id"], 5);
        assert_eq!(body["user_id"], 8);
        assert!(body.get("personal_data").is_none());
    }
}
