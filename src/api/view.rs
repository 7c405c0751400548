//! The nested wire shape exchanged with clients.
//!
//! Scalar fields are optional strings; group-valued fields the storage
//! layer treats as opaque documents stay `serde_json::Value` so client
//! payloads pass through without per-item validation. Serde defaults here
//! are the *write-side* defaults (absent group -> `{}`, absent list ->
//! `[]`); the read side substitutes its own richer defaults in
//! `format::record_to_view`.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

pub(crate) fn empty_object() -> Value {
    json!({})
}

pub(crate) fn empty_array() -> Value {
    json!([])
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StudentView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub school_year: Option<String>,
    pub grade_year_level: Option<String>,
    pub student_type: Option<String>,
    pub student: StudentName,
    pub contact: Contact,
    pub birth: Birth,
    pub religion: Option<String>,
    pub sacraments: Sacraments,
    // the one snake_case group key in an otherwise camelCase wire format
    #[serde(rename = "emergency_contact")]
    pub emergency_contact: EmergencyContact,
    pub father: Parent,
    pub mother: Parent,
    pub parents_marital_status: Option<String>,
    pub child_residence: ChildResidence,
    pub birth_order: BirthOrder,
    #[serde(default = "empty_object")]
    pub number_of_siblings: Value,
    pub other_relatives: OtherRelatives,
    pub family_monthly_income: Option<String>,
    pub residence_type: Option<String>,
    pub languages_spoken_at_home: Option<String>,
    #[serde(default = "empty_array")]
    pub financial_support: Value,
    pub other_financial_support: Option<String>,
    #[serde(default = "empty_array")]
    pub leisure_activities: Value,
    pub other_leisure_activity: Option<String>,
    pub special_talents: Option<String>,
    pub guardian: Guardian,
    #[serde(default = "empty_array")]
    pub siblings: Value,
    pub education: EducationHistory,
    #[serde(default = "empty_array")]
    pub organizations: Value,
    pub physical_info: PhysicalInfo,
    #[serde(default = "empty_array")]
    pub test_results: Value,
    pub signature_name: Option<String>,
    pub signature_date: Option<String>,
    pub parent_signature_name: Option<String>,
    pub parent_signature_date: Option<String>,
    pub student_photo_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StudentName {
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub suffix: Option<String>,
    pub gender: Option<String>,
    pub citizenship: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Contact {
    pub contact_number: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Birth {
    pub month: Option<String>,
    pub day: Option<String>,
    pub year: Option<String>,
    pub place: Option<String>,
}

/// Sacrament records are opaque documents (`{received, date, church}` by
/// convention, but never validated)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Sacraments {
    #[serde(default = "empty_object")]
    pub baptism: Value,
    #[serde(default = "empty_object")]
    pub first_communion: Value,
    #[serde(default = "empty_object")]
    pub confirmation: Value,
}

impl Default for Sacraments {
    fn default() -> Self {
        Self {
            baptism: empty_object(),
            first_communion: empty_object(),
            confirmation: empty_object(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmergencyContact {
    pub name: Option<String>,
    pub relation: Option<String>,
    pub number: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Parent {
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub occupation: Option<String>,
    pub location: Option<String>,
    pub employment_type: Option<String>,
    pub status: Option<String>,
    pub education: Option<String>,
    pub specialization: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChildResidence {
    pub residence: Option<String>,
    pub other: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BirthOrder {
    pub order: Option<String>,
    pub other: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OtherRelatives {
    #[serde(default = "empty_array")]
    pub relatives: Value,
    pub other_specify: Option<String>,
}

impl Default for OtherRelatives {
    fn default() -> Self {
        Self {
            relatives: empty_array(),
            other_specify: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Guardian {
    pub name: Option<String>,
    pub relationship: Option<String>,
    pub other_relationship: Option<String>,
    pub address: Option<String>,
}

/// Prior-schooling entries are opaque documents (`{school, awards, year}`
/// by convention)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EducationHistory {
    #[serde(default = "empty_object")]
    pub preschool: Value,
    #[serde(default = "empty_object")]
    pub elementary: Value,
    #[serde(default = "empty_object")]
    pub high_school: Value,
}

impl Default for EducationHistory {
    fn default() -> Self {
        Self {
            preschool: empty_object(),
            elementary: empty_object(),
            high_school: empty_object(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PhysicalInfo {
    pub height: Option<String>,
    pub weight: Option<String>,
    pub condition: Option<String>,
    pub health_problem: Option<String>,
    pub health_problem_details: Option<String>,
    /// Accepted on input but has no backing column; reads back as ""
    pub allergies: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_groups_get_write_defaults() {
        let view: StudentView = serde_json::from_value(json!({
            "schoolYear": "2024-2025"
        }))
        .unwrap();

        assert_eq!(view.school_year.as_deref(), Some("2024-2025"));
        assert_eq!(view.sacraments.baptism, json!({}));
        assert_eq!(view.education.high_school, json!({}));
        assert_eq!(view.siblings, json!([]));
        assert_eq!(view.test_results, json!([]));
        assert_eq!(view.other_relatives.relatives, json!([]));
        assert_eq!(view.number_of_siblings, json!({}));
        assert!(view.student.last_name.is_none());
        assert!(view.guardian.name.is_none());
    }

    #[test]
    fn test_emergency_contact_group_key_is_snake_case() {
        let view: StudentView = serde_json::from_value(json!({
            "emergency_contact": { "name": "Maria", "relation": "Aunt", "number": "0917" }
        }))
        .unwrap();
        assert_eq!(view.emergency_contact.name.as_deref(), Some("Maria"));

        let out = serde_json::to_value(&view).unwrap();
        assert!(out.get("emergency_contact").is_some());
        assert!(out.get("emergencyContact").is_none());
    }

    #[test]
    fn test_opaque_groups_pass_through_unvalidated() {
        let view: StudentView = serde_json::from_value(json!({
            "siblings": [{ "name": "Ana", "age": 12 }, "free-form entry"],
            "sacraments": { "baptism": { "received": true, "extra": "kept" } }
        }))
        .unwrap();

        assert_eq!(view.siblings[1], json!("free-form entry"));
        assert_eq!(view.sacraments.baptism["extra"], json!("kept"));
        // untouched sacraments still default
        assert_eq!(view.sacraments.confirmation, json!({}));
    }
}
