use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

/// One persisted enrollment row from `basic_ed_students`.
///
/// Scalar columns are nullable text; list- and group-valued columns are
/// stored as opaque JSONB documents and never validated per-item.
/// `last_doctor_visit`, `last_doctor_visit_reason` and `general_condition`
/// have no wire counterpart and are always written as NULL.
#[derive(Debug, Clone, Default, FromRow)]
pub struct StudentRecord {
    pub id: String,
    pub school_year: Option<String>,
    pub grade_year_level: Option<String>,
    pub student_type: Option<String>,
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub suffix: Option<String>,
    pub gender: Option<String>,
    pub citizenship: Option<String>,
    pub contact_number: Option<String>,
    pub address: Option<String>,
    pub birth_month: Option<String>,
    pub birth_day: Option<String>,
    pub birth_year: Option<String>,
    pub birth_place: Option<String>,
    pub religion: Option<String>,
    pub baptism: Option<Value>,
    pub first_communion: Option<Value>,
    pub confirmation: Option<Value>,
    pub emergency_contact: Option<String>,
    pub emergency_relation: Option<String>,
    pub emergency_number: Option<String>,
    pub father_name: Option<String>,
    pub father_occupation: Option<String>,
    pub father_location: Option<String>,
    pub father_employment_type: Option<String>,
    pub father_status: Option<String>,
    pub father_education: Option<String>,
    pub father_specialization: Option<String>,
    pub mother_name: Option<String>,
    pub mother_occupation: Option<String>,
    pub mother_location: Option<String>,
    pub mother_employment_type: Option<String>,
    pub mother_status: Option<String>,
    pub mother_education: Option<String>,
    pub mother_specialization: Option<String>,
    pub parents_marital_status: Option<String>,
    pub child_residence: Option<String>,
    pub child_residence_other: Option<String>,
    pub birth_order: Option<String>,
    pub other_birth_order: Option<String>,
    pub number_of_siblings: Option<Value>,
    pub other_relatives: Option<Value>,
    pub total_relatives_at_home: Option<i32>,
    pub other_relative_specify: Option<String>,
    pub family_monthly_income: Option<String>,
    pub residence_type: Option<String>,
    pub languages_spoken_at_home: Option<String>,
    pub financial_support: Option<Value>,
    pub other_financial_support: Option<String>,
    pub leisure_activities: Option<Value>,
    pub other_leisure_activity: Option<String>,
    pub special_talents: Option<String>,
    pub guardian_name: Option<String>,
    pub guardian_relationship: Option<String>,
    pub other_guardian_relationship: Option<String>,
    pub guardian_address: Option<String>,
    pub siblings: Option<Value>,
    pub preschool: Option<Value>,
    pub elementary: Option<Value>,
    pub high_school: Option<Value>,
    pub organizations: Option<Value>,
    pub height: Option<String>,
    pub weight: Option<String>,
    pub physical_condition: Option<String>,
    pub health_problem: Option<String>,
    pub health_problem_details: Option<String>,
    pub last_doctor_visit: Option<String>,
    pub last_doctor_visit_reason: Option<String>,
    pub general_condition: Option<String>,
    pub test_results: Option<Value>,
    pub signature_name: Option<String>,
    pub signature_date: Option<String>,
    pub parent_signature_name: Option<String>,
    pub parent_signature_date: Option<String>,
    pub student_photo_url: Option<String>,
    #[sqlx(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[sqlx(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Lightweight projection returned by the list query. Serialized with the
/// column names as-is, matching the wire format of the list response.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StudentListRow {
    pub id: String,
    pub school_year: Option<String>,
    pub grade_year_level: Option<String>,
    pub student_type: Option<String>,
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub gender: Option<String>,
    pub citizenship: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}
