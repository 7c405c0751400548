//! Bidirectional mapping between the flat stored row and the nested wire
//! shape.
//!
//! record -> view is total: every NULL column is replaced by a default, so
//! a fetch always yields a fully-populated document. view -> record is
//! partial: the caller validates the required set first
//! (`validate::missing_required_fields`), then every mapped column gets a
//! value — absent optional input becomes NULL, never an omitted column.
//!
//! Parent names are asymmetric by design of the stored format: the write
//! side composes `"{firstName} {lastName}"` into one display string, while
//! the read side splits at the first space treating the head token as the
//! last name. Both directions are kept exactly as the stored data expects.

use serde_json::{json, Value};

use crate::api::view::{
    empty_array, Birth, BirthOrder, ChildResidence, Contact, EducationHistory, EmergencyContact,
    Guardian, OtherRelatives, Parent, PhysicalInfo, Sacraments, StudentName, StudentView,
};
use crate::database::models::StudentRecord;

fn sacrament_default() -> Value {
    json!({ "received": false, "date": "", "church": "" })
}

fn school_default() -> Value {
    json!({ "school": "", "awards": "", "year": "" })
}

fn sibling_count_default() -> Value {
    json!({
        "total": "", "brothers": "", "sisters": "",
        "stepBrothers": "", "stepSisters": "", "adopted": ""
    })
}

/// NULL scalar -> ""
fn or_empty(column: &Option<String>) -> Option<String> {
    Some(column.clone().unwrap_or_default())
}

/// NULL opaque column -> group-specific default; stored documents pass
/// through unaltered
fn opaque_or(column: &Option<Value>, default: fn() -> Value) -> Value {
    match column {
        None | Some(Value::Null) => default(),
        Some(v) => v.clone(),
    }
}

/// Empty-string input is treated as absent (stored NULL); used for the
/// parent subfields only
fn none_if_empty(field: &Option<String>) -> Option<String> {
    field.as_deref().filter(|s| !s.is_empty()).map(str::to_string)
}

/// Split a stored combined parent name: head token -> lastName, remainder
/// -> firstName
fn split_parent_name(column: &Option<String>) -> (String, String) {
    let name = column.as_deref().unwrap_or("");
    match name.split_once(' ') {
        Some((head, tail)) => (head.to_string(), tail.to_string()),
        None => (name.to_string(), String::new()),
    }
}

/// Compose the combined display string written to `father_name`/`mother_name`
fn combine_parent_name(parent: &Parent) -> String {
    format!(
        "{} {}",
        parent.first_name.as_deref().unwrap_or(""),
        parent.last_name.as_deref().unwrap_or("")
    )
    .trim()
    .to_string()
}

fn parent_from_record(
    name: &Option<String>,
    occupation: &Option<String>,
    location: &Option<String>,
    employment_type: &Option<String>,
    status: &Option<String>,
    education: &Option<String>,
    specialization: &Option<String>,
) -> Parent {
    let (last_name, first_name) = split_parent_name(name);
    Parent {
        last_name: Some(last_name),
        first_name: Some(first_name),
        middle_name: Some(String::new()),
        occupation: or_empty(occupation),
        location: or_empty(location),
        employment_type: or_empty(employment_type),
        status: or_empty(status),
        education: or_empty(education),
        specialization: or_empty(specialization),
    }
}

/// Map one stored row to the nested client document
pub fn record_to_view(record: &StudentRecord) -> StudentView {
    StudentView {
        id: Some(record.id.clone()),
        // the identity/enrollment trio carries no default; a NULL column
        // stays null on the wire
        school_year: record.school_year.clone(),
        grade_year_level: record.grade_year_level.clone(),
        student_type: record.student_type.clone(),
        student: StudentName {
            last_name: or_empty(&record.last_name),
            first_name: or_empty(&record.first_name),
            middle_name: or_empty(&record.middle_name),
            suffix: or_empty(&record.suffix),
            gender: or_empty(&record.gender),
            citizenship: or_empty(&record.citizenship),
        },
        contact: Contact {
            contact_number: or_empty(&record.contact_number),
            address: or_empty(&record.address),
        },
        birth: Birth {
            month: or_empty(&record.birth_month),
            day: or_empty(&record.birth_day),
            year: or_empty(&record.birth_year),
            place: or_empty(&record.birth_place),
        },
        religion: or_empty(&record.religion),
        sacraments: Sacraments {
            baptism: opaque_or(&record.baptism, sacrament_default),
            first_communion: opaque_or(&record.first_communion, sacrament_default),
            confirmation: opaque_or(&record.confirmation, sacrament_default),
        },
        emergency_contact: EmergencyContact {
            name: or_empty(&record.emergency_contact),
            relation: or_empty(&record.emergency_relation),
            number: or_empty(&record.emergency_number),
        },
        father: parent_from_record(
            &record.father_name,
            &record.father_occupation,
            &record.father_location,
            &record.father_employment_type,
            &record.father_status,
            &record.father_education,
            &record.father_specialization,
        ),
        mother: parent_from_record(
            &record.mother_name,
            &record.mother_occupation,
            &record.mother_location,
            &record.mother_employment_type,
            &record.mother_status,
            &record.mother_education,
            &record.mother_specialization,
        ),
        parents_marital_status: or_empty(&record.parents_marital_status),
        child_residence: ChildResidence {
            residence: or_empty(&record.child_residence),
            other: or_empty(&record.child_residence_other),
        },
        birth_order: BirthOrder {
            order: or_empty(&record.birth_order),
            other: or_empty(&record.other_birth_order),
        },
        number_of_siblings: opaque_or(&record.number_of_siblings, sibling_count_default),
        other_relatives: OtherRelatives {
            relatives: match record.other_relatives.as_ref().and_then(|v| v.get("relatives")) {
                None | Some(Value::Null) => empty_array(),
                Some(v) => v.clone(),
            },
            // read from the scalar column, not the stored document
            other_specify: or_empty(&record.other_relative_specify),
        },
        family_monthly_income: or_empty(&record.family_monthly_income),
        residence_type: or_empty(&record.residence_type),
        languages_spoken_at_home: or_empty(&record.languages_spoken_at_home),
        financial_support: opaque_or(&record.financial_support, empty_array),
        other_financial_support: or_empty(&record.other_financial_support),
        leisure_activities: opaque_or(&record.leisure_activities, empty_array),
        other_leisure_activity: or_empty(&record.other_leisure_activity),
        special_talents: or_empty(&record.special_talents),
        guardian: Guardian {
            name: or_empty(&record.guardian_name),
            relationship: or_empty(&record.guardian_relationship),
            other_relationship: or_empty(&record.other_guardian_relationship),
            address: or_empty(&record.guardian_address),
        },
        siblings: opaque_or(&record.siblings, empty_array),
        education: EducationHistory {
            preschool: opaque_or(&record.preschool, school_default),
            elementary: opaque_or(&record.elementary, school_default),
            high_school: opaque_or(&record.high_school, school_default),
        },
        organizations: opaque_or(&record.organizations, empty_array),
        physical_info: PhysicalInfo {
            height: or_empty(&record.height),
            weight: or_empty(&record.weight),
            condition: or_empty(&record.physical_condition),
            health_problem: or_empty(&record.health_problem),
            health_problem_details: or_empty(&record.health_problem_details),
            // no backing column
            allergies: Some(String::new()),
        },
        test_results: opaque_or(&record.test_results, empty_array),
        signature_name: or_empty(&record.signature_name),
        signature_date: or_empty(&record.signature_date),
        parent_signature_name: or_empty(&record.parent_signature_name),
        parent_signature_date: or_empty(&record.parent_signature_date),
        student_photo_url: or_empty(&record.student_photo_url),
    }
}

/// Map a validated client document to the flat row written under `id`
pub fn view_to_record(id: String, view: &StudentView) -> StudentRecord {
    let relative_count = view
        .other_relatives
        .relatives
        .as_array()
        .map_or(0, |relatives| relatives.len());

    StudentRecord {
        id,
        school_year: view.school_year.clone(),
        grade_year_level: view.grade_year_level.clone(),
        student_type: view.student_type.clone(),
        last_name: view.student.last_name.clone(),
        first_name: view.student.first_name.clone(),
        middle_name: view.student.middle_name.clone(),
        suffix: view.student.suffix.clone(),
        gender: view.student.gender.clone(),
        citizenship: view.student.citizenship.clone(),
        contact_number: view.contact.contact_number.clone(),
        address: view.contact.address.clone(),
        birth_month: view.birth.month.clone(),
        birth_day: view.birth.day.clone(),
        birth_year: view.birth.year.clone(),
        birth_place: view.birth.place.clone(),
        religion: view.religion.clone(),
        baptism: Some(view.sacraments.baptism.clone()),
        first_communion: Some(view.sacraments.first_communion.clone()),
        confirmation: Some(view.sacraments.confirmation.clone()),
        emergency_contact: view.emergency_contact.name.clone(),
        emergency_relation: view.emergency_contact.relation.clone(),
        emergency_number: view.emergency_contact.number.clone(),
        father_name: Some(combine_parent_name(&view.father)),
        father_occupation: none_if_empty(&view.father.occupation),
        father_location: none_if_empty(&view.father.location),
        father_employment_type: none_if_empty(&view.father.employment_type),
        father_status: none_if_empty(&view.father.status),
        father_education: none_if_empty(&view.father.education),
        father_specialization: none_if_empty(&view.father.specialization),
        mother_name: Some(combine_parent_name(&view.mother)),
        mother_occupation: none_if_empty(&view.mother.occupation),
        mother_location: none_if_empty(&view.mother.location),
        mother_employment_type: none_if_empty(&view.mother.employment_type),
        mother_status: none_if_empty(&view.mother.status),
        mother_education: none_if_empty(&view.mother.education),
        mother_specialization: none_if_empty(&view.mother.specialization),
        parents_marital_status: view.parents_marital_status.clone(),
        child_residence: view.child_residence.residence.clone(),
        child_residence_other: view.child_residence.other.clone(),
        birth_order: view.birth_order.order.clone(),
        other_birth_order: view.birth_order.other.clone(),
        number_of_siblings: Some(view.number_of_siblings.clone()),
        other_relatives: Some(json!({
            "relatives": view.other_relatives.relatives,
            "otherSpecify": view.other_relatives.other_specify,
        })),
        total_relatives_at_home: if relative_count == 0 {
            None
        } else {
            Some(relative_count as i32)
        },
        other_relative_specify: view.other_relatives.other_specify.clone(),
        family_monthly_income: view.family_monthly_income.clone(),
        residence_type: view.residence_type.clone(),
        languages_spoken_at_home: view.languages_spoken_at_home.clone(),
        financial_support: Some(view.financial_support.clone()),
        other_financial_support: view.other_financial_support.clone(),
        leisure_activities: Some(view.leisure_activities.clone()),
        other_leisure_activity: view.other_leisure_activity.clone(),
        special_talents: view.special_talents.clone(),
        guardian_name: view.guardian.name.clone(),
        guardian_relationship: view.guardian.relationship.clone(),
        other_guardian_relationship: view.guardian.other_relationship.clone(),
        guardian_address: view.guardian.address.clone(),
        siblings: Some(view.siblings.clone()),
        preschool: Some(view.education.preschool.clone()),
        elementary: Some(view.education.elementary.clone()),
        high_school: Some(view.education.high_school.clone()),
        organizations: Some(view.organizations.clone()),
        height: view.physical_info.height.clone(),
        weight: view.physical_info.weight.clone(),
        physical_condition: view.physical_info.condition.clone(),
        health_problem: view.physical_info.health_problem.clone(),
        health_problem_details: view.physical_info.health_problem_details.clone(),
        // no wire counterpart; always written as NULL
        last_doctor_visit: None,
        last_doctor_visit_reason: None,
        general_condition: None,
        test_results: Some(view.test_results.clone()),
        signature_name: view.signature_name.clone(),
        signature_date: view.signature_date.clone(),
        parent_signature_name: view.parent_signature_name.clone(),
        parent_signature_date: view.parent_signature_date.clone(),
        student_photo_url: view.student_photo_url.clone(),
        created_at: None,
        updated_at: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_record(id: &str) -> StudentRecord {
        StudentRecord {
            id: id.to_string(),
            ..StudentRecord::default()
        }
    }

    fn enrollment_body() -> serde_json::Value {
        json!({
            "schoolYear": "2024-2025",
            "gradeYearLevel": "Grade 7",
            "studentType": "New",
            "student": { "lastName": "Cruz", "firstName": "Juan" },
            "contact": { "address": "123 Main St" },
            "birth": { "month": "June", "day": "1", "year": "2012", "place": "Manila" },
            "religion": "Catholic",
            "signatureName": "Juan Cruz",
            "signatureDate": "2024-06-01"
        })
    }

    #[test]
    fn test_empty_record_maps_to_fully_defaulted_view() {
        let view = record_to_view(&bare_record("u-1"));

        assert_eq!(view.id.as_deref(), Some("u-1"));
        // no defaults for the enrollment trio
        assert!(view.school_year.is_none());
        // every other scalar becomes ""
        assert_eq!(view.student.last_name.as_deref(), Some(""));
        assert_eq!(view.guardian.name.as_deref(), Some(""));
        assert_eq!(view.physical_info.allergies.as_deref(), Some(""));
        // opaque groups get their read-side defaults
        assert_eq!(
            view.sacraments.baptism,
            json!({ "received": false, "date": "", "church": "" })
        );
        assert_eq!(
            view.education.preschool,
            json!({ "school": "", "awards": "", "year": "" })
        );
        assert_eq!(view.number_of_siblings["stepBrothers"], json!(""));
        assert_eq!(view.siblings, json!([]));
        assert_eq!(view.other_relatives.relatives, json!([]));
    }

    #[test]
    fn test_stored_documents_pass_through_without_normalization() {
        let mut record = bare_record("u-1");
        record.baptism = Some(json!({}));
        record.siblings = Some(json!([{ "name": "Ana" }]));

        let view = record_to_view(&record);
        // a stored empty object is not re-defaulted
        assert_eq!(view.sacraments.baptism, json!({}));
        assert_eq!(view.siblings, json!([{ "name": "Ana" }]));
    }

    #[test]
    fn test_parent_name_read_split_treats_head_as_last_name() {
        let mut record = bare_record("u-1");
        record.father_name = Some("Juan Cruz Santos".to_string());
        record.mother_name = Some("Cruz".to_string());

        let view = record_to_view(&record);
        assert_eq!(view.father.last_name.as_deref(), Some("Juan"));
        assert_eq!(view.father.first_name.as_deref(), Some("Cruz Santos"));
        assert_eq!(view.father.middle_name.as_deref(), Some(""));
        assert_eq!(view.mother.last_name.as_deref(), Some("Cruz"));
        assert_eq!(view.mother.first_name.as_deref(), Some(""));
    }

    #[test]
    fn test_parent_name_write_composes_first_then_last() {
        let view: StudentView = serde_json::from_value(json!({
            "father": { "firstName": "Pedro", "lastName": "Reyes", "occupation": "" },
            "mother": { "lastName": "Reyes" }
        }))
        .unwrap();

        let record = view_to_record("u-1".to_string(), &view);
        assert_eq!(record.father_name.as_deref(), Some("Pedro Reyes"));
        // lone last name survives the trim
        assert_eq!(record.mother_name.as_deref(), Some("Reyes"));
        // empty-string parent subfields are stored as NULL
        assert!(record.father_occupation.is_none());
    }

    #[test]
    fn test_relative_count_of_zero_is_stored_null() {
        let empty: StudentView = serde_json::from_value(json!({})).unwrap();
        assert!(view_to_record("u".into(), &empty).total_relatives_at_home.is_none());

        let two: StudentView = serde_json::from_value(json!({
            "otherRelatives": { "relatives": ["Grandmother", "Uncle"], "otherSpecify": "Cousin" }
        }))
        .unwrap();
        let record = view_to_record("u".into(), &two);
        assert_eq!(record.total_relatives_at_home, Some(2));
        assert_eq!(record.other_relative_specify.as_deref(), Some("Cousin"));
        assert_eq!(
            record.other_relatives,
            Some(json!({ "relatives": ["Grandmother", "Uncle"], "otherSpecify": "Cousin" }))
        );
    }

    #[test]
    fn test_create_scenario_round_trips_the_required_subset() {
        let view: StudentView = serde_json::from_value(enrollment_body()).unwrap();
        let record = view_to_record("user-42".to_string(), &view);

        assert_eq!(record.last_name.as_deref(), Some("Cruz"));
        assert_eq!(record.birth_month.as_deref(), Some("June"));
        // absent optional scalars are NULL, absent groups are written as
        // their empty write defaults
        assert!(record.middle_name.is_none());
        assert_eq!(record.baptism, Some(json!({})));
        assert_eq!(record.organizations, Some(json!([])));

        let round_tripped = record_to_view(&record);
        assert_eq!(round_tripped.id.as_deref(), Some("user-42"));
        assert_eq!(round_tripped.school_year.as_deref(), Some("2024-2025"));
        assert_eq!(round_tripped.grade_year_level.as_deref(), Some("Grade 7"));
        assert_eq!(round_tripped.student_type.as_deref(), Some("New"));
        assert_eq!(round_tripped.student.last_name.as_deref(), Some("Cruz"));
        assert_eq!(round_tripped.student.first_name.as_deref(), Some("Juan"));
        assert_eq!(round_tripped.contact.address.as_deref(), Some("123 Main St"));
        assert_eq!(round_tripped.birth.month.as_deref(), Some("June"));
        assert_eq!(round_tripped.birth.place.as_deref(), Some("Manila"));
        assert_eq!(round_tripped.religion.as_deref(), Some("Catholic"));
        assert_eq!(round_tripped.signature_name.as_deref(), Some("Juan Cruz"));
        assert_eq!(round_tripped.signature_date.as_deref(), Some("2024-06-01"));
        // unspecified groups come back as empty-string defaults
        assert_eq!(round_tripped.guardian.name.as_deref(), Some(""));
    }
}
