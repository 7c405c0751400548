//! Central required-field policy for create and replace.
//!
//! "Required" means the value must be a non-empty string. An empty string
//! is indistinguishable from an absent field; that is the accepted
//! contract, not something to tighten here.

use crate::api::view::StudentView;

/// Names of every required field that is missing from the request, in the
/// order they are declared. The leading entry is the key parameter:
/// `userId` on create, `studentId` on replace.
pub fn missing_required_fields(
    key_field: &'static str,
    key_value: Option<&str>,
    view: &StudentView,
) -> Vec<&'static str> {
    let mut missing = Vec::new();
    {
        let mut check = |name: &'static str, value: Option<&str>| {
            if !value.is_some_and(|s| !s.is_empty()) {
                missing.push(name);
            }
        };

        check(key_field, key_value);
        check("schoolYear", view.school_year.as_deref());
        check("gradeYearLevel", view.grade_year_level.as_deref());
        check("studentType", view.student_type.as_deref());
        check("lastName", view.student.last_name.as_deref());
        check("firstName", view.student.first_name.as_deref());
        check("address", view.contact.address.as_deref());
        check("month", view.birth.month.as_deref());
        check("day", view.birth.day.as_deref());
        check("year", view.birth.year.as_deref());
        check("place", view.birth.place.as_deref());
        check("religion", view.religion.as_deref());
        check("signatureName", view.signature_name.as_deref());
        check("signatureDate", view.signature_date.as_deref());
    }
    missing
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_body() -> serde_json::Value {
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
    fn test_complete_body_has_no_missing_fields() {
        let view: StudentView = serde_json::from_value(valid_body()).unwrap();
        let missing = missing_required_fields("userId", Some("user-42"), &view);
        assert!(missing.is_empty(), "unexpected missing fields: {:?}", missing);
    }

    #[test]
    fn test_omitted_address_is_reported_by_name() {
        let mut body = valid_body();
        body["contact"] = json!({ "contactNumber": "0917" });

        let view: StudentView = serde_json::from_value(body).unwrap();
        let missing = missing_required_fields("userId", Some("user-42"), &view);
        assert_eq!(missing, vec!["address"]);
    }

    #[test]
    fn test_every_missing_field_is_enumerated_in_declaration_order() {
        let view: StudentView = serde_json::from_value(json!({
            "schoolYear": "2024-2025",
            "studentType": "New",
            "student": { "lastName": "Cruz" },
            "birth": { "month": "June", "day": "1", "year": "2012", "place": "Manila" },
            "religion": "Catholic"
        }))
        .unwrap();

        let missing = missing_required_fields("userId", None, &view);
        assert_eq!(
            missing,
            vec!["userId", "gradeYearLevel", "firstName", "address", "signatureName", "signatureDate"]
        );
    }

    #[test]
    fn test_empty_string_counts_as_missing() {
        let mut body = valid_body();
        body["signatureName"] = json!("");

        let view: StudentView = serde_json::from_value(body).unwrap();
        let missing = missing_required_fields("studentId", Some("s-1"), &view);
        assert_eq!(missing, vec!["signatureName"]);
    }

    #[test]
    fn test_key_field_name_follows_the_operation() {
        let view: StudentView = serde_json::from_value(valid_body()).unwrap();
        assert_eq!(missing_required_fields("userId", None, &view), vec!["userId"]);
        assert_eq!(missing_required_fields("studentId", Some(""), &view), vec!["studentId"]);
    }
}
