//! Parameterized queries for the `basic_ed_students` table.
//!
//! The write statements enumerate every mapped column; both run inside a
//! caller-owned transaction so an early return or error drops the
//! transaction and rolls back.

use sqlx::postgres::PgArguments;
use sqlx::{PgPool, Postgres, Row, Transaction};

use super::models::{StudentListRow, StudentRecord};

const INSERT_SQL: &str = "INSERT INTO basic_ed_students (
    id, school_year, grade_year_level, student_type, last_name, first_name, middle_name, suffix, gender,
    citizenship, contact_number, address, birth_month, birth_day, birth_year, birth_place, religion,
    baptism, first_communion, confirmation, emergency_contact, emergency_relation, emergency_number,
    father_name, father_occupation, father_location, father_employment_type, father_status, father_education,
    father_specialization, mother_name, mother_occupation, mother_location, mother_employment_type,
    mother_status, mother_education, mother_specialization, parents_marital_status, child_residence,
    child_residence_other, birth_order, other_birth_order, number_of_siblings, other_relatives,
    total_relatives_at_home, other_relative_specify, family_monthly_income, residence_type,
    languages_spoken_at_home, financial_support, other_financial_support, leisure_activities,
    other_leisure_activity, special_talents, guardian_name, guardian_relationship, other_guardian_relationship,
    guardian_address, siblings, preschool, elementary, high_school, organizations, height, weight,
    physical_condition, health_problem, health_problem_details, last_doctor_visit, last_doctor_visit_reason,
    general_condition, test_results, signature_name, signature_date, parent_signature_name, parent_signature_date,
    student_photo_url
) VALUES (
    $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18, $19, $20,
    $21, $22, $23, $24, $25, $26, $27, $28, $29, $30, $31, $32, $33, $34, $35, $36, $37, $38, $39,
    $40, $41, $42, $43, $44, $45, $46, $47, $48, $49, $50, $51, $52, $53, $54, $55, $56, $57, $58,
    $59, $60, $61, $62, $63, $64, $65, $66, $67, $68, $69, $70, $71, $72, $73, $74, $75, $76, $77
)
RETURNING id";

const UPDATE_SQL: &str = "UPDATE basic_ed_students SET
    school_year = $2, grade_year_level = $3, student_type = $4, last_name = $5, first_name = $6, middle_name = $7,
    suffix = $8, gender = $9, citizenship = $10, contact_number = $11, address = $12, birth_month = $13,
    birth_day = $14, birth_year = $15, birth_place = $16, religion = $17, baptism = $18, first_communion = $19,
    confirmation = $20, emergency_contact = $21, emergency_relation = $22, emergency_number = $23,
    father_name = $24, father_occupation = $25, father_location = $26, father_employment_type = $27,
    father_status = $28, father_education = $29, father_specialization = $30, mother_name = $31,
    mother_occupation = $32, mother_location = $33, mother_employment_type = $34, mother_status = $35,
    mother_education = $36, mother_specialization = $37, parents_marital_status = $38, child_residence = $39,
    child_residence_other = $40, birth_order = $41, other_birth_order = $42, number_of_siblings = $43,
    other_relatives = $44, total_relatives_at_home = $45, other_relative_specify = $46, family_monthly_income = $47,
    residence_type = $48, languages_spoken_at_home = $49, financial_support = $50, other_financial_support = $51,
    leisure_activities = $52, other_leisure_activity = $53, special_talents = $54, guardian_name = $55,
    guardian_relationship = $56, other_guardian_relationship = $57, guardian_address = $58, siblings = $59,
    preschool = $60, elementary = $61, high_school = $62, organizations = $63, height = $64, weight = $65,
    physical_condition = $66, health_problem = $67, health_problem_details = $68, last_doctor_visit = $69,
    last_doctor_visit_reason = $70, general_condition = $71, test_results = $72, signature_name = $73,
    signature_date = $74, parent_signature_name = $75, parent_signature_date = $76, student_photo_url = $77,
    updated_at = CURRENT_TIMESTAMP
WHERE id = $1
RETURNING id";

const LIST_SQL: &str = "SELECT id, school_year, grade_year_level, student_type, last_name, first_name, \
     middle_name, gender, citizenship, created_at \
     FROM basic_ed_students WHERE id = $1 ORDER BY created_at DESC";

type RecordQuery<'q> = sqlx::query::Query<'q, Postgres, PgArguments>;

/// Fetch one full row by id
pub async fn fetch_by_id(pool: &PgPool, student_id: &str) -> Result<Option<StudentRecord>, sqlx::Error> {
    sqlx::query_as::<_, StudentRecord>("SELECT * FROM basic_ed_students WHERE id = $1")
        .bind(student_id)
        .fetch_optional(pool)
        .await
}

/// Fetch the list projection for a user.
///
/// The filter matches the row's primary id against the caller's user id;
/// the create path writes the user id as the row id, so the two coincide.
/// TODO: filter on a dedicated owning-user column once the table grows one.
pub async fn list_for_user(pool: &PgPool, user_id: Option<&str>) -> Result<Vec<StudentListRow>, sqlx::Error> {
    sqlx::query_as::<_, StudentListRow>(LIST_SQL)
        .bind(user_id)
        .fetch_all(pool)
        .await
}

/// Insert one row; returns the stored id
pub async fn insert(tx: &mut Transaction<'_, Postgres>, record: &StudentRecord) -> Result<String, sqlx::Error> {
    let row = bind_record(sqlx::query(INSERT_SQL), record)
        .fetch_one(&mut **tx)
        .await?;
    row.try_get("id")
}

/// Rewrite every mapped column of an existing row; `None` when no row
/// matched the id.
pub async fn update(tx: &mut Transaction<'_, Postgres>, record: &StudentRecord) -> Result<Option<String>, sqlx::Error> {
    let row = bind_record(sqlx::query(UPDATE_SQL), record)
        .fetch_optional(&mut **tx)
        .await?;
    match row {
        Some(row) => Ok(Some(row.try_get("id")?)),
        None => Ok(None),
    }
}

/// Bind all 77 mapped values in column order. The insert and update
/// statements are written against the same parameter order so they share
/// this binding.
fn bind_record<'q>(query: RecordQuery<'q>, r: &'q StudentRecord) -> RecordQuery<'q> {
    query
        .bind(&r.id)
        .bind(&r.school_year)
        .bind(&r.grade_year_level)
        .bind(&r.student_type)
        .bind(&r.last_name)
        .bind(&r.first_name)
        .bind(&r.middle_name)
        .bind(&r.suffix)
        .bind(&r.gender)
        .bind(&r.citizenship)
        .bind(&r.contact_number)
        .bind(&r.address)
        .bind(&r.birth_month)
        .bind(&r.birth_day)
        .bind(&r.birth_year)
        .bind(&r.birth_place)
        .bind(&r.religion)
        .bind(&r.baptism)
        .bind(&r.first_communion)
        .bind(&r.confirmation)
        .bind(&r.emergency_contact)
        .bind(&r.emergency_relation)
        .bind(&r.emergency_number)
        .bind(&r.father_name)
        .bind(&r.father_occupation)
        .bind(&r.father_location)
        .bind(&r.father_employment_type)
        .bind(&r.father_status)
        .bind(&r.father_education)
        .bind(&r.father_specialization)
        .bind(&r.mother_name)
        .bind(&r.mother_occupation)
        .bind(&r.mother_location)
        .bind(&r.mother_employment_type)
        .bind(&r.mother_status)
        .bind(&r.mother_education)
        .bind(&r.mother_specialization)
        .bind(&r.parents_marital_status)
        .bind(&r.child_residence)
        .bind(&r.child_residence_other)
        .bind(&r.birth_order)
        .bind(&r.other_birth_order)
        .bind(&r.number_of_siblings)
        .bind(&r.other_relatives)
        .bind(r.total_relatives_at_home)
        .bind(&r.other_relative_specify)
        .bind(&r.family_monthly_income)
        .bind(&r.residence_type)
        .bind(&r.languages_spoken_at_home)
        .bind(&r.financial_support)
        .bind(&r.other_financial_support)
        .bind(&r.leisure_activities)
        .bind(&r.other_leisure_activity)
        .bind(&r.special_talents)
        .bind(&r.guardian_name)
        .bind(&r.guardian_relationship)
        .bind(&r.other_guardian_relationship)
        .bind(&r.guardian_address)
        .bind(&r.siblings)
        .bind(&r.preschool)
        .bind(&r.elementary)
        .bind(&r.high_school)
        .bind(&r.organizations)
        .bind(&r.height)
        .bind(&r.weight)
        .bind(&r.physical_condition)
        .bind(&r.health_problem)
        .bind(&r.health_problem_details)
        .bind(&r.last_doctor_visit)
        .bind(&r.last_doctor_visit_reason)
        .bind(&r.general_condition)
        .bind(&r.test_results)
        .bind(&r.signature_name)
        .bind(&r.signature_date)
        .bind(&r.parent_signature_name)
        .bind(&r.parent_signature_date)
        .bind(&r.student_photo_url)
}
