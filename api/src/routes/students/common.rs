use crate::validation::{FieldErrors, pick_string_fields};
use db::models::student::{Gender, NewStudent, StudentChanges};
use once_cell::sync::Lazy;
use serde::Deserialize;
use serde_json::Value;
use std::borrow::Cow;
use validator::{Validate, ValidationError};

/// JSON keys a student body may carry.
pub const STUDENT_FIELDS: [&str; 5] = ["firstName", "lastName", "studentCode", "birthDate", "gender"];

/// Lexical `YYYY-MM-DD`. Calendar validity is not checked, so `2024-02-30` passes.
pub static BIRTH_DATE_PATTERN: Lazy<regex::Regex> = Lazy::new(|| {
    regex::Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("birth date pattern is valid")
});

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentRequest {
    #[validate(
        required(message = "Required"),
        length(min = 1, message = "String must contain at least 1 character(s)")
    )]
    pub first_name: Option<String>,

    #[validate(
        required(message = "Required"),
        length(min = 1, message = "String must contain at least 1 character(s)")
    )]
    pub last_name: Option<String>,

    #[validate(
        required(message = "Required"),
        length(min = 1, message = "String must contain at least 1 character(s)")
    )]
    pub student_code: Option<String>,

    #[validate(
        required(message = "Required"),
        regex(path = *BIRTH_DATE_PATTERN, message = "YYYY-MM-DD")
    )]
    pub birth_date: Option<String>,

    #[validate(required(message = "Required"), custom(function = "validate_gender"))]
    pub gender: Option<String>,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudentRequest {
    #[validate(length(min = 1, message = "String must contain at least 1 character(s)"))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, message = "String must contain at least 1 character(s)"))]
    pub last_name: Option<String>,

    #[validate(length(min = 1, message = "String must contain at least 1 character(s)"))]
    pub student_code: Option<String>,

    #[validate(regex(path = *BIRTH_DATE_PATTERN, message = "YYYY-MM-DD"))]
    pub birth_date: Option<String>,

    #[validate(custom(function = "validate_gender"))]
    pub gender: Option<String>,
}

fn validate_gender(gender: &str) -> Result<(), ValidationError> {
    if gender.parse::<Gender>().is_ok() {
        return Ok(());
    }
    Err(ValidationError::new("invalid_enum_value").with_message(Cow::Owned(format!(
        "Invalid enum value. Expected 'M' | 'F' | 'O', received '{gender}'"
    ))))
}

/// Picks the student fields out of `body`, deserialises them into `T` and runs its
/// rules, collecting every failure before returning.
fn check<T>(body: &Value) -> Result<T, FieldErrors>
where
    T: for<'de> Deserialize<'de> + Validate,
{
    let (fields, mut errors) = pick_string_fields(body, &STUDENT_FIELDS)?;

    // Only string values were picked, so this cannot fail on field types.
    let request: T = serde_json::from_value(Value::Object(fields))
        .map_err(|e| FieldErrors::form(e.to_string()))?;

    if let Err(validation) = request.validate() {
        errors.absorb(&validation);
    }
    errors.into_result()?;

    Ok(request)
}

fn parse_gender(gender: Option<String>) -> Result<Option<Gender>, FieldErrors> {
    gender
        .map(|g| {
            g.parse::<Gender>().map_err(|_| {
                let mut errors = FieldErrors::default();
                errors.add("gender", "Invalid enum value. Expected 'M' | 'F' | 'O'");
                errors
            })
        })
        .transpose()
}

impl CreateStudentRequest {
    /// Strict validation: all five fields required.
    pub fn parse(body: &Value) -> Result<NewStudent, FieldErrors> {
        let request: Self = check(body)?;

        let (Some(first_name), Some(last_name), Some(student_code), Some(birth_date), Some(gender)) = (
            request.first_name,
            request.last_name,
            request.student_code,
            request.birth_date,
            parse_gender(request.gender)?,
        ) else {
            return Err(FieldErrors::form("Required fields missing"));
        };

        Ok(NewStudent {
            first_name,
            last_name,
            student_code,
            birth_date,
            gender,
        })
    }
}

impl UpdateStudentRequest {
    /// Partial validation: absent fields are fine, present ones must pass the create rules.
    pub fn parse(body: &Value) -> Result<StudentChanges, FieldErrors> {
        let request: Self = check(body)?;

        Ok(StudentChanges {
            first_name: request.first_name,
            last_name: request.last_name,
            student_code: request.student_code,
            birth_date: request.birth_date,
            gender: parse_gender(request.gender)?,
        })
    }
}
