//! Static schema for user create/update payloads.
//!
//! Fields are checked in schema order and only the first failure is
//! reported. Messages follow the wording clients of the service already
//! rely on, e.g. `"secondName" is required`.
//!
//! Numeric fields also accept decimal strings such as `"30"` or `" 1e2 "`;
//! the converted value is range-checked while the string itself is kept.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::domain::UserDraft;

/// Inclusive lower bound for `age`.
pub const AGE_MIN: u8 = 0;
/// Inclusive upper bound for `age`.
pub const AGE_MAX: u8 = 150;

/// Constraint applied to a single payload field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rule {
    /// String with at least one character.
    NonEmptyText,
    /// Number within `[min, max]`.
    Range { min: u8, max: u8 },
}

#[derive(Debug, Clone, Copy)]
struct FieldRule {
    name: &'static str,
    rule: Rule,
    required: bool,
}

const USER_SCHEMA: [FieldRule; 4] = [
    FieldRule {
        name: "firstName",
        rule: Rule::NonEmptyText,
        required: true,
    },
    FieldRule {
        name: "secondName",
        rule: Rule::NonEmptyText,
        required: true,
    },
    FieldRule {
        name: "age",
        rule: Rule::Range {
            min: AGE_MIN,
            max: AGE_MAX,
        },
        required: true,
    },
    FieldRule {
        name: "city",
        rule: Rule::NonEmptyText,
        required: false,
    },
];

/// First schema violation found in a payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserPayloadError {
    /// The body is not a JSON object.
    #[error("\"value\" must be of type object")]
    NotAnObject,
    /// A required field is absent.
    #[error("\"{field}\" is required")]
    Missing {
        /// Offending field.
        field: &'static str,
    },
    /// A text field holds a non-string value.
    #[error("\"{field}\" must be a string")]
    NotAString {
        /// Offending field.
        field: &'static str,
    },
    /// A text field is the empty string.
    #[error("\"{field}\" is not allowed to be empty")]
    EmptyString {
        /// Offending field.
        field: &'static str,
    },
    /// A numeric field holds a non-number value.
    #[error("\"{field}\" must be a number")]
    NotANumber {
        /// Offending field.
        field: &'static str,
    },
    /// A numeric field converts to an infinite value.
    #[error("\"{field}\" cannot be infinity")]
    Infinite {
        /// Offending field.
        field: &'static str,
    },
    /// A numeric field is below its minimum.
    #[error("\"{field}\" must be greater than or equal to {min}")]
    BelowMinimum {
        /// Offending field.
        field: &'static str,
        /// Inclusive minimum.
        min: u8,
    },
    /// A numeric field is above its maximum.
    #[error("\"{field}\" must be less than or equal to {max}")]
    AboveMaximum {
        /// Offending field.
        field: &'static str,
        /// Inclusive maximum.
        max: u8,
    },
}

impl UserPayloadError {
    /// Name of the offending field (`value` for the whole body).
    pub fn field(&self) -> &'static str {
        match self {
            Self::NotAnObject => "value",
            Self::Missing { field }
            | Self::NotAString { field }
            | Self::EmptyString { field }
            | Self::NotANumber { field }
            | Self::Infinite { field }
            | Self::BelowMinimum { field, .. }
            | Self::AboveMaximum { field, .. } => field,
        }
    }

    /// Stable machine code for logs.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotAnObject => "invalid_body",
            Self::Missing { .. } => "missing_field",
            Self::NotAString { .. } | Self::NotANumber { .. } => "invalid_type",
            Self::EmptyString { .. } => "empty_string",
            Self::Infinite { .. } | Self::BelowMinimum { .. } | Self::AboveMaximum { .. } => {
                "out_of_range"
            }
        }
    }
}

/// Validate a raw request body and turn it into a [`UserDraft`].
///
/// Unknown fields are allowed and carried through on the draft; an `id`
/// field is ignored.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use users_service::domain::validation::{validate_user_payload, UserPayloadError};
///
/// let draft = validate_user_payload(&json!({"firstName": "A", "secondName": "B", "age": 30}));
/// assert!(draft.is_ok());
///
/// let err = validate_user_payload(&json!({"firstName": "A"})).unwrap_err();
/// assert_eq!(err, UserPayloadError::Missing { field: "secondName" });
/// ```
///
/// # Errors
/// Returns the first [`UserPayloadError`] in schema order.
pub fn validate_user_payload(body: &Value) -> Result<UserDraft, UserPayloadError> {
    let object = body.as_object().ok_or(UserPayloadError::NotAnObject)?;
    for field in &USER_SCHEMA {
        check_field(object, field)?;
    }

    let first_name = required_text(object, "firstName")?;
    let second_name = required_text(object, "secondName")?;
    let age = object
        .get("age")
        .map(stored_number)
        .ok_or(UserPayloadError::Missing { field: "age" })?;
    let city = object.get("city").and_then(Value::as_str).map(str::to_owned);

    Ok(UserDraft::new(first_name, second_name, age, city).with_extra(object.clone()))
}

fn check_field(object: &Map<String, Value>, field: &FieldRule) -> Result<(), UserPayloadError> {
    let Some(value) = object.get(field.name) else {
        return if field.required {
            Err(UserPayloadError::Missing { field: field.name })
        } else {
            Ok(())
        };
    };

    match field.rule {
        Rule::NonEmptyText => check_text(field.name, value),
        Rule::Range { min, max } => check_range(field.name, value, min, max),
    }
}

fn check_text(field: &'static str, value: &Value) -> Result<(), UserPayloadError> {
    match value.as_str() {
        None => Err(UserPayloadError::NotAString { field }),
        Some("") => Err(UserPayloadError::EmptyString { field }),
        Some(_) => Ok(()),
    }
}

fn check_range(
    field: &'static str,
    value: &Value,
    min: u8,
    max: u8,
) -> Result<(), UserPayloadError> {
    let number = numeric_value(value).ok_or(UserPayloadError::NotANumber { field })?;
    if number.is_infinite() {
        return Err(UserPayloadError::Infinite { field });
    }
    if number < f64::from(min) {
        return Err(UserPayloadError::BelowMinimum { field, min });
    }
    if number > f64::from(max) {
        return Err(UserPayloadError::AboveMaximum { field, max });
    }
    Ok(())
}

/// Numeric reading of a JSON number or decimal string.
fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => {
            let trimmed = text.trim();
            is_decimal_literal(trimmed)
                .then(|| trimmed.parse::<f64>().ok())
                .flatten()
        }
        _ => None,
    }
}

/// `[+-]digits[.digits][e[+-]digits]`, with either side of the point
/// optional but not both.
fn is_decimal_literal(text: &str) -> bool {
    fn all_digits(part: &str) -> bool {
        part.chars().all(|c| c.is_ascii_digit())
    }

    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    let (mantissa, exponent) = match unsigned.split_once(['e', 'E']) {
        Some((mantissa, exponent)) => (mantissa, Some(exponent)),
        None => (unsigned, None),
    };
    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let mantissa_ok =
        all_digits(whole) && all_digits(fraction) && !(whole.is_empty() && fraction.is_empty());
    let exponent_ok = exponent.is_none_or(|exp| {
        let digits = exp.strip_prefix(['+', '-']).unwrap_or(exp);
        !digits.is_empty() && all_digits(digits)
    });
    mantissa_ok && exponent_ok
}

/// Value stored for a validated numeric field.
///
/// Strings are kept verbatim. Integral floats (`30.0`, `1e2`) are stored as
/// integers so they serialise the way clients sent them in spirit.
fn stored_number(value: &Value) -> Value {
    let Value::Number(number) = value else {
        return value.clone();
    };
    match number.as_f64() {
        Some(float) if number.is_f64() && float.fract() == 0.0 => {
            // Range-checked to AGE_MIN..=AGE_MAX, so the cast is exact.
            Value::from(float as u64)
        }
        _ => value.clone(),
    }
}

fn required_text(
    object: &Map<String, Value>,
    field: &'static str,
) -> Result<String, UserPayloadError> {
    object
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or(UserPayloadError::Missing { field })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn valid_body() -> Value {
        json!({ "firstName": "A", "secondName": "B", "age": 30 })
    }

    #[rstest]
    #[case(json!([]), "\"value\" must be of type object")]
    #[case(json!({ "firstName": "A" }), "\"secondName\" is required")]
    #[case(json!({}), "\"firstName\" is required")]
    #[case(json!({ "firstName": "", "secondName": "B", "age": 1 }), "\"firstName\" is not allowed to be empty")]
    #[case(json!({ "firstName": 5, "secondName": "B", "age": 1 }), "\"firstName\" must be a string")]
    #[case(json!({ "firstName": "A", "secondName": "B" }), "\"age\" is required")]
    #[case(json!({ "firstName": "A", "secondName": "B", "age": "thirty" }), "\"age\" must be a number")]
    #[case(json!({ "firstName": "A", "secondName": "B", "age": "" }), "\"age\" must be a number")]
    #[case(json!({ "firstName": "A", "secondName": "B", "age": "200" }), "\"age\" must be less than or equal to 150")]
    #[case(json!({ "firstName": "A", "secondName": "B", "age": "-1" }), "\"age\" must be greater than or equal to 0")]
    #[case(json!({ "firstName": "A", "secondName": "B", "age": "1e400" }), "\"age\" cannot be infinity")]
    #[case(json!({ "firstName": "A", "secondName": "B", "age": true }), "\"age\" must be a number")]
    #[case(json!({ "firstName": "A", "secondName": "B", "age": -1 }), "\"age\" must be greater than or equal to 0")]
    #[case(json!({ "firstName": "A", "secondName": "B", "age": 150.5 }), "\"age\" must be less than or equal to 150")]
    #[case(json!({ "firstName": "A", "secondName": "B", "age": 3, "city": "" }), "\"city\" is not allowed to be empty")]
    #[case(json!({ "firstName": "A", "secondName": "B", "age": 3, "city": null }), "\"city\" must be a string")]
    fn reports_first_violation(#[case] body: Value, #[case] expected: &str) {
        let err = validate_user_payload(&body).expect_err("payload should be rejected");
        assert_eq!(err.to_string(), expected);
    }

    #[rstest]
    fn earlier_fields_win_over_later_ones() {
        let body = json!({ "firstName": "", "secondName": 1, "age": 999 });
        let err = validate_user_payload(&body).expect_err("payload should be rejected");
        assert_eq!(err.field(), "firstName");
        assert_eq!(err.code(), "empty_string");
    }

    #[rstest]
    #[case(0)]
    #[case(150)]
    fn age_bounds_are_inclusive(#[case] age: u8) {
        let body = json!({ "firstName": "A", "secondName": "B", "age": age });
        assert!(validate_user_payload(&body).is_ok());
    }

    #[rstest]
    fn draft_keeps_extras_but_not_id() {
        let mut body = valid_body();
        if let Some(object) = body.as_object_mut() {
            object.insert("id".to_owned(), json!(77));
            object.insert("hobby".to_owned(), json!("chess"));
        }

        let draft = validate_user_payload(&body).expect("valid payload");
        assert_eq!(draft.first_name(), "A");
        assert_eq!(draft.extra().get("hobby"), Some(&json!("chess")));
        assert!(!draft.extra().contains_key("id"));
    }

    #[rstest]
    #[case(UserPayloadError::NotAnObject, "value", "invalid_body")]
    #[case(UserPayloadError::Missing { field: "age" }, "age", "missing_field")]
    #[case(UserPayloadError::AboveMaximum { field: "age", max: AGE_MAX }, "age", "out_of_range")]
    fn errors_expose_field_and_code(
        #[case] error: UserPayloadError,
        #[case] field: &str,
        #[case] code: &str,
    ) {
        assert_eq!(error.field(), field);
        assert_eq!(error.code(), code);
    }

    #[rstest]
    #[case(json!("30"), json!("30"))]
    #[case(json!(" 1e2 "), json!(" 1e2 "))]
    #[case(json!("+.5"), json!("+.5"))]
    #[case(json!(30.0), json!(30))]
    #[case(json!(1e2), json!(100))]
    #[case(json!(30.5), json!(30.5))]
    #[case(json!(42), json!(42))]
    fn accepted_ages_are_stored_as_sent(#[case] age: Value, #[case] stored: Value) {
        let body = json!({ "firstName": "A", "secondName": "B", "age": age });
        let draft = validate_user_payload(&body).expect("valid payload");
        let user = crate::domain::User::from_draft(crate::domain::UserId::new(1), draft);
        assert_eq!(user.age(), &stored);
    }

    #[rstest]
    #[case("30", true)]
    #[case("3.", true)]
    #[case(".5", true)]
    #[case("-2e-3", true)]
    #[case(".", false)]
    #[case("1e", false)]
    #[case("0x10", false)]
    #[case("inf", false)]
    #[case("1 2", false)]
    fn decimal_literal_grammar(#[case] text: &str, #[case] expected: bool) {
        assert_eq!(is_decimal_literal(text), expected);
    }
}
