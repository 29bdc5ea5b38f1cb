//! Rule tables and the uniform constraint evaluator.

use validator::ValidateEmail;

use super::error::ValidationErrors;

/// A declarative constraint on one field's value.
#[derive(Debug, Clone, Copy)]
pub enum Constraint {
    /// Character-count bounds for string fields
    Length { min: Option<usize>, max: Option<usize> },
    /// Inclusive numeric bounds for integer fields
    Range { min: Option<i64>, max: Option<i64> },
    /// RFC-style email format
    Email,
    /// Membership in a fixed set of accepted values
    OneOf(&'static [&'static str]),
    /// The field must be present even though its type is optional-shaped.
    ///
    /// Some endpoints declare a parameter optional but reject requests
    /// that omit it; this rule states that contract explicitly instead of
    /// changing the field type.
    Required,
}

/// One row of a type's validation table.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: &'static str,
    pub constraint: Constraint,
}

impl FieldRule {
    pub const fn new(field: &'static str, constraint: Constraint) -> Self {
        Self { field, constraint }
    }
}

/// A field's raw value as seen by the evaluator.
///
/// `Absent` covers optional fields left unset; all constraints except
/// `Required` skip absent values.
#[derive(Debug, Clone, Copy)]
pub enum FieldValue<'a> {
    Str(&'a str),
    Int(i64),
    Bool(bool),
    Absent,
}

/// Types that carry a validation rule table.
pub trait ValidateFields {
    /// The complete rule table for this type.
    fn rules() -> &'static [FieldRule];

    /// Look up the current value of a named field.
    ///
    /// Must cover every field named in `rules()`.
    fn field(&self, name: &str) -> FieldValue<'_>;

    /// Evaluate every rule against this value.
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        for rule in Self::rules() {
            apply(rule, self.field(rule.field), &mut errors);
        }
        errors.into_result()
    }
}

/// Apply a single rule, recording any violation.
fn apply(rule: &FieldRule, value: FieldValue<'_>, errors: &mut ValidationErrors) {
    let field = rule.field;

    match (rule.constraint, value) {
        (Constraint::Required, FieldValue::Absent) => {
            errors.push(field, "required", format!("{} is required", field));
        }
        (Constraint::Required, _) => {}
        // Optional field left unset: nothing to check
        (_, FieldValue::Absent) => {}

        (Constraint::Length { min, max }, FieldValue::Str(s)) => {
            let len = s.chars().count();
            if let Some(min) = min {
                if len < min {
                    errors.push(
                        field,
                        "length",
                        format!("{} must be at least {} characters", field, min),
                    );
                    return;
                }
            }
            if let Some(max) = max {
                if len > max {
                    errors.push(
                        field,
                        "length",
                        format!("{} must be at most {} characters", field, max),
                    );
                }
            }
        }

        (Constraint::Range { min, max }, FieldValue::Int(n)) => {
            if let Some(min) = min {
                if n < min {
                    errors.push(field, "range", format!("{} must be at least {}", field, min));
                    return;
                }
            }
            if let Some(max) = max {
                if n > max {
                    errors.push(field, "range", format!("{} must be at most {}", field, max));
                }
            }
        }

        (Constraint::Email, FieldValue::Str(s)) => {
            if !s.validate_email() {
                errors.push(field, "email", format!("{} is not a valid email address", field));
            }
        }

        (Constraint::OneOf(accepted), FieldValue::Str(s)) => {
            if !accepted.contains(&s) {
                errors.push(
                    field,
                    "one_of",
                    format!("{} must be one of: {}", field, accepted.join(", ")),
                );
            }
        }

        // A rule pointed at a value of the wrong shape is a table bug;
        // surface it as a failure rather than silently passing.
        (_, _) => {
            errors.push(field, "invalid_type", format!("{} has an unexpected type", field));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Probe {
        name: Option<String>,
        age: Option<i64>,
    }

    impl ValidateFields for Probe {
        fn rules() -> &'static [FieldRule] {
            const RULES: &[FieldRule] = &[
                FieldRule::new(
                    "name",
                    Constraint::Length { min: Some(1), max: Some(5) },
                ),
                FieldRule::new("age", Constraint::Required),
                FieldRule::new("age", Constraint::Range { min: Some(18), max: None }),
            ];
            RULES
        }

        fn field(&self, name: &str) -> FieldValue<'_> {
            match name {
                "name" => self
                    .name
                    .as_deref()
                    .map(FieldValue::Str)
                    .unwrap_or(FieldValue::Absent),
                "age" => self.age.map(FieldValue::Int).unwrap_or(FieldValue::Absent),
                _ => FieldValue::Absent,
            }
        }
    }

    #[test]
    fn test_valid_probe_passes() {
        let probe = Probe {
            name: Some("Ana".to_string()),
            age: Some(30),
        };
        assert!(probe.validate().is_ok());
    }

    #[test]
    fn test_absent_optional_field_is_skipped() {
        let probe = Probe {
            name: None,
            age: Some(30),
        };
        assert!(probe.validate().is_ok());
    }

    #[test]
    fn test_required_rule_fires_on_absent_field() {
        let probe = Probe {
            name: None,
            age: None,
        };
        let errors = probe.validate().unwrap_err();
        assert_eq!(errors.errors().len(), 1);
        assert_eq!(errors.errors()[0].field, "age");
        assert_eq!(errors.errors()[0].code, "required");
    }

    #[test]
    fn test_length_bounds() {
        let probe = Probe {
            name: Some("too long for five".to_string()),
            age: Some(30),
        };
        let errors = probe.validate().unwrap_err();
        assert_eq!(errors.errors()[0].code, "length");
    }

    #[test]
    fn test_range_minimum() {
        let probe = Probe {
            name: None,
            age: Some(17),
        };
        let errors = probe.validate().unwrap_err();
        assert_eq!(errors.errors()[0].field, "age");
        assert_eq!(errors.errors()[0].code, "range");
    }

    #[test]
    fn test_multiple_violations_are_all_reported() {
        let probe = Probe {
            name: Some(String::new()),
            age: None,
        };
        let errors = probe.validate().unwrap_err();
        assert_eq!(errors.errors().len(), 2);
    }

    #[test]
    fn test_email_constraint() {
        let mut errors = ValidationErrors::new();
        apply(
            &FieldRule::new("email", Constraint::Email),
            FieldValue::Str("not-an-email"),
            &mut errors,
        );
        assert_eq!(errors.errors()[0].code, "email");

        let mut ok = ValidationErrors::new();
        apply(
            &FieldRule::new("email", Constraint::Email),
            FieldValue::Str("ana@example.com"),
            &mut ok,
        );
        assert!(ok.is_empty());
    }

    #[test]
    fn test_one_of_constraint() {
        let rule = FieldRule::new("hair_color", Constraint::OneOf(&["black", "red"]));

        let mut errors = ValidationErrors::new();
        apply(&rule, FieldValue::Str("green"), &mut errors);
        assert_eq!(errors.errors()[0].code, "one_of");

        let mut ok = ValidationErrors::new();
        apply(&rule, FieldValue::Str("red"), &mut ok);
        assert!(ok.is_empty());
    }

    #[test]
    fn test_mismatched_value_shape_is_reported() {
        let mut errors = ValidationErrors::new();
        apply(
            &FieldRule::new("age", Constraint::Range { min: Some(0), max: None }),
            FieldValue::Str("thirty"),
            &mut errors,
        );
        assert_eq!(errors.errors()[0].code, "invalid_type");
    }
}
