//! Location resource model.

use serde::{Deserialize, Serialize};

use crate::config::{LOCATION_MAX_LENGTH, LOCATION_MIN_LENGTH};
use crate::validation::{Constraint, FieldRule, FieldValue, ValidateFields};

/// Where a person lives; every field is a 2-50 character string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub state: String,
    pub country: String,
}

impl ValidateFields for Location {
    fn rules() -> &'static [FieldRule] {
        const BOUNDS: Constraint =
            Constraint::Length { min: Some(LOCATION_MIN_LENGTH), max: Some(LOCATION_MAX_LENGTH) };
        const RULES: &[FieldRule] = &[
            FieldRule::new("city", BOUNDS),
            FieldRule::new("state", BOUNDS),
            FieldRule::new("country", BOUNDS),
        ];
        RULES
    }

    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "city" => FieldValue::Str(&self.city),
            "state" => FieldValue::Str(&self.state),
            "country" => FieldValue::Str(&self.country),
            _ => FieldValue::Absent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_character_field_is_rejected() {
        let location = Location {
            city: "X".to_string(),
            state: "Antioquia".to_string(),
            country: "Colombia".to_string(),
        };
        let errors = location.validate().unwrap_err();
        assert_eq!(errors.errors()[0].field, "city");
    }

    #[test]
    fn test_valid_location_passes() {
        let location = Location {
            city: "Medellin".to_string(),
            state: "Antioquia".to_string(),
            country: "Colombia".to_string(),
        };
        assert!(location.validate().is_ok());
    }
}
