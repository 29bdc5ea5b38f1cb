//! Field-attributed validation errors.

use serde::Serialize;

/// A single constraint violation, attributed to the offending field.
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    /// Field path, e.g. `age` or `person.first_name` for nested objects
    pub field: String,
    /// Machine-readable violation code
    pub code: &'static str,
    /// Human-readable explanation
    pub message: String,
}

/// Collection of validation failures for one request.
///
/// Serializes as a plain list so error responses can enumerate every
/// offending field.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Build a one-error collection (used for parse-level failures).
    pub fn single(
        field: impl Into<String>,
        code: &'static str,
        message: impl Into<String>,
    ) -> Self {
        let mut errors = Self::new();
        errors.push(field, code, message);
        errors
    }

    pub fn push(&mut self, field: impl Into<String>, code: &'static str, message: impl Into<String>) {
        self.0.push(FieldError {
            field: field.into(),
            code,
            message: message.into(),
        });
    }

    /// Absorb errors from a nested object, prefixing its field paths.
    pub fn merge_prefixed(&mut self, prefix: &str, other: ValidationErrors) {
        for err in other.0 {
            self.0.push(FieldError {
                field: format!("{}.{}", prefix, err.field),
                code: err.code,
                message: err.message,
            });
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// Convert into a `Result`, erring when any violation was recorded.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{}", joined)
    }
}
