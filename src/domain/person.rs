//! Person resource models.
//!
//! `PersonFields` is the shared field set. `Person` composes it with a
//! write-only password; `PersonOut` is the public projection and simply has
//! no password field, so the password can never leak into a response body
//! by construction.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::config::{
    ADULT_AGE_MIN, AGE_MAX, AGE_MIN, NAME_MAX_LENGTH, NAME_MIN_LENGTH, PASSWORD_MIN_LENGTH,
};
use crate::domain::Location;
use crate::validation::{Constraint, FieldRule, FieldValue, ValidateFields, ValidationErrors};

/// Accepted hair color values
pub const HAIR_COLORS: &[&str] = &["white", "brown", "black", "blond", "red"];

/// Field set shared by every person representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonFields {
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    pub email: String,
    #[serde(default)]
    pub hair_color: Option<String>,
    #[serde(default)]
    pub is_married: Option<bool>,
}

impl ValidateFields for PersonFields {
    fn rules() -> &'static [FieldRule] {
        const RULES: &[FieldRule] = &[
            FieldRule::new(
                "first_name",
                Constraint::Length { min: Some(NAME_MIN_LENGTH), max: Some(NAME_MAX_LENGTH) },
            ),
            FieldRule::new(
                "last_name",
                Constraint::Length { min: Some(NAME_MIN_LENGTH), max: Some(NAME_MAX_LENGTH) },
            ),
            FieldRule::new("age", Constraint::Range { min: Some(AGE_MIN), max: Some(AGE_MAX) }),
            FieldRule::new("email", Constraint::Email),
            FieldRule::new("hair_color", Constraint::OneOf(HAIR_COLORS)),
        ];
        RULES
    }

    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "first_name" => FieldValue::Str(&self.first_name),
            "last_name" => FieldValue::Str(&self.last_name),
            "age" => FieldValue::Int(i64::from(self.age)),
            "email" => FieldValue::Str(&self.email),
            "hair_color" => self
                .hair_color
                .as_deref()
                .map(FieldValue::Str)
                .unwrap_or(FieldValue::Absent),
            "is_married" => self
                .is_married
                .map(FieldValue::Bool)
                .unwrap_or(FieldValue::Absent),
            _ => FieldValue::Absent,
        }
    }
}

/// Full person payload as accepted on the wire.
///
/// Serializing this type exposes the password; handlers that answer with a
/// person must go through [`PersonOut`] unless the endpoint deliberately
/// echoes the raw payload (update_person does).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    #[serde(flatten)]
    pub fields: PersonFields,
    pub password: String,
}

/// Person rules: the shared field table plus the password constraint.
static PERSON_RULES: Lazy<Vec<FieldRule>> = Lazy::new(|| {
    let mut rules = PersonFields::rules().to_vec();
    rules.push(FieldRule::new(
        "password",
        Constraint::Length { min: Some(PASSWORD_MIN_LENGTH), max: None },
    ));
    rules
});

impl ValidateFields for Person {
    fn rules() -> &'static [FieldRule] {
        &PERSON_RULES
    }

    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "password" => FieldValue::Str(&self.password),
            _ => self.fields.field(name),
        }
    }
}

/// Public projection of a person: everything except the password.
#[derive(Debug, Clone, Serialize)]
pub struct PersonOut {
    #[serde(flatten)]
    pub fields: PersonFields,
}

impl From<Person> for PersonOut {
    fn from(person: Person) -> Self {
        Self { fields: person.fields }
    }
}

/// Query parameters for the person detail lookup.
///
/// `age` is optional-shaped but runtime-required; the `Required` rule keeps
/// that quirk of the endpoint contract explicit instead of papering over it.
#[derive(Debug, Clone, Deserialize)]
pub struct PersonQuery {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
}

impl ValidateFields for PersonQuery {
    fn rules() -> &'static [FieldRule] {
        const RULES: &[FieldRule] = &[
            FieldRule::new(
                "name",
                Constraint::Length { min: Some(NAME_MIN_LENGTH), max: Some(NAME_MAX_LENGTH) },
            ),
            FieldRule::new("age", Constraint::Required),
            FieldRule::new("age", Constraint::Range { min: Some(ADULT_AGE_MIN), max: None }),
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
            "age" => self
                .age
                .map(|age| FieldValue::Int(i64::from(age)))
                .unwrap_or(FieldValue::Absent),
            _ => FieldValue::Absent,
        }
    }
}

/// Body for the person update: a person and a location in one payload.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePersonRequest {
    pub person: Person,
    pub location: Location,
}

impl ValidateFields for UpdatePersonRequest {
    // Composite type: no rules of its own, delegates to the nested tables.
    fn rules() -> &'static [FieldRule] {
        &[]
    }

    fn field(&self, _name: &str) -> FieldValue<'_> {
        FieldValue::Absent
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Err(e) = self.person.validate() {
            errors.merge_prefixed("person", e);
        }
        if let Err(e) = self.location.validate() {
            errors.merge_prefixed("location", e);
        }
        errors.into_result()
    }
}
