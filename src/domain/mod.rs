//! Domain layer - Resource models and their validation rule tables.
//!
//! Models are plain serde types; their constraints live in explicit
//! `FieldRule` tables consumed by the validation engine, not in
//! framework-specific attributes.

pub mod auth;
pub mod location;
pub mod person;

pub use auth::{ContactForm, LoginForm, LoginOut};
pub use location::Location;
pub use person::{Person, PersonFields, PersonOut, PersonQuery, UpdatePersonRequest, HAIR_COLORS};
