//! Validation layer - framework-agnostic field validation engine.
//!
//! Each resource type declares an explicit table of `FieldRule`s (one row per
//! field/constraint pair) and exposes its raw field values through the
//! `ValidateFields` trait. A single evaluator walks the table, so every type
//! is validated uniformly and the rules stay decoupled from any particular
//! web framework.

mod error;
mod rules;

pub use error::{FieldError, ValidationErrors};
pub use rules::{Constraint, FieldRule, FieldValue, ValidateFields};
