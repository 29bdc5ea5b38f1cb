//! Custom extractors.

mod validated;

pub use validated::{ValidatedForm, ValidatedJson, ValidatedQuery};
