//! In-memory registry of known person identifiers.
//!
//! Stand-in for a database: a fixed set of positive ids, read-only after
//! construction, shared across requests behind an `Arc`.

use std::collections::BTreeSet;

use crate::config::KNOWN_PERSON_IDS;

/// Fixed set of person ids the API recognizes.
#[derive(Debug, Clone)]
pub struct PersonRegistry {
    ids: BTreeSet<u32>,
}

impl PersonRegistry {
    /// Build a registry from an arbitrary id collection.
    pub fn with_ids(ids: impl IntoIterator<Item = u32>) -> Self {
        Self { ids: ids.into_iter().collect() }
    }

    /// Build the registry seeded with the well-known id range.
    pub fn seeded() -> Self {
        Self::with_ids(KNOWN_PERSON_IDS)
    }

    /// Whether `id` belongs to a known person.
    pub fn exists(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl Default for PersonRegistry {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_registry_covers_known_range() {
        let registry = PersonRegistry::seeded();
        assert_eq!(registry.len(), 10);
        for id in 1..=10 {
            assert!(registry.exists(id));
        }
    }

    #[test]
    fn test_unknown_ids_do_not_exist() {
        let registry = PersonRegistry::seeded();
        assert!(!registry.exists(0));
        assert!(!registry.exists(11));
        assert!(!registry.exists(u32::MAX));
    }

    #[test]
    fn test_custom_ids() {
        let registry = PersonRegistry::with_ids([42, 7]);
        assert!(registry.exists(7));
        assert!(registry.exists(42));
        assert!(!registry.exists(1));
    }
}
