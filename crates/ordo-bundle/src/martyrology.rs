//! The martyrology catalog.
//!
//! The catalog is supplied by the caller as an opaque keyed lookup; this
//! crate only ever filters it down to the keys a resolved year references.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use ordo_core::Key;

/// Canonization level of a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CanonizationLevel {
    /// Blessed.
    Blessed,
    /// Saint.
    Saint,
}

/// One biographical record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MartyrologyEntry {
    /// Canonization level, when applicable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonization_level: Option<CanonizationLevel>,
    /// Year of death, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_death: Option<i32>,
}

/// The catalog: key → biographical record.
pub type MartyrologyCatalog = BTreeMap<Key, MartyrologyEntry>;

/// Filter `catalog` to the given keys. Keys absent from the catalog are
/// skipped — the catalog is reference data, not a completeness contract.
pub fn subset(catalog: &MartyrologyCatalog, keys: &BTreeSet<Key>) -> MartyrologyCatalog {
    keys.iter()
        .filter_map(|key| catalog.get_key_value(key))
        .map(|(key, entry)| (key.clone(), entry.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subset_keeps_only_referenced_entries() {
        let mut catalog = MartyrologyCatalog::new();
        catalog.insert(
            "agnes_of_rome_virgin".into(),
            MartyrologyEntry {
                canonization_level: Some(CanonizationLevel::Saint),
                date_of_death: Some(304),
            },
        );
        catalog.insert("ansgar_of_hamburg_bishop".into(), MartyrologyEntry::default());

        let keys: BTreeSet<Key> =
            ["agnes_of_rome_virgin".to_string(), "not_in_catalog".to_string()].into();
        let filtered = subset(&catalog, &keys);
        assert_eq!(filtered.len(), 1);
        assert!(filtered.contains_key("agnes_of_rome_virgin"));
    }
}
