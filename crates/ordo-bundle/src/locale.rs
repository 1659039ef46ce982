//! Display names per locale, with English fallback.
//!
//! A bundle ships the display name of every observance it can surface. The
//! requesting locale's names are merged over the English ones key by key;
//! a key covered by neither is reported loudly rather than shipped blank.

use std::collections::BTreeMap;

use serde::Serialize;

use ordo_core::errors::{Error, Result};
use ordo_core::Key;

/// Display-name table of one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Locale {
    /// Locale key (`"en"`, `"pt-br"`, …).
    pub key: String,
    /// Observance key → display name.
    pub names: BTreeMap<Key, String>,
}

impl Locale {
    /// An empty locale.
    pub fn new(key: &str) -> Self {
        Locale { key: key.to_string(), names: BTreeMap::new() }
    }

    /// Add one display name.
    pub fn with_name(mut self, key: &str, name: &str) -> Self {
        self.names.insert(key.to_string(), name.to_string());
        self
    }
}

/// Resolve a display name for every key, preferring `requested` and falling
/// back to `english`.
///
/// # Errors
/// [`Error::MissingTranslation`] on the first key neither locale covers,
/// naming the key and the requested locale.
pub fn resolve_display_names<'a>(
    requested: &Locale,
    english: &Locale,
    keys: impl IntoIterator<Item = &'a Key>,
) -> Result<BTreeMap<Key, String>> {
    let mut resolved = BTreeMap::new();
    for key in keys {
        let name = requested
            .names
            .get(key)
            .or_else(|| english.names.get(key))
            .ok_or_else(|| Error::MissingTranslation {
                key: key.clone(),
                locale: requested.key.clone(),
            })?;
        resolved.insert(key.clone(), name.clone());
    }
    Ok(resolved)
}
