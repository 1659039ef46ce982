//! The distributable bundle artifact.
//!
//! A bundle pairs one calendar variant with one locale: the flattened
//! sanctoral definitions, the martyrology entries a resolved year actually
//! references, the transfer configuration, and the display names. Temporale
//! entries are excluded — consumers regenerate the moveable cycle from the
//! year, they do not ship it.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::locale::{resolve_display_names, Locale};
use crate::martyrology::{subset, MartyrologyCatalog};
use ordo_calendars::{CalendarRegistry, ObservanceDef, ProperCycle};
use ordo_core::errors::{Error, Result};
use ordo_core::Key;
use ordo_engine::{collect_references, resolve_year};
use ordo_time::{MoveableDates, MoveableFeastConfig};

/// Display names shipped with a bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BundleI18n {
    /// The locale the names were resolved for.
    pub locale: String,
    /// Observance key → display name.
    pub names: BTreeMap<Key, String>,
}

/// One distributable calendar bundle.
#[derive(Debug, Clone, Serialize)]
pub struct Bundle {
    /// Name of the bundled calendar variant.
    pub calendar_name: Key,
    /// Transfer flags the bundle was resolved under.
    pub particular_config: MoveableFeastConfig,
    /// Flattened sanctoral definitions (temporale excluded).
    pub definitions: BTreeMap<Key, ObservanceDef>,
    /// Martyrology entries referenced by the resolved year.
    pub martyrology: MartyrologyCatalog,
    /// Display names for every definition that can surface.
    pub i18n: BundleI18n,
}

impl Bundle {
    /// Serialize the bundle to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Error::Runtime(format!("bundle serialization failed: {e}")))
    }
}

/// Builds bundles from a registry, a catalog, and the English name table.
#[derive(Debug)]
pub struct BundleBuilder<'a> {
    registry: &'a CalendarRegistry,
    catalog: &'a MartyrologyCatalog,
    english: &'a Locale,
}

impl<'a> BundleBuilder<'a> {
    /// Create a builder over shared reference data.
    pub fn new(
        registry: &'a CalendarRegistry,
        catalog: &'a MartyrologyCatalog,
        english: &'a Locale,
    ) -> Self {
        BundleBuilder { registry, catalog, english }
    }

    /// Build the bundle for one `(calendar, year, config, locale)`.
    ///
    /// The year is resolved once to learn which observances can surface;
    /// only those need display names and martyrology entries.
    pub fn build(
        &self,
        calendar: &str,
        year: i32,
        config: MoveableFeastConfig,
        locale: &Locale,
    ) -> Result<Bundle> {
        let flat = self.registry.flatten(calendar)?;
        let moveable = MoveableDates::for_year_with(year, config)?;
        let days = resolve_year(&flat, &moveable)?;

        let references = collect_references(&days);
        let martyrology = subset(self.catalog, &references);

        // Display names cover the *defined* observances that surfaced;
        // generated season defaults are rendered from their parts and need
        // no per-key name.
        let mut surfaced: Vec<&Key> = days
            .iter()
            .flat_map(|day| std::iter::once(&day.winner).chain(day.alternatives.iter()))
            .map(|def| &def.key)
            .filter(|key| flat.contains_key(*key))
            .collect();
        surfaced.sort();
        surfaced.dedup();
        let names = resolve_display_names(locale, self.english, surfaced)?;

        let definitions: BTreeMap<Key, ObservanceDef> = flat
            .into_iter()
            .filter(|(_, def)| def.proper_cycle != ProperCycle::ProperOfTime)
            .collect();

        Ok(Bundle {
            calendar_name: calendar.to_string(),
            particular_config: config,
            definitions,
            martyrology,
            i18n: BundleI18n { locale: locale.key.clone(), names },
        })
    }
}
