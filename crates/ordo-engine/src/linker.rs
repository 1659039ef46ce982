//! Martyrology reference collection.
//!
//! Downstream bundling ships only the catalog entries a resolved year can
//! actually surface: those cited by winners and alternatives. Suppressed
//! candidates are never offered to a consumer, so their citations are not
//! collected.

use std::collections::BTreeSet;

use crate::resolved_day::ResolvedDay;
use ordo_core::Key;

/// Union the martyrology citations of every winner and alternative.
///
/// Pure and idempotent; the result is sorted (a `BTreeSet`), so repeated
/// runs produce identical output.
pub fn collect_references(days: &[ResolvedDay]) -> BTreeSet<Key> {
    days.iter()
        .flat_map(|day| std::iter::once(&day.winner).chain(day.alternatives.iter()))
        .flat_map(|def| def.martyrology.iter().cloned())
        .collect()
}
