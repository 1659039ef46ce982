//! # ordo
//!
//! Liturgical calendar computation for the Roman Rite.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this crate
//! rather than the individual `ordo-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! ordo = "0.1"
//! ```
//!
//! ```rust
//! use ordo::liturgical_calendar;
//!
//! let days = liturgical_calendar("general_roman", 2024).unwrap();
//! assert_eq!(days.len(), 366); // 2024 is a leap year
//! let easter = days.iter().find(|d| d.winner.key == "easter_sunday").unwrap();
//! assert_eq!(easter.date.to_string(), "2024-03-31");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use ordo_core as core;

/// Date arithmetic, the computus, moveable feasts, and seasons.
pub use ordo_time as time;

/// Observance definitions and calendar variants.
pub use ordo_calendars as calendars;

/// The precedence resolution engine.
pub use ordo_engine as engine;

/// Bundling and locale collaborators.
pub use ordo_bundle as bundle;

use ordo_core::errors::Result;

/// Resolve one calendar variant for one civil year, with the default
/// (no-transfer) moveable-feast configuration.
///
/// Convenience wrapper over `calendars::default_registry` →
/// `time::MoveableDates::for_year` → `engine::resolve_year`.
pub fn liturgical_calendar(calendar: &str, year: i32) -> Result<Vec<ordo_engine::ResolvedDay>> {
    let registry = ordo_calendars::default_registry();
    let flat = registry.flatten(calendar)?;
    let moveable = ordo_time::MoveableDates::for_year(year)?;
    ordo_engine::resolve_year(&flat, &moveable)
}
