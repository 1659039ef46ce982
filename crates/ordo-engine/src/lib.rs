//! # ordo-engine
//!
//! The precedence resolution engine.
//!
//! Given a flattened calendar and the moveable-date table of a year, the
//! engine assigns every civil date exactly one winning observance, an ordered
//! list of optional alternatives, and the set of suppressed candidates.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Lectionary cycles (Sunday A/B/C, weekday I/II).
pub mod cycles;

/// Martyrology reference collection.
pub mod linker;

/// The per-year resolution algorithm.
pub mod resolve;

/// `ResolvedDay` — one civil date's outcome.
pub mod resolved_day;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use cycles::{cycles_for, LiturgicalCycles, SundayCycle, WeekdayCycle};
pub use linker::collect_references;
pub use resolve::resolve_year;
pub use resolved_day::{DayWarning, ResolvedDay};
