//! # ordo-time
//!
//! Civil date arithmetic, the Gregorian computus, the moveable-feast table,
//! and liturgical seasons.
//!
//! Everything in this crate is a pure function of the civil year (plus, for a
//! handful of feasts, the transfer flags in [`MoveableFeastConfig`]); the
//! per-year results are memoized process-wide and shared read-only.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Serial-number `Date` type.
pub mod date;

/// Gregorian computus (date of Easter Sunday).
pub mod easter;

/// `Month` — month of the year.
pub mod month;

/// Moveable-feast anchor table, resolved per year.
pub mod moveable;

/// Liturgical seasons and week-of-season numbering.
pub mod seasons;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::Date;
pub use easter::easter_sunday;
pub use month::Month;
pub use moveable::{MoveableDates, MoveableFeastConfig};
pub use seasons::{LiturgicalSeason, SeasonedDate};
pub use weekday::Weekday;
