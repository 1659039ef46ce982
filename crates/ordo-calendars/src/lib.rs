//! # ordo-calendars
//!
//! Observance definitions and calendar variants.
//!
//! A calendar variant (the General Roman Calendar, or a regional/national
//! calendar) is a node in an explicit registry table. A variant may name a
//! parent variant; flattening walks the parent chain root-to-leaf and lets a
//! child's declaration for a key replace the inherited one wholesale.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `ObservanceDef`, `DateSpec`, and descriptive metadata enums.
pub mod definition;

/// The General Roman Calendar.
pub mod general_roman;

/// Particular (regional and national) calendars.
pub mod particular;

/// The Table of Liturgical Days — precedence categories and their flags.
pub mod precedence;

/// Calendar registry, parent-chain flattening, cycle detection.
pub mod registry;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use definition::{Color, DateSpec, ObservanceDef, ProperCycle, Title};
pub use precedence::{Precedence, PrecedenceInfo, Rank, PRECEDENCE_TABLE};
pub use registry::{default_registry, CalendarDef, CalendarRegistry, GENERAL_ROMAN};
