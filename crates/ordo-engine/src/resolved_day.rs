//! `ResolvedDay` — one civil date's resolved outcome.

use serde::Serialize;

use crate::cycles::LiturgicalCycles;
use ordo_calendars::ObservanceDef;
use ordo_core::Key;
use ordo_time::{Date, SeasonedDate, Weekday};

/// Non-fatal diagnostics attached to a day during resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DayWarning {
    /// Two candidates shared the same precedence rank and the same origin
    /// specificity; the lexicographically first key was kept as winner.
    AuthoringConflict {
        /// The key treated as winner.
        kept: Key,
        /// The key it collided with.
        displaced: Key,
    },
}

impl std::fmt::Display for DayWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayWarning::AuthoringConflict { kept, displaced } => write!(
                f,
                "authoring conflict: '{kept}' and '{displaced}' share rank and origin specificity"
            ),
        }
    }
}

/// One calendar date's outcome.
///
/// Every civil date of a resolved year has exactly one `ResolvedDay`, and
/// `winner` is always present — an otherwise-empty date is won by the
/// ordinary day of its season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedDay {
    /// The civil date.
    pub date: Date,
    /// Day of the week.
    pub weekday: Weekday,
    /// Season membership and week numbering.
    pub seasoned: SeasonedDate,
    /// Lectionary cycles in force.
    pub cycles: LiturgicalCycles,
    /// The observance celebrated on this date.
    pub winner: ObservanceDef,
    /// Optional alternatives, most preferred first (ascending rank).
    pub alternatives: Vec<ObservanceDef>,
    /// Candidates that lost outright and are not offerable.
    pub suppressed: Vec<ObservanceDef>,
    /// Non-fatal diagnostics from the precedence contest.
    pub warnings: Vec<DayWarning>,
}
