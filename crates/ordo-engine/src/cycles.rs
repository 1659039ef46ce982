//! Lectionary cycles.
//!
//! The Sunday readings follow a three-year cycle (A, B, C) and the weekday
//! readings a two-year cycle (I, II). Both switch at the First Sunday of
//! Advent; a liturgical year is labeled by the civil year it mostly covers,
//! i.e. the one it ends in.

use serde::Serialize;

use ordo_time::{Date, MoveableDates};

/// The three-year Sunday lectionary cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SundayCycle {
    /// Year A (Matthew).
    YearA,
    /// Year B (Mark).
    YearB,
    /// Year C (Luke).
    YearC,
}

/// The two-year weekday lectionary cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WeekdayCycle {
    /// Year I (odd-numbered liturgical years).
    Year1,
    /// Year II (even-numbered liturgical years).
    Year2,
}

/// Cycle membership of one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LiturgicalCycles {
    /// Sunday cycle.
    pub sunday: SundayCycle,
    /// Weekday cycle.
    pub weekday: WeekdayCycle,
}

/// Compute the cycles in force on `date`.
///
/// From the First Sunday of Advent onward, the date belongs to the next
/// liturgical year.
pub fn cycles_for(moveable: &MoveableDates, date: Date) -> LiturgicalCycles {
    let advent1 = moveable
        .anchor("first_sunday_of_advent")
        .expect("anchor table always carries the First Sunday of Advent");
    let liturgical_year = if date >= advent1 { moveable.year() + 1 } else { moveable.year() };
    let sunday = match liturgical_year % 3 {
        1 => SundayCycle::YearA,
        2 => SundayCycle::YearB,
        _ => SundayCycle::YearC,
    };
    let weekday = if liturgical_year % 2 == 1 { WeekdayCycle::Year1 } else { WeekdayCycle::Year2 };
    LiturgicalCycles { sunday, weekday }
}
