//! Liturgical seasons and week-of-season numbering.
//!
//! Season boundaries are fully determined by the anchor table of the year:
//! Christmas Time runs through the Baptism of the Lord, Lent from Ash
//! Wednesday, the Paschal Triduum covers the three days before Easter, Easter
//! Time closes on Pentecost, and Advent opens the following liturgical year.
//! Ordinary Time fills the two gaps; its weeks are counted forward from the
//! Baptism of the Lord and backward from Christ the King, which is always
//! week 34.

use serde::Serialize;

use crate::date::Date;
use crate::moveable::MoveableDates;

/// A season of the liturgical year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LiturgicalSeason {
    /// Advent — from the First Sunday of Advent through December 24.
    Advent,
    /// Christmas Time — December 25 through the Baptism of the Lord.
    ChristmasTime,
    /// Ordinary Time — the two stretches outside the strong seasons.
    OrdinaryTime,
    /// Lent — Ash Wednesday through the Wednesday of Holy Week.
    Lent,
    /// The Paschal Triduum — Holy Thursday through Holy Saturday.
    PaschalTriduum,
    /// Easter Time — Easter Sunday through Pentecost.
    EasterTime,
}

impl LiturgicalSeason {
    /// Lower-snake-case name, as used in generated observance keys.
    pub fn key_name(&self) -> &'static str {
        match self {
            LiturgicalSeason::Advent => "advent",
            LiturgicalSeason::ChristmasTime => "christmas_time",
            LiturgicalSeason::OrdinaryTime => "ordinary_time",
            LiturgicalSeason::Lent => "lent",
            LiturgicalSeason::PaschalTriduum => "paschal_triduum",
            LiturgicalSeason::EasterTime => "easter_time",
        }
    }
}

impl std::fmt::Display for LiturgicalSeason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            LiturgicalSeason::Advent => "Advent",
            LiturgicalSeason::ChristmasTime => "Christmas Time",
            LiturgicalSeason::OrdinaryTime => "Ordinary Time",
            LiturgicalSeason::Lent => "Lent",
            LiturgicalSeason::PaschalTriduum => "Paschal Triduum",
            LiturgicalSeason::EasterTime => "Easter Time",
        };
        write!(f, "{name}")
    }
}

/// A date's position within its liturgical season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeasonedDate {
    /// The season the date falls in.
    pub season: LiturgicalSeason,
    /// Week of the season. Week 1 starts at the season opening; the days
    /// between Ash Wednesday and the First Sunday of Lent are week 0.
    pub week: u8,
    /// Week of the four-week psalter cycle (1–4).
    pub psalter_week: u8,
}

/// Classify `date` against the season boundaries in `moveable`.
///
/// `date` must belong to the same civil year the anchor table was resolved
/// for; this is a precondition of the resolution engine and is debug-asserted
/// here.
pub fn season_of(moveable: &MoveableDates, date: Date) -> SeasonedDate {
    debug_assert_eq!(date.year(), moveable.year(), "date outside anchor year");

    let easter = moveable.easter();
    let ash_wednesday = easter - 46;
    let pentecost = easter + 49;
    let baptism = moveable
        .anchor("baptism_of_the_lord")
        .expect("anchor table always carries the Baptism of the Lord");
    let advent1 = moveable
        .anchor("first_sunday_of_advent")
        .expect("anchor table always carries the First Sunday of Advent");
    let nativity = moveable
        .anchor("nativity_of_the_lord")
        .expect("anchor table always carries the Nativity");

    let (season, week) = if date >= nativity {
        (LiturgicalSeason::ChristmasTime, (date - nativity) / 7 + 1)
    } else if date >= advent1 {
        (LiturgicalSeason::Advent, (date - advent1) / 7 + 1)
    } else if date > pentecost {
        // Counted backward from Christ the King's week, which is week 34.
        let saturday_before_advent = advent1 - 1;
        (LiturgicalSeason::OrdinaryTime, 34 - (saturday_before_advent - date) / 7)
    } else if date >= easter {
        (LiturgicalSeason::EasterTime, (date - easter) / 7 + 1)
    } else if date >= easter - 3 {
        (LiturgicalSeason::PaschalTriduum, 1)
    } else if date >= ash_wednesday {
        let first_sunday_of_lent = ash_wednesday + 4;
        let week = if date < first_sunday_of_lent {
            0
        } else {
            (date - first_sunday_of_lent) / 7 + 1
        };
        (LiturgicalSeason::Lent, week)
    } else if date > baptism {
        (LiturgicalSeason::OrdinaryTime, (date - baptism) / 7 + 1)
    } else {
        // January days through the Baptism belong to the Christmas season
        // opened on December 25 of the previous year.
        let jan1_serial = Date::from_ymd(moveable.year(), 1, 1)
            .expect("year validated at anchor construction")
            .serial();
        let prev_nativity_serial = jan1_serial - 7;
        (LiturgicalSeason::ChristmasTime, (date.serial() - prev_nativity_serial) / 7 + 1)
    };

    let week = week as u8;
    let psalter_week = ((week as i32 - 1).rem_euclid(4) + 1) as u8;
    SeasonedDate { season, week, psalter_week }
}
