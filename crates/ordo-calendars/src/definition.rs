//! `ObservanceDef` — one named observance of a calendar variant — and the
//! date rules that place it in a concrete year.

use serde::Serialize;

use crate::precedence::Precedence;
use ordo_core::errors::{Error, Result};
use ordo_core::Key;
use ordo_time::{Date, Month, MoveableDates, Weekday};

/// Liturgical color of an observance or season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Color {
    /// Black (optional for All Souls and Masses for the dead).
    Black,
    /// Gold, as a festal substitute for white.
    Gold,
    /// Green — Ordinary Time.
    Green,
    /// Purple — Advent, Lent, penitential days.
    Purple,
    /// Red — Passion, Pentecost, martyrs.
    Red,
    /// Rose — Gaudete and Laetare Sundays.
    Rose,
    /// White — festal seasons and non-martyr saints.
    White,
}

/// Titles attributed to the person(s) or mystery commemorated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Title {
    /// Apostle.
    Apostle,
    /// Evangelist.
    Evangelist,
    /// Martyr.
    Martyr,
    /// Virgin.
    Virgin,
    /// Priest.
    Priest,
    /// Bishop.
    Bishop,
    /// Pope.
    Pope,
    /// Abbot.
    Abbot,
    /// Deacon.
    Deacon,
    /// Religious.
    Religious,
    /// Missionary.
    Missionary,
    /// Doctor of the Church.
    DoctorOfTheChurch,
    /// Co-patron of Europe.
    PatronOfEurope,
}

/// Which multi-year reading cycle an observance's propers belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProperCycle {
    /// Temporale — the cycle of seasons and moveable feasts.
    ProperOfTime,
    /// Sanctorale — the cycle of fixed-date celebrations.
    ProperOfSaints,
}

/// Rule placing an observance in a concrete year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DateSpec {
    /// A fixed civil month and day.
    Fixed {
        /// Month of the year.
        month: Month,
        /// Day of the month.
        day: u8,
    },
    /// A moveable anchor plus a signed day offset.
    Moveable {
        /// Name of the anchor in the moveable-feast table.
        anchor: Key,
        /// Days to add to the anchor date (may be negative).
        offset_days: i32,
    },
    /// The n-th occurrence of a weekday within a civil month.
    NthWeekdayOfMonth {
        /// Which occurrence (1-based).
        nth: u8,
        /// The weekday to match.
        weekday: Weekday,
        /// Month of the year.
        month: Month,
    },
}

impl DateSpec {
    /// A fixed month/day rule.
    pub fn fixed(month: Month, day: u8) -> Self {
        DateSpec::Fixed { month, day }
    }

    /// A moveable-anchor rule.
    pub fn moveable(anchor: &str, offset_days: i32) -> Self {
        DateSpec::Moveable { anchor: anchor.to_string(), offset_days }
    }

    /// An n-th-weekday-of-month rule.
    pub fn nth_weekday(nth: u8, weekday: Weekday, month: Month) -> Self {
        DateSpec::NthWeekdayOfMonth { nth, weekday, month }
    }
}

/// One named liturgical observance, as declared by a calendar variant.
///
/// A key is unique within the flattened definition set of a variant; a later
/// declaration for the same key replaces the earlier one entirely (no
/// field-level merge).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObservanceDef {
    /// Identifier, unique within a flattened calendar.
    pub key: Key,
    /// Category in the Table of Liturgical Days.
    pub precedence: Precedence,
    /// Rule placing the observance in a concrete year.
    pub date_spec: DateSpec,
    /// Liturgical color.
    pub color: Color,
    /// Titles of the commemorated person(s) or mystery.
    pub titles: Vec<Title>,
    /// Reading-cycle membership.
    pub proper_cycle: ProperCycle,
    /// The variant that declared (or last overrode) this definition.
    /// Stamped at registration; preserved through inheritance.
    pub origin: Key,
    /// Martyrology-catalog keys this observance cites.
    pub martyrology: Vec<Key>,
}

impl ObservanceDef {
    /// A temporale observance: no martyrology citations, readings from the
    /// Proper of Time.
    pub fn of_time(key: &str, precedence: Precedence, date_spec: DateSpec) -> Self {
        ObservanceDef {
            key: key.to_string(),
            precedence,
            date_spec,
            color: Color::White,
            titles: Vec::new(),
            proper_cycle: ProperCycle::ProperOfTime,
            origin: Key::new(),
            martyrology: Vec::new(),
        }
    }

    /// A sanctorale observance. By default it cites the martyrology entry
    /// sharing its own key; override with [`ObservanceDef::martyrology`].
    pub fn of_saints(key: &str, precedence: Precedence, date_spec: DateSpec) -> Self {
        ObservanceDef {
            key: key.to_string(),
            precedence,
            date_spec,
            color: Color::White,
            titles: Vec::new(),
            proper_cycle: ProperCycle::ProperOfSaints,
            origin: Key::new(),
            martyrology: vec![key.to_string()],
        }
    }

    /// Set the liturgical color.
    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set the titles.
    pub fn titles(mut self, titles: &[Title]) -> Self {
        self.titles = titles.to_vec();
        self
    }

    /// Replace the martyrology citations (pass `&[]` for Marian feasts and
    /// other observances with no catalog entry).
    pub fn martyrology(mut self, keys: &[&str]) -> Self {
        self.martyrology = keys.iter().map(|k| (*k).to_string()).collect();
        self
    }

    /// Compute this observance's concrete date for the anchor table's year.
    ///
    /// Returns `Ok(None)` when the rule produces no valid date this year
    /// (February 29 outside leap years, a missing fifth weekday); this drops
    /// the observance for the year without error.
    ///
    /// # Errors
    /// [`Error::UnknownAnchor`] when a moveable rule names an anchor absent
    /// from the table.
    pub fn materialize(&self, moveable: &MoveableDates) -> Result<Option<Date>> {
        let year = moveable.year();
        match &self.date_spec {
            DateSpec::Fixed { month, day } => {
                match Date::from_ymd(year, month.number(), *day) {
                    Ok(d) => Ok(Some(d)),
                    // Feb 29 simply does not occur most years.
                    Err(_) if *month == Month::February && *day == 29 => Ok(None),
                    Err(e) => Err(e),
                }
            }
            DateSpec::Moveable { anchor, offset_days } => {
                let base = moveable.anchor(anchor).ok_or_else(|| Error::UnknownAnchor {
                    observance: self.key.clone(),
                    anchor: anchor.clone(),
                })?;
                Ok(Some(base.add_days(*offset_days)?))
            }
            DateSpec::NthWeekdayOfMonth { nth, weekday, month } => {
                if !(1..=5).contains(nth) {
                    return Err(Error::Date(format!(
                        "observance '{}': nth_weekday ordinal {nth} out of range [1, 5]",
                        self.key
                    )));
                }
                // A fifth occurrence may be absent in a given year; the
                // observance is simply dropped then.
                Ok(Date::nth_weekday(*nth, *weekday, year, month.number()).ok())
            }
        }
    }
}
