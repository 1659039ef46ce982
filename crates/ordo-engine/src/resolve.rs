//! The per-year resolution algorithm.
//!
//! Four steps: materialize every definition's date, bucket the results by
//! date, rank each date's candidates against the Table of Liturgical Days,
//! and assemble one [`ResolvedDay`] per civil date in ascending order.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::cycles::cycles_for;
use crate::resolved_day::{DayWarning, ResolvedDay};
use ordo_calendars::{Color, ObservanceDef, Precedence, GENERAL_ROMAN};
use ordo_core::errors::Result;
use ordo_core::Key;
use ordo_time::seasons::{season_of, LiturgicalSeason, SeasonedDate};
use ordo_time::{Date, MoveableDates, Weekday};

/// Resolve a whole civil year.
///
/// `flat` is a flattened calendar (see `CalendarRegistry::flatten`); the year
/// is taken from the anchor table. Returns one [`ResolvedDay`] per civil
/// date, ascending — 365 entries, or 366 in leap years.
///
/// # Errors
/// Fails wholesale on the first definition whose moveable rule names an
/// unknown anchor; a partially resolved year is never returned.
pub fn resolve_year(
    flat: &BTreeMap<Key, ObservanceDef>,
    moveable: &MoveableDates,
) -> Result<Vec<ResolvedDay>> {
    let year = moveable.year();

    // Step 1 — materialize. Iteration over the BTreeMap is stable and
    // lexicographic by key, which the same-rank fallback below relies on.
    let mut buckets: BTreeMap<Date, Vec<ObservanceDef>> = BTreeMap::new();
    for def in flat.values() {
        if let Some(date) = def.materialize(moveable)? {
            // An offset can escape the civil year (e.g. an anchor near its
            // edges); such an observance simply does not occur this year.
            if date.year() == year {
                buckets.entry(date).or_default().push(def.clone());
            }
        }
    }

    // Steps 2–4 — walk the year, ranking each date's bucket.
    let jan1 = Date::from_ymd(year, 1, 1)?;
    let dec31 = Date::from_ymd(year, 12, 31)?;
    let mut days = Vec::with_capacity((dec31 - jan1 + 1) as usize);
    let mut date = jan1;
    loop {
        let seasoned = season_of(moveable, date);
        let mut candidates = buckets.remove(&date).unwrap_or_default();
        candidates.push(seasonal_default(moveable, date, seasoned));
        candidates.sort_by(compare_candidates);

        let mut warnings = Vec::new();
        if let [first, second, ..] = candidates.as_slice() {
            // A rank tie at equal origin specificity is an authoring defect,
            // kept non-fatal: the lexicographically first key wins and the
            // day is annotated. Optional memorials are exempt — any number
            // of them may legitimately share a date.
            if first.precedence.rank() == second.precedence.rank()
                && origin_specificity(first) == origin_specificity(second)
                && first.precedence != Precedence::OptionalMemorial12
            {
                warnings.push(DayWarning::AuthoringConflict {
                    kept: first.key.clone(),
                    displaced: second.key.clone(),
                });
            }
        }

        let mut rest = candidates.into_iter();
        let winner = rest.next().expect("a seasonal default is always present");
        let mut alternatives = Vec::new();
        let mut suppressed = Vec::new();
        let mut barrier = winner.precedence.is_exclusive();
        for candidate in rest {
            let exclusive = candidate.precedence.is_exclusive();
            if !barrier && candidate.precedence.is_optional_capable() {
                alternatives.push(candidate);
            } else {
                suppressed.push(candidate);
            }
            barrier |= exclusive;
        }

        days.push(ResolvedDay {
            date,
            weekday: date.weekday(),
            seasoned,
            cycles: cycles_for(moveable, date),
            winner,
            alternatives,
            suppressed,
            warnings,
        });

        if date == dec31 {
            break;
        }
        date = date + 1;
    }

    debug_assert_eq!(days.len(), (dec31 - jan1 + 1) as usize);
    Ok(days)
}

/// Total order over a date's candidates: rank, then origin specificity
/// (a named particular calendar beats the universal one), then key.
fn compare_candidates(a: &ObservanceDef, b: &ObservanceDef) -> Ordering {
    a.precedence
        .rank()
        .cmp(&b.precedence.rank())
        .then_with(|| origin_specificity(a).cmp(&origin_specificity(b)))
        .then_with(|| a.key.cmp(&b.key))
}

/// 0 for a particular-calendar origin, 1 for the universal calendar, so that
/// the more specific origin sorts first.
fn origin_specificity(def: &ObservanceDef) -> u8 {
    u8::from(def.origin == GENERAL_ROMAN)
}

/// The "ordinary day of the season" candidate, present on every date.
///
/// Sundays of the strong seasons, the weekdays of Holy Week, and the days
/// within the Easter octave rank with the proper-of-time solemnities; other
/// Sundays rank 6. Privileged weekdays (December 17–24, the Christmas
/// octave, and Lent weekdays) rank 9; everything else is an ordinary weekday.
fn seasonal_default(moveable: &MoveableDates, date: Date, seasoned: SeasonedDate) -> ObservanceDef {
    let season = seasoned.season;
    let easter = moveable.easter();
    let precedence = if date.weekday() == Weekday::Sunday {
        match season {
            LiturgicalSeason::Advent | LiturgicalSeason::Lent | LiturgicalSeason::EasterTime => {
                Precedence::ProperOfTimeSolemnity2
            }
            _ => Precedence::Sunday6,
        }
    } else {
        let holy_week = date > easter - 7 && date < easter;
        let easter_octave = date > easter && date <= easter + 6;
        let late_advent = season == LiturgicalSeason::Advent && date.day() >= 17;
        let christmas_octave =
            season == LiturgicalSeason::ChristmasTime && date.month() == 12 && date.day() >= 26;
        if holy_week || easter_octave {
            Precedence::ProperOfTimeSolemnity2
        } else {
            match season {
                LiturgicalSeason::Lent => Precedence::PrivilegedWeekday9,
                _ if late_advent || christmas_octave => Precedence::PrivilegedWeekday9,
                _ => Precedence::Weekday13,
            }
        }
    };

    let color = match season {
        LiturgicalSeason::Advent | LiturgicalSeason::Lent | LiturgicalSeason::PaschalTriduum => {
            Color::Purple
        }
        LiturgicalSeason::ChristmasTime | LiturgicalSeason::EasterTime => Color::White,
        LiturgicalSeason::OrdinaryTime => Color::Green,
    };

    let key = format!(
        "{}_{}_{}",
        season.key_name(),
        seasoned.week,
        date.weekday().key_name()
    );
    let mut def = ObservanceDef::of_time(
        &key,
        precedence,
        ordo_calendars::DateSpec::fixed(
            ordo_time::Month::from_number(date.month()).expect("month from a valid date"),
            date.day(),
        ),
    )
    .color(color);
    def.origin = GENERAL_ROMAN.to_string();
    def
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordo_calendars::default_registry;

    #[test]
    fn seasonal_default_keys_follow_season_and_week() {
        let moveable = MoveableDates::for_year(2024).unwrap();
        let date = Date::from_ymd(2024, 6, 18).unwrap(); // Tuesday, Ordinary Time
        let seasoned = season_of(&moveable, date);
        let def = seasonal_default(&moveable, date, seasoned);
        assert_eq!(def.key, "ordinary_time_11_tuesday");
        assert_eq!(def.precedence, Precedence::Weekday13);
        assert_eq!(def.color, Color::Green);
    }

    #[test]
    fn late_advent_weekdays_are_privileged() {
        let moveable = MoveableDates::for_year(2024).unwrap();
        // December 18, 2024 is a Wednesday in Advent.
        let date = Date::from_ymd(2024, 12, 18).unwrap();
        let seasoned = season_of(&moveable, date);
        let def = seasonal_default(&moveable, date, seasoned);
        assert_eq!(def.precedence, Precedence::PrivilegedWeekday9);
        // December 10 is not privileged.
        let date = Date::from_ymd(2024, 12, 10).unwrap();
        let seasoned = season_of(&moveable, date);
        let def = seasonal_default(&moveable, date, seasoned);
        assert_eq!(def.precedence, Precedence::Weekday13);
    }

    #[test]
    fn strong_season_sundays_rank_with_solemnities() {
        let moveable = MoveableDates::for_year(2024).unwrap();
        // First Sunday of Lent 2024: February 18.
        let date = Date::from_ymd(2024, 2, 18).unwrap();
        let seasoned = season_of(&moveable, date);
        let def = seasonal_default(&moveable, date, seasoned);
        assert_eq!(def.precedence, Precedence::ProperOfTimeSolemnity2);
        // An Ordinary Time Sunday ranks 6.
        let date = Date::from_ymd(2024, 6, 16).unwrap();
        let seasoned = season_of(&moveable, date);
        let def = seasonal_default(&moveable, date, seasoned);
        assert_eq!(def.precedence, Precedence::Sunday6);
    }

    #[test]
    fn ordinary_weekday_wins_empty_dates() {
        let registry = default_registry();
        let flat = registry.flatten(GENERAL_ROMAN).unwrap();
        let moveable = MoveableDates::for_year(2024).unwrap();
        let days = resolve_year(&flat, &moveable).unwrap();
        // June 18, 2024 has no sanctoral entry in the shipped data.
        let day = &days[Date::from_ymd(2024, 6, 18).unwrap().day_of_year() as usize - 1];
        assert_eq!(day.winner.key, "ordinary_time_11_tuesday");
        assert!(day.alternatives.is_empty());
        assert!(day.suppressed.is_empty());
    }
}
