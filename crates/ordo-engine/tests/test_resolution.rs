//! Integration tests for the precedence resolution engine.

use ordo_calendars::{
    default_registry, CalendarDef, CalendarRegistry, Color, DateSpec, ObservanceDef, Precedence,
    GENERAL_ROMAN,
};
use ordo_engine::{collect_references, resolve_year, DayWarning};
use ordo_time::date::is_leap_year;
use ordo_time::{Date, MoveableDates, Month};

fn resolve(calendar: &str, year: i32) -> Vec<ordo_engine::ResolvedDay> {
    let registry = default_registry();
    let flat = registry.flatten(calendar).unwrap();
    let moveable = MoveableDates::for_year(year).unwrap();
    resolve_year(&flat, &moveable).unwrap()
}

fn day_of<'a>(
    days: &'a [ordo_engine::ResolvedDay],
    year: i32,
    month: u8,
    day: u8,
) -> &'a ordo_engine::ResolvedDay {
    let date = Date::from_ymd(year, month, day).unwrap();
    &days[date.day_of_year() as usize - 1]
}

#[test]
fn totality_365_or_366_days_no_gaps() {
    for year in [2023, 2024, 2100] {
        let days = resolve(GENERAL_ROMAN, year);
        let expected = if is_leap_year(year) { 366 } else { 365 };
        assert_eq!(days.len(), expected, "{year}");
        // Ascending, gapless, duplicate-free.
        for pair in days.windows(2) {
            assert_eq!(pair[1].date - pair[0].date, 1);
        }
        assert_eq!(days[0].date, Date::from_ymd(year, 1, 1).unwrap());
        assert_eq!(days[days.len() - 1].date, Date::from_ymd(year, 12, 31).unwrap());
    }
}

#[test]
fn determinism_two_runs_identical() {
    let a = resolve("denmark", 2025);
    let b = resolve("denmark", 2025);
    assert_eq!(a, b);
}

#[test]
fn winner_never_reappears_and_alternatives_are_monotonic() {
    for calendar in [GENERAL_ROMAN, "europe", "brazil", "united_states"] {
        for day in resolve(calendar, 2024) {
            assert!(
                !day.alternatives.iter().any(|d| d.key == day.winner.key),
                "{}: winner in alternatives",
                day.date
            );
            assert!(
                !day.suppressed.iter().any(|d| d.key == day.winner.key),
                "{}: winner in suppressed",
                day.date
            );
            let winner_rank = day.winner.precedence.rank();
            let mut previous = winner_rank;
            for alt in &day.alternatives {
                let rank = alt.precedence.rank();
                assert!(rank >= previous, "{}: alternatives out of order", day.date);
                previous = rank;
            }
        }
    }
}

#[test]
fn easter_cycle_winners_2024() {
    let days = resolve(GENERAL_ROMAN, 2024);
    assert_eq!(day_of(&days, 2024, 2, 14).winner.key, "ash_wednesday");
    assert_eq!(day_of(&days, 2024, 3, 29).winner.key, "friday_of_the_passion_of_the_lord");
    assert_eq!(day_of(&days, 2024, 3, 31).winner.key, "easter_sunday");
    assert_eq!(day_of(&days, 2024, 5, 9).winner.key, "ascension_of_the_lord");
    assert_eq!(day_of(&days, 2024, 5, 19).winner.key, "pentecost_sunday");
    assert_eq!(day_of(&days, 2024, 12, 25).winner.key, "nativity_of_the_lord");
}

#[test]
fn exclusive_winner_suppresses_regional_memorial() {
    // A universal fixed-date solemnity of exclusive rank, plus a regional
    // memorial-tier observance on the same date: the memorial must land in
    // `suppressed`, not `alternatives`.
    let mut registry = CalendarRegistry::new();
    registry.register(CalendarDef::new(
        GENERAL_ROMAN,
        None,
        vec![ObservanceDef::of_saints(
            "all_saints",
            Precedence::GeneralSolemnity3,
            DateSpec::fixed(Month::November, 1),
        )
        .martyrology(&[])],
    ));
    registry.register(CalendarDef::new(
        "regional",
        Some(GENERAL_ROMAN),
        vec![ObservanceDef::of_saints(
            "valentine_of_raetia_bishop",
            Precedence::ProperMemorial11,
            DateSpec::fixed(Month::November, 1),
        )],
    ));
    let flat = registry.flatten("regional").unwrap();
    let moveable = MoveableDates::for_year(2024).unwrap();
    let days = resolve_year(&flat, &moveable).unwrap();
    let day = day_of(&days, 2024, 11, 1);

    assert_eq!(day.winner.key, "all_saints");
    assert!(day.alternatives.is_empty());
    assert!(day.suppressed.iter().any(|d| d.key == "valentine_of_raetia_bishop"));
}

#[test]
fn memorial_winner_demotes_optional_memorial() {
    // January 20, 2025 (a Monday): Fabian and Sebastian are both optional
    // memorials; the weekday loses, the memorials surface.
    let days = resolve(GENERAL_ROMAN, 2025);
    let day = day_of(&days, 2025, 1, 20);
    assert_eq!(day.winner.key, "fabian_i_pope");
    assert!(day
        .alternatives
        .iter()
        .any(|d| d.key == "sebastian_of_milan_martyr"));
    // Two optional memorials sharing a date is licit, not an authoring
    // conflict.
    assert!(day.warnings.is_empty());
    // The ordinary weekday itself is not offerable once outranked.
    assert!(day.suppressed.iter().any(|d| d.key.starts_with("ordinary_time")));
}

#[test]
fn sunday_suppresses_general_feast() {
    // September 29, 2024 is a Sunday in Ordinary Time; the feast of the
    // archangels is outranked and suppressed outright.
    let days = resolve(GENERAL_ROMAN, 2024);
    let day = day_of(&days, 2024, 9, 29);
    assert_eq!(day.winner.key, "ordinary_time_26_sunday");
    assert!(day
        .suppressed
        .iter()
        .any(|d| d.key == "michael_gabriel_and_raphael_archangels"));
    assert!(day.alternatives.is_empty());
}

#[test]
fn lent_memorials_become_commemorations() {
    // March 7, 2025 falls in Lent: the privileged weekday wins and the
    // memorial of Perpetua and Felicity is kept as an alternative.
    let days = resolve(GENERAL_ROMAN, 2025);
    let day = day_of(&days, 2025, 3, 7);
    assert_eq!(day.winner.precedence, Precedence::PrivilegedWeekday9);
    assert!(day
        .alternatives
        .iter()
        .any(|d| d.key == "perpetua_and_felicity_martyrs"));
}

#[test]
fn regional_origin_wins_rank_ties_without_warning() {
    let mut registry = CalendarRegistry::new();
    registry.register(CalendarDef::new(
        GENERAL_ROMAN,
        None,
        vec![ObservanceDef::of_saints(
            "zenaida_of_tarsus",
            Precedence::ProperMemorial11,
            DateSpec::fixed(Month::October, 11),
        )],
    ));
    registry.register(CalendarDef::new(
        "regional",
        Some(GENERAL_ROMAN),
        vec![ObservanceDef::of_saints(
            "alexander_sauli_bishop",
            Precedence::ProperMemorial11,
            DateSpec::fixed(Month::October, 11),
        )],
    ));
    let flat = registry.flatten("regional").unwrap();
    let moveable = MoveableDates::for_year(2024).unwrap();
    let days = resolve_year(&flat, &moveable).unwrap();
    let day = day_of(&days, 2024, 10, 11);

    // Same rank, but the regional declaration is more specific: it wins
    // even though it sorts after alphabetically... and no conflict is
    // reported.
    assert_eq!(day.winner.key, "alexander_sauli_bishop");
    assert!(day.warnings.is_empty());
    assert!(day.alternatives.iter().any(|d| d.key == "zenaida_of_tarsus"));
}

#[test]
fn equal_specificity_rank_tie_warns_and_keeps_first_key() {
    let mut registry = CalendarRegistry::new();
    registry.register(CalendarDef::new(
        GENERAL_ROMAN,
        None,
        vec![
            ObservanceDef::of_saints(
                "abercius_of_hieropolis_bishop",
                Precedence::GeneralMemorial10,
                DateSpec::fixed(Month::October, 22),
            ),
            ObservanceDef::of_saints(
                "philip_of_heraclea_bishop",
                Precedence::GeneralMemorial10,
                DateSpec::fixed(Month::October, 22),
            ),
        ],
    ));
    let flat = registry.flatten(GENERAL_ROMAN).unwrap();
    let moveable = MoveableDates::for_year(2024).unwrap();
    let days = resolve_year(&flat, &moveable).unwrap();
    let day = day_of(&days, 2024, 10, 22);

    assert_eq!(day.winner.key, "abercius_of_hieropolis_bishop");
    assert_eq!(
        day.warnings,
        vec![DayWarning::AuthoringConflict {
            kept: "abercius_of_hieropolis_bishop".into(),
            displaced: "philip_of_heraclea_bishop".into(),
        }]
    );
    // The run completes: the displaced memorial survives as an alternative.
    assert!(day.alternatives.iter().any(|d| d.key == "philip_of_heraclea_bishop"));
}

#[test]
fn unknown_anchor_fails_the_whole_year() {
    let mut registry = CalendarRegistry::new();
    registry.register(CalendarDef::new(
        GENERAL_ROMAN,
        None,
        vec![ObservanceDef::of_time(
            "rogation_monday",
            Precedence::OptionalMemorial12,
            DateSpec::moveable("rogation_days", 0),
        )],
    ));
    let flat = registry.flatten(GENERAL_ROMAN).unwrap();
    let moveable = MoveableDates::for_year(2024).unwrap();
    let err = resolve_year(&flat, &moveable).unwrap_err();
    assert!(matches!(
        err,
        ordo_core::Error::UnknownAnchor { ref observance, ref anchor }
            if observance == "rogation_monday" && anchor == "rogation_days"
    ));
}

#[test]
fn danish_moveable_proper_lands_after_pentecost() {
    let days = resolve("denmark", 2024);
    // Pentecost 2024: May 19 → the Eternal High Priest feast on Thursday
    // May 23 outranks the ordinary weekday.
    let day = day_of(&days, 2024, 5, 23);
    assert_eq!(day.winner.key, "our_lord_jesus_christ_the_eternal_high_priest");
    assert_eq!(day.winner.precedence, Precedence::ProperFeast8);
}

#[test]
fn thanksgiving_materializes_via_nth_weekday() {
    let days = resolve("united_states", 2024);
    let day = day_of(&days, 2024, 11, 28);
    assert_eq!(day.winner.key, "thanksgiving_day");
    assert_eq!(day.winner.color, Color::White);
}

#[test]
fn martyrology_references_shrink_with_suppression() {
    let days = resolve(GENERAL_ROMAN, 2024);
    let refs = collect_references(&days);
    // A memorial that won its day in 2024.
    assert!(refs.contains("john_bosco_priest"));
    // The archangels' feast was suppressed by a Sunday in 2024 — but it
    // carries no martyrology citation either way; the set must only ever
    // contain keys cited by surfaced observances.
    for key in &refs {
        assert!(
            days.iter().any(|day| {
                std::iter::once(&day.winner)
                    .chain(day.alternatives.iter())
                    .any(|d| d.martyrology.contains(key))
            }),
            "{key} not cited by any surfaced observance"
        );
    }
}

#[test]
fn serialized_output_is_stable() {
    let days = resolve("romania", 2025);
    let a = serde_json::to_string(&days).unwrap();
    let b = serde_json::to_string(&days).unwrap();
    assert_eq!(a, b);
    assert!(a.contains("\"2025-02-28\""));
    assert!(a.contains("john_cassian_priest"));
}
