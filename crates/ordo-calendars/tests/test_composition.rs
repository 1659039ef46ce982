//! Integration tests for calendar composition across the shipped registry.

use ordo_calendars::{default_registry, Precedence, Title, GENERAL_ROMAN};

#[test]
fn europe_overrides_replace_general_records() {
    let registry = default_registry();
    let general = registry.flatten(GENERAL_ROMAN).unwrap();
    let europe = registry.flatten("europe").unwrap();

    // In the General Calendar Benedict is an obligatory memorial; Europe
    // celebrates him as a proper feast and co-patron.
    let general_benedict = &general["benedict_of_nursia_abbot"];
    assert_eq!(general_benedict.precedence, Precedence::GeneralMemorial10);
    assert!(!general_benedict.titles.contains(&Title::PatronOfEurope));

    let europe_benedict = &europe["benedict_of_nursia_abbot"];
    assert_eq!(europe_benedict.precedence, Precedence::ProperFeast8);
    assert!(europe_benedict.titles.contains(&Title::PatronOfEurope));
    assert_eq!(europe_benedict.origin, "europe");
}

#[test]
fn grandchildren_see_every_level_of_the_chain() {
    let registry = default_registry();
    let denmark = registry.flatten("denmark").unwrap();

    // Declared by Denmark itself.
    assert_eq!(denmark["ansgar_of_hamburg_bishop"].origin, "denmark");
    // Inherited from Europe with Europe's provenance.
    assert_eq!(denmark["benedict_of_nursia_abbot"].origin, "europe");
    // Inherited untouched from the General Calendar.
    assert_eq!(denmark["all_saints"].origin, GENERAL_ROMAN);
}

#[test]
fn siblings_never_observe_each_other() {
    let registry = default_registry();
    let brazil = registry.flatten("brazil").unwrap();
    let united_states = registry.flatten("united_states").unwrap();

    assert!(brazil.contains_key("our_lady_of_aparecida"));
    assert!(!united_states.contains_key("our_lady_of_aparecida"));

    assert!(united_states.contains_key("thanksgiving_day"));
    assert!(!brazil.contains_key("thanksgiving_day"));

    // Both inherit the continental feast from the Americas.
    assert_eq!(brazil["our_lady_of_guadalupe"].origin, "americas");
    assert_eq!(united_states["our_lady_of_guadalupe"].origin, "americas");
    assert_eq!(brazil["our_lady_of_guadalupe"].precedence, Precedence::ProperFeast8);
}

#[test]
fn flattening_is_deterministic() {
    let registry = default_registry();
    let a = registry.flatten("romania").unwrap();
    let b = registry.flatten("romania").unwrap();
    assert_eq!(a, b);
    let keys_a: Vec<_> = a.keys().collect();
    let mut keys_sorted = keys_a.clone();
    keys_sorted.sort();
    assert_eq!(keys_a, keys_sorted, "flattened keys iterate lexicographically");
}

#[test]
fn flattening_a_child_does_not_grow_the_parent() {
    let registry = default_registry();
    let before = registry.flatten(GENERAL_ROMAN).unwrap();
    let _ = registry.flatten("brazil").unwrap();
    let after = registry.flatten(GENERAL_ROMAN).unwrap();
    assert_eq!(before, after);
}
