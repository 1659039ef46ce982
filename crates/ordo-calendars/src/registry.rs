//! Calendar variants as an explicit node table.
//!
//! Variants reference their parent by name; the registry resolves the chain
//! by lookup at flatten time. A child never mutates its parent, and two
//! siblings never observe each other's definitions.

use std::collections::{BTreeMap, HashSet};

use crate::definition::ObservanceDef;
use crate::general_roman::general_roman;
use crate::particular;
use ordo_core::errors::{Error, Result};
use ordo_core::Key;

/// Name of the universal calendar, the root of every variant chain.
pub const GENERAL_ROMAN: &str = "general_roman";

/// One calendar variant: a name, an optional parent reference, and the
/// definitions the variant declares directly.
///
/// Constructed once, immutable afterwards; the flattened definition set is
/// derived by [`CalendarRegistry::flatten`], never mutated in place.
#[derive(Debug, Clone)]
pub struct CalendarDef {
    name: Key,
    parent: Option<Key>,
    definitions: Vec<ObservanceDef>,
}

impl CalendarDef {
    /// Create a variant. Stamps every definition's `origin` with `name`.
    pub fn new(name: &str, parent: Option<&str>, definitions: Vec<ObservanceDef>) -> Self {
        let definitions = definitions
            .into_iter()
            .map(|mut def| {
                def.origin = name.to_string();
                def
            })
            .collect();
        CalendarDef {
            name: name.to_string(),
            parent: parent.map(str::to_string),
            definitions,
        }
    }

    /// The variant's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The parent variant's name, if any.
    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    /// The definitions declared directly by this variant.
    pub fn definitions(&self) -> &[ObservanceDef] {
        &self.definitions
    }
}

/// The table of known calendar variants.
#[derive(Debug, Default)]
pub struct CalendarRegistry {
    calendars: BTreeMap<Key, CalendarDef>,
}

impl CalendarRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a variant, replacing any previous variant of the same name.
    pub fn register(&mut self, calendar: CalendarDef) {
        self.calendars.insert(calendar.name.clone(), calendar);
    }

    /// Look up a variant by name.
    pub fn get(&self, name: &str) -> Option<&CalendarDef> {
        self.calendars.get(name)
    }

    /// Names of all registered variants, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.calendars.keys().map(String::as_str)
    }

    /// Flatten a variant against its ancestor chain.
    ///
    /// Walks the parent chain root-to-leaf, accumulating definitions keyed by
    /// observance key; at each step the variant's own declarations are
    /// applied last, so a child's declaration for a key replaces the
    /// inherited record entirely. A definition inherited untouched keeps its
    /// original `origin` provenance.
    ///
    /// # Errors
    /// [`Error::UnknownCalendar`] if `name` (or any parent reference) is not
    /// registered; [`Error::CyclicInheritance`] if the parent chain loops.
    pub fn flatten(&self, name: &str) -> Result<BTreeMap<Key, ObservanceDef>> {
        let mut chain: Vec<&CalendarDef> = Vec::new();
        let mut visited: HashSet<&str> = HashSet::new();
        let mut cursor = Some(name);
        while let Some(n) = cursor {
            let calendar = self
                .calendars
                .get(n)
                .ok_or_else(|| Error::UnknownCalendar { name: n.to_string() })?;
            if !visited.insert(n) {
                let mut walked: Vec<&str> =
                    chain.iter().map(|c| c.name()).collect();
                walked.push(n);
                return Err(Error::CyclicInheritance { chain: walked.join(" -> ") });
            }
            chain.push(calendar);
            cursor = calendar.parent();
        }

        let mut flat = BTreeMap::new();
        for calendar in chain.iter().rev() {
            for def in calendar.definitions() {
                flat.insert(def.key.clone(), def.clone());
            }
        }
        Ok(flat)
    }
}

/// The registry shipped with this library: the General Roman Calendar and
/// the particular calendars built on it.
pub fn default_registry() -> CalendarRegistry {
    let mut registry = CalendarRegistry::new();
    registry.register(general_roman());
    registry.register(particular::europe());
    registry.register(particular::americas());
    registry.register(particular::brazil());
    registry.register(particular::denmark());
    registry.register(particular::romania());
    registry.register(particular::sri_lanka());
    registry.register(particular::united_states());
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::DateSpec;
    use crate::precedence::Precedence;
    use ordo_time::Month;

    fn observance(key: &str, month: Month, day: u8) -> ObservanceDef {
        ObservanceDef::of_saints(key, Precedence::GeneralMemorial10, DateSpec::fixed(month, day))
    }

    #[test]
    fn child_replaces_whole_record() {
        let mut registry = CalendarRegistry::new();
        registry.register(CalendarDef::new(
            "root",
            None,
            vec![observance("shared", Month::May, 4)],
        ));
        let child_decl = ObservanceDef::of_saints(
            "shared",
            Precedence::ProperFeast8,
            DateSpec::fixed(Month::June, 10),
        )
        .martyrology(&[]);
        registry.register(CalendarDef::new("child", Some("root"), vec![child_decl]));

        let flat = registry.flatten("child").unwrap();
        let def = &flat["shared"];
        // Every field comes from the child declaration, never a merge.
        assert_eq!(def.precedence, Precedence::ProperFeast8);
        assert_eq!(def.date_spec, DateSpec::fixed(Month::June, 10));
        assert_eq!(def.origin, "child");
        assert!(def.martyrology.is_empty());
    }

    #[test]
    fn inherited_definitions_keep_provenance() {
        let mut registry = CalendarRegistry::new();
        registry.register(CalendarDef::new(
            "root",
            None,
            vec![observance("untouched", Month::May, 4)],
        ));
        registry.register(CalendarDef::new("child", Some("root"), vec![]));
        let flat = registry.flatten("child").unwrap();
        assert_eq!(flat["untouched"].origin, "root");
    }

    #[test]
    fn cycles_are_detected() {
        let mut registry = CalendarRegistry::new();
        registry.register(CalendarDef::new("a", Some("b"), vec![]));
        registry.register(CalendarDef::new("b", Some("a"), vec![]));
        let err = registry.flatten("a").unwrap_err();
        match err {
            Error::CyclicInheritance { chain } => assert_eq!(chain, "a -> b -> a"),
            other => panic!("expected CyclicInheritance, got {other:?}"),
        }
    }

    #[test]
    fn self_parent_is_a_cycle() {
        let mut registry = CalendarRegistry::new();
        registry.register(CalendarDef::new("loner", Some("loner"), vec![]));
        assert!(matches!(
            registry.flatten("loner"),
            Err(Error::CyclicInheritance { .. })
        ));
    }

    #[test]
    fn unknown_names_are_errors() {
        let registry = CalendarRegistry::new();
        assert!(matches!(
            registry.flatten("atlantis"),
            Err(Error::UnknownCalendar { .. })
        ));
        let mut registry = CalendarRegistry::new();
        registry.register(CalendarDef::new("orphan", Some("missing_parent"), vec![]));
        assert!(matches!(
            registry.flatten("orphan"),
            Err(Error::UnknownCalendar { name }) if name == "missing_parent"
        ));
    }

    #[test]
    fn default_registry_flattens_every_variant() {
        let registry = default_registry();
        for name in [
            GENERAL_ROMAN,
            "europe",
            "americas",
            "brazil",
            "denmark",
            "romania",
            "sri_lanka",
            "united_states",
        ] {
            let flat = registry.flatten(name).unwrap();
            assert!(!flat.is_empty(), "{name} flattened to nothing");
        }
    }
}
