//! The moveable-feast anchor table.
//!
//! Every moveable observance in the liturgical year is anchored either to
//! Easter Sunday by a fixed day offset, or to a civil date by a bounded
//! weekday rule (e.g. the First Sunday of Advent is the Sunday on or after
//! November 27). [`MoveableDates::for_year`] resolves the whole table once
//! per `(year, config)` pair; results are memoized process-wide and shared
//! read-only.

use std::collections::BTreeMap;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

use serde::Serialize;

use crate::date::Date;
use crate::easter::easter_sunday;
use crate::weekday::Weekday;
use ordo_core::errors::Result;

/// Anchors offset from Easter Sunday by a fixed number of days.
///
/// Ascension and Corpus Christi are absent here: their offsets depend on the
/// transfer flags in [`MoveableFeastConfig`].
const EASTER_OFFSETS: &[(&str, i32)] = &[
    ("ash_wednesday", -46),
    ("palm_sunday_of_the_passion_of_the_lord", -7),
    ("thursday_of_the_lords_supper", -3),
    ("friday_of_the_passion_of_the_lord", -2),
    ("holy_saturday", -1),
    ("easter_sunday", 0),
    ("divine_mercy_sunday", 7),
    ("pentecost_sunday", 49),
    ("most_holy_trinity", 56),
    ("most_sacred_heart_of_jesus", 68),
    ("immaculate_heart_of_mary", 69),
];

/// Transfer flags for moveable solemnities.
///
/// Several regions celebrate Epiphany, the Ascension, and Corpus Christi on
/// the nearest Sunday instead of the traditional weekday. The flags are part
/// of the anchor-cache key, so each combination is computed at most once per
/// year and the table stays a pure function of its inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct MoveableFeastConfig {
    /// Celebrate Epiphany on the Sunday between January 2 and 8.
    pub epiphany_on_sunday: bool,
    /// Transfer the Ascension from Thursday to the following Sunday.
    pub ascension_on_sunday: bool,
    /// Transfer Corpus Christi from Thursday to the following Sunday.
    pub corpus_christi_on_sunday: bool,
}

/// The resolved moveable dates of one liturgical year.
///
/// Immutable once constructed; shared read-only by every calendar variant
/// resolved for the same year.
#[derive(Debug)]
pub struct MoveableDates {
    year: i32,
    config: MoveableFeastConfig,
    dates: BTreeMap<String, Date>,
}

impl MoveableDates {
    /// Resolve the anchor table for `year` with the default (no-transfer)
    /// configuration. Memoized.
    pub fn for_year(year: i32) -> Result<Arc<Self>> {
        Self::for_year_with(year, MoveableFeastConfig::default())
    }

    /// Resolve the anchor table for `year` under `config`. Memoized per
    /// `(year, config)`.
    pub fn for_year_with(year: i32, config: MoveableFeastConfig) -> Result<Arc<Self>> {
        static CACHE: OnceLock<Mutex<HashMap<(i32, MoveableFeastConfig), Arc<MoveableDates>>>> =
            OnceLock::new();
        let cache = CACHE.get_or_init(|| Mutex::new(HashMap::new()));
        let mut guard = cache.lock().expect("anchor cache mutex poisoned");
        if let Some(hit) = guard.get(&(year, config)) {
            return Ok(Arc::clone(hit));
        }
        let built = Arc::new(Self::compute(year, config)?);
        guard.insert((year, config), Arc::clone(&built));
        Ok(built)
    }

    fn compute(year: i32, config: MoveableFeastConfig) -> Result<Self> {
        let easter = easter_sunday(year)?;
        let mut dates = BTreeMap::new();

        for (name, offset) in EASTER_OFFSETS {
            dates.insert((*name).to_string(), easter.add_days(*offset)?);
        }

        let ascension_offset = if config.ascension_on_sunday { 42 } else { 39 };
        dates.insert("ascension_of_the_lord".into(), easter.add_days(ascension_offset)?);
        let corpus_offset = if config.corpus_christi_on_sunday { 63 } else { 60 };
        dates.insert("most_holy_body_and_blood_of_christ".into(), easter.add_days(corpus_offset)?);

        let nativity = Date::from_ymd(year, 12, 25)?;
        dates.insert("nativity_of_the_lord".into(), nativity);
        dates.insert("mary_mother_of_god".into(), Date::from_ymd(year, 1, 1)?);

        // First Sunday of Advent: the Sunday on or after November 27
        // (equivalently, the fourth Sunday before Christmas).
        let advent1 = Date::from_ymd(year, 11, 27)?.weekday_on_or_after(Weekday::Sunday)?;
        dates.insert("first_sunday_of_advent".into(), advent1);
        dates.insert("our_lord_jesus_christ_king_of_the_universe".into(), advent1.add_days(-7)?);

        // Holy Family: the Sunday within the Christmas octave, or December 30
        // when Christmas itself falls on a Sunday.
        let holy_family = if nativity.weekday() == Weekday::Sunday {
            Date::from_ymd(year, 12, 30)?
        } else {
            Date::from_ymd(year, 12, 26)?.weekday_on_or_after(Weekday::Sunday)?
        };
        dates.insert("holy_family_of_jesus_mary_and_joseph".into(), holy_family);

        let epiphany = if config.epiphany_on_sunday {
            Date::from_ymd(year, 1, 2)?.weekday_on_or_after(Weekday::Sunday)?
        } else {
            Date::from_ymd(year, 1, 6)?
        };
        dates.insert("epiphany_of_the_lord".into(), epiphany);

        // Baptism of the Lord: the Sunday after Epiphany. When a transferred
        // Epiphany lands on January 7 or 8 the next Sunday would fall outside
        // Christmas Time, so the Baptism moves to the following Monday.
        let baptism = if config.epiphany_on_sunday && epiphany.day() >= 7 {
            epiphany.add_days(1)?
        } else {
            epiphany.add_days(1)?.weekday_on_or_after(Weekday::Sunday)?
        };
        dates.insert("baptism_of_the_lord".into(), baptism);

        Ok(MoveableDates { year, config, dates })
    }

    /// The civil year this table was resolved for.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The transfer configuration this table was resolved under.
    pub fn config(&self) -> MoveableFeastConfig {
        self.config
    }

    /// Look up an anchor date by name. Returns `None` for unknown anchors.
    pub fn anchor(&self, name: &str) -> Option<Date> {
        self.dates.get(name).copied()
    }

    /// The date of Easter Sunday.
    pub fn easter(&self) -> Date {
        self.dates["easter_sunday"]
    }

    /// All anchor names, sorted. Useful in diagnostics.
    pub fn anchor_names(&self) -> impl Iterator<Item = &str> {
        self.dates.keys().map(String::as_str)
    }
}
