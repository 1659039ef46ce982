//! National calendar of Sri Lanka.
//!
//! Inherits the General Roman Calendar directly.

use crate::definition::{DateSpec, ObservanceDef, Title::*};
use crate::precedence::Precedence::*;
use crate::registry::{CalendarDef, GENERAL_ROMAN};
use ordo_time::Month::*;

/// Build the Sri Lankan calendar.
pub fn sri_lanka() -> CalendarDef {
    use ObservanceDef as O;
    CalendarDef::new(
        "sri_lanka",
        Some(GENERAL_ROMAN),
        vec![
            O::of_saints("joseph_vaz_priest", OptionalMemorial12, DateSpec::fixed(January, 16))
                .titles(&[Priest, Missionary]),
            O::of_saints("our_lady_of_lanka", ProperFeast8, DateSpec::fixed(February, 4))
                .martyrology(&[]),
            O::of_saints("our_lady_of_madhu", ProperFeast8, DateSpec::fixed(July, 2))
                .martyrology(&[]),
        ],
    )
}
