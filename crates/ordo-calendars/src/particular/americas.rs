//! Calendar proper to the Americas.
//!
//! Our Lady of Guadalupe, patroness of the Americas, is a proper feast for
//! the whole continent; national calendars inherit it from here.

use crate::definition::{DateSpec, ObservanceDef};
use crate::precedence::Precedence::*;
use crate::registry::{CalendarDef, GENERAL_ROMAN};
use ordo_time::Month::*;

/// Build the calendar of the Americas.
pub fn americas() -> CalendarDef {
    CalendarDef::new(
        "americas",
        Some(GENERAL_ROMAN),
        vec![
            ObservanceDef::of_saints("our_lady_of_guadalupe", ProperFeast8, DateSpec::fixed(December, 12))
                .martyrology(&[]),
        ],
    )
}
