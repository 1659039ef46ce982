//! National calendar of Romania.
//!
//! Inherits the European calendar.

use crate::definition::{Color, DateSpec, ObservanceDef, Title::*};
use crate::precedence::Precedence::*;
use crate::registry::CalendarDef;
use ordo_time::Month::*;

/// Build the Romanian calendar.
pub fn romania() -> CalendarDef {
    use ObservanceDef as O;
    CalendarDef::new(
        "romania",
        Some("europe"),
        vec![
            O::of_saints("john_cassian_priest", ProperMemorial11, DateSpec::fixed(February, 28))
                .titles(&[Priest]),
            O::of_saints("vladimir_ghika_priest", OptionalMemorial12, DateSpec::fixed(May, 16))
                .color(Color::Red)
                .titles(&[Priest, Martyr]),
        ],
    )
}
