//! National calendar of Denmark.
//!
//! Inherits the European calendar. The feast of Our Lord Jesus Christ the
//! Eternal High Priest is moveable — the Thursday after Pentecost — and its
//! readings come from the Proper of Time.

use crate::definition::{Color, DateSpec, ObservanceDef, Title::*};
use crate::precedence::Precedence::*;
use crate::registry::CalendarDef;
use ordo_time::Month::*;

/// Build the Danish calendar.
pub fn denmark() -> CalendarDef {
    use ObservanceDef as O;
    CalendarDef::new(
        "denmark",
        Some("europe"),
        vec![
            O::of_time(
                "our_lord_jesus_christ_the_eternal_high_priest",
                ProperFeast8,
                DateSpec::moveable("pentecost_sunday", 4),
            ),
            O::of_saints("canute_iv_of_denmark_martyr", ProperMemorial11, DateSpec::fixed(January, 19))
                .color(Color::Red)
                .titles(&[Martyr]),
            O::of_saints("ansgar_of_hamburg_bishop", ProperMemorial11, DateSpec::fixed(February, 3))
                .titles(&[Bishop, Missionary]),
        ],
    )
}
