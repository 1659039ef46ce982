//! National calendar of the United States.
//!
//! Inherits the calendar of the Americas. Thanksgiving Day is the only rule
//! in the shipped data that uses an n-th-weekday placement.

use crate::definition::{DateSpec, ObservanceDef, Title::*};
use crate::precedence::Precedence::*;
use crate::registry::CalendarDef;
use ordo_time::Month::*;
use ordo_time::Weekday;

/// Build the United States calendar.
pub fn united_states() -> CalendarDef {
    use ObservanceDef as O;
    CalendarDef::new(
        "united_states",
        Some("americas"),
        vec![
            O::of_saints("elizabeth_ann_seton_religious", ProperMemorial11, DateSpec::fixed(January, 4))
                .titles(&[Religious]),
            O::of_saints("john_neumann_bishop", ProperMemorial11, DateSpec::fixed(January, 5))
                .titles(&[Bishop]),
            O::of_saints("katharine_drexel_virgin", OptionalMemorial12, DateSpec::fixed(March, 3))
                .titles(&[Virgin]),
            O::of_saints("damien_de_veuster_priest", OptionalMemorial12, DateSpec::fixed(May, 10))
                .titles(&[Priest, Missionary]),
            O::of_saints("kateri_tekakwitha_virgin", ProperMemorial11, DateSpec::fixed(July, 14))
                .titles(&[Virgin]),
            O::of_saints("peter_claver_priest", ProperMemorial11, DateSpec::fixed(September, 9))
                .titles(&[Priest, Missionary]),
            O::of_saints("frances_xavier_cabrini_virgin", ProperMemorial11, DateSpec::fixed(November, 13))
                .titles(&[Virgin, Missionary]),
            O::of_saints(
                "thanksgiving_day",
                OptionalMemorial12,
                DateSpec::nth_weekday(4, Weekday::Thursday, November),
            )
            .martyrology(&[]),
        ],
    )
}
