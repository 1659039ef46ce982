//! Calendar proper to Europe.
//!
//! Upgrades the celebrations of the six co-patrons of Europe to proper
//! feasts; each entry replaces the General Calendar's record for the same
//! key wholesale.

use crate::definition::{Color, DateSpec, ObservanceDef, Title::*};
use crate::precedence::Precedence::*;
use crate::registry::{CalendarDef, GENERAL_ROMAN};
use ordo_time::Month::*;

/// Build the European calendar.
pub fn europe() -> CalendarDef {
    use ObservanceDef as O;
    CalendarDef::new(
        "europe",
        Some(GENERAL_ROMAN),
        vec![
            O::of_saints("cyril_the_monk_and_methodius_the_bishop", ProperFeast8, DateSpec::fixed(February, 14))
                .titles(&[Bishop, Missionary, PatronOfEurope]),
            O::of_saints("catherine_of_siena_virgin", ProperFeast8, DateSpec::fixed(April, 29))
                .titles(&[Virgin, DoctorOfTheChurch, PatronOfEurope]),
            O::of_saints("benedict_of_nursia_abbot", ProperFeast8, DateSpec::fixed(July, 11))
                .titles(&[Abbot, PatronOfEurope]),
            O::of_saints("bridget_of_sweden_religious", ProperFeast8, DateSpec::fixed(July, 23))
                .titles(&[Religious, PatronOfEurope]),
            O::of_saints("teresa_benedicta_of_the_cross_stein_virgin", ProperFeast8, DateSpec::fixed(August, 9))
                .color(Color::Red)
                .titles(&[Virgin, Martyr, PatronOfEurope]),
        ],
    )
}
