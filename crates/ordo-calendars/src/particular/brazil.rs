//! National calendar of Brazil.
//!
//! Inherits the calendar of the Americas. Our Lady of Aparecida, principal
//! patroness of Brazil, is a proper solemnity; Our Lady of Mount Carmel is
//! raised from an optional memorial to a proper feast.

use crate::definition::{Color, DateSpec, ObservanceDef, Title::*};
use crate::precedence::Precedence::*;
use crate::registry::CalendarDef;
use ordo_time::Month::*;

/// Build the Brazilian calendar.
pub fn brazil() -> CalendarDef {
    use ObservanceDef as O;
    CalendarDef::new(
        "brazil",
        Some("americas"),
        vec![
            O::of_saints("jose_de_anchieta_priest", ProperMemorial11, DateSpec::fixed(June, 9))
                .titles(&[Priest, Missionary]),
            O::of_saints("albertina_berkenbrock_virgin", ProperMemorial11, DateSpec::fixed(June, 15))
                .color(Color::Red)
                .titles(&[Virgin, Martyr]),
            O::of_saints("paulina_of_the_agonizing_heart_of_jesus_virgin", ProperMemorial11, DateSpec::fixed(July, 9))
                .titles(&[Virgin]),
            O::of_saints("our_lady_of_mount_carmel", ProperFeast8, DateSpec::fixed(July, 16))
                .martyrology(&[]),
            O::of_saints("inacio_de_azevedo_priest_and_companions_martyrs", ProperMemorial11, DateSpec::fixed(July, 17))
                .color(Color::Red)
                .titles(&[Priest, Martyr]),
            O::of_saints("rose_of_lima_virgin", ProperFeast8, DateSpec::fixed(August, 23))
                .titles(&[Virgin]),
            O::of_saints("andre_de_soveral_and_ambrosio_francisco_ferro_priests_martyrs", ProperMemorial11, DateSpec::fixed(October, 3))
                .color(Color::Red)
                .titles(&[Priest, Martyr]),
            O::of_saints("our_lady_of_aparecida", ProperSolemnity4, DateSpec::fixed(October, 12))
                .martyrology(&[]),
            O::of_saints("anthony_of_saint_anne_galvao_priest", ProperMemorial11, DateSpec::fixed(October, 25))
                .titles(&[Priest]),
            O::of_saints("roque_gonzalez_alfonso_rodriguez_and_juan_del_castillo_priests_martyrs", ProperMemorial11, DateSpec::fixed(November, 19))
                .color(Color::Red)
                .titles(&[Priest, Martyr]),
        ],
    )
}
