//! The Table of Liturgical Days.
//!
//! Conflicts between observances falling on the same date are settled by a
//! fixed total order of categories (Universal Norms on the Liturgical Year
//! and the Calendar, n. 59). Each category additionally carries two flags
//! consulted by the resolution engine:
//!
//! * **exclusive** — a winner of this category suppresses every lower-ranked
//!   candidate outright;
//! * **optional-capable** — a loser of this category may survive as an
//!   optional alternative when nothing exclusive outranks it.
//!
//! The table is data: new particular-calendar categories can be slotted in
//! without touching the resolution algorithm.

use serde::Serialize;

/// Precedence category of an observance.
///
/// Variants are declared in rank order, highest precedence first, so the
/// derived `Ord` agrees with the table: a *smaller* value wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum Precedence {
    /// The Paschal Triduum and Easter Sunday (1).
    Triduum1 = 1,
    /// Nativity, Epiphany, Ascension, Pentecost; Sundays of Advent, Lent and
    /// Easter; Ash Wednesday; weekdays of Holy Week (2).
    ProperOfTimeSolemnity2 = 2,
    /// Solemnities of the General Calendar; All Souls (3).
    GeneralSolemnity3 = 3,
    /// Proper solemnities: principal patron, dedication anniversary (4).
    ProperSolemnity4 = 4,
    /// Feasts of the Lord in the General Calendar (5).
    GeneralLordFeast5 = 5,
    /// Sundays of Christmas Time and Ordinary Time (6).
    Sunday6 = 6,
    /// Feasts of the General Calendar (7).
    GeneralFeast7 = 7,
    /// Proper feasts of a region, nation, or diocese (8).
    ProperFeast8 = 8,
    /// Privileged weekdays: Advent Dec 17–24, the Christmas octave, and Lent
    /// weekdays (9).
    PrivilegedWeekday9 = 9,
    /// Obligatory memorials of the General Calendar (10).
    GeneralMemorial10 = 10,
    /// Proper obligatory memorials (11).
    ProperMemorial11 = 11,
    /// Optional memorials (12).
    OptionalMemorial12 = 12,
    /// Ordinary weekdays (13).
    Weekday13 = 13,
}

/// Coarse display tier of an observance, derived from its precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Rank {
    /// Solemnities and the Triduum.
    Solemnity,
    /// Feasts (of the Lord, general, or proper).
    Feast,
    /// Sundays celebrated as such.
    Sunday,
    /// Obligatory memorials.
    Memorial,
    /// Optional memorials.
    OptionalMemorial,
    /// Weekdays, privileged or ordinary.
    Weekday,
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Rank::Solemnity => "Solemnity",
            Rank::Feast => "Feast",
            Rank::Sunday => "Sunday",
            Rank::Memorial => "Memorial",
            Rank::OptionalMemorial => "Optional Memorial",
            Rank::Weekday => "Weekday",
        };
        write!(f, "{name}")
    }
}

/// One row of the Table of Liturgical Days.
#[derive(Debug, Clone, Copy)]
pub struct PrecedenceInfo {
    /// The category this row describes.
    pub precedence: Precedence,
    /// Position in the total order (1 = highest).
    pub rank: u8,
    /// A winner of this category suppresses all lower candidates.
    pub exclusive: bool,
    /// A loser of this category may be kept as an optional alternative.
    pub optional_capable: bool,
    /// Display tier.
    pub display_rank: Rank,
}

/// The Table of Liturgical Days, in rank order.
pub const PRECEDENCE_TABLE: [PrecedenceInfo; 13] = [
    PrecedenceInfo { precedence: Precedence::Triduum1, rank: 1, exclusive: true, optional_capable: false, display_rank: Rank::Solemnity },
    PrecedenceInfo { precedence: Precedence::ProperOfTimeSolemnity2, rank: 2, exclusive: true, optional_capable: false, display_rank: Rank::Solemnity },
    PrecedenceInfo { precedence: Precedence::GeneralSolemnity3, rank: 3, exclusive: true, optional_capable: false, display_rank: Rank::Solemnity },
    PrecedenceInfo { precedence: Precedence::ProperSolemnity4, rank: 4, exclusive: true, optional_capable: false, display_rank: Rank::Solemnity },
    PrecedenceInfo { precedence: Precedence::GeneralLordFeast5, rank: 5, exclusive: true, optional_capable: false, display_rank: Rank::Feast },
    PrecedenceInfo { precedence: Precedence::Sunday6, rank: 6, exclusive: true, optional_capable: false, display_rank: Rank::Sunday },
    PrecedenceInfo { precedence: Precedence::GeneralFeast7, rank: 7, exclusive: true, optional_capable: false, display_rank: Rank::Feast },
    PrecedenceInfo { precedence: Precedence::ProperFeast8, rank: 8, exclusive: true, optional_capable: false, display_rank: Rank::Feast },
    PrecedenceInfo { precedence: Precedence::PrivilegedWeekday9, rank: 9, exclusive: false, optional_capable: false, display_rank: Rank::Weekday },
    PrecedenceInfo { precedence: Precedence::GeneralMemorial10, rank: 10, exclusive: false, optional_capable: true, display_rank: Rank::Memorial },
    PrecedenceInfo { precedence: Precedence::ProperMemorial11, rank: 11, exclusive: false, optional_capable: true, display_rank: Rank::Memorial },
    PrecedenceInfo { precedence: Precedence::OptionalMemorial12, rank: 12, exclusive: false, optional_capable: true, display_rank: Rank::OptionalMemorial },
    PrecedenceInfo { precedence: Precedence::Weekday13, rank: 13, exclusive: false, optional_capable: false, display_rank: Rank::Weekday },
];

impl Precedence {
    /// The table row for this category.
    pub fn info(self) -> &'static PrecedenceInfo {
        &PRECEDENCE_TABLE[self as usize - 1]
    }

    /// Position in the total order (1 = highest precedence).
    pub fn rank(self) -> u8 {
        self.info().rank
    }

    /// Whether a winner of this category suppresses all lower candidates.
    pub fn is_exclusive(self) -> bool {
        self.info().exclusive
    }

    /// Whether a loser of this category may be kept as an alternative.
    pub fn is_optional_capable(self) -> bool {
        self.info().optional_capable
    }

    /// Display tier.
    pub fn display_rank(self) -> Rank {
        self.info().display_rank
    }
}
