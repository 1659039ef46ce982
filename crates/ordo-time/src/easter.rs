//! Gregorian computus — the date of Easter Sunday.
//!
//! Uses the anonymous Gregorian algorithm (Oudin's formulation), a
//! deterministic function of the civil year with no external state, valid on
//! the full supported year range.

use crate::date::{Date, MAX_YEAR, MIN_YEAR};
use ordo_core::errors::{Error, Result};

/// Compute the date of Easter Sunday for `year`.
///
/// # Errors
/// Returns [`Error::InvalidYear`] if `year` lies outside the supported range.
///
/// # Example
/// ```
/// use ordo_time::easter_sunday;
/// let easter = easter_sunday(2024).unwrap();
/// assert_eq!((easter.month(), easter.day()), (3, 31));
/// ```
pub fn easter_sunday(year: i32) -> Result<Date> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(Error::InvalidYear { year, min: MIN_YEAR, max: MAX_YEAR });
    }
    let y = year;
    let g = y % 19;
    let c = y / 100;
    let h = (c - c / 4 - (8 * c + 13) / 25 + 19 * g + 15) % 30;
    let i = h - (h / 28) * (1 - (h / 28) * (29 / (h + 1)) * ((21 - g) / 11));
    let j = (y + y / 4 + i + 2 - c + c / 4) % 7;
    let p = i - j;
    let day = 1 + (p + 27 + (p + 6) / 40) % 31;
    let month = 3 + (p + 26) / 30;
    Date::from_ymd(year, month as u8, day as u8)
}
