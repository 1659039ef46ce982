//! `Date` — a proleptic Gregorian civil date as a serial number.
//!
//! Dates are stored as a count of days since an epoch chosen to cover exactly
//! the interval on which the Gregorian computus is valid.
//!
//! # Serial number convention
//! * Serial 1 = January 1, 1583 (the first full year of the Gregorian
//!   calendar).
//! * The valid range is 1583-01-01 through 4099-12-31.
//! * Serial 0 is never a valid date.

use crate::weekday::Weekday;
use ordo_core::errors::{Error, Result};
use serde::{Serialize, Serializer};

/// First year for which dates (and the computus) are supported.
pub const MIN_YEAR: i32 = 1583;

/// Last year for which dates (and the computus) are supported.
pub const MAX_YEAR: i32 = 4099;

/// A civil date represented as a serial number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

impl Date {
    /// Minimum valid date: January 1, 1583.
    pub const MIN: Date = Date(1);

    /// Maximum valid date: December 31, 4099.
    pub const MAX: Date = Date(919_316);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number.
    pub fn from_serial(serial: i32) -> Result<Self> {
        if serial < Self::MIN.0 || serial > Self::MAX.0 {
            return Err(Error::Date(format!("serial {serial} out of range")));
        }
        Ok(Date(serial))
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(Error::InvalidYear { year, min: MIN_YEAR, max: MAX_YEAR });
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year (1583–4099).
    pub fn year(&self) -> i32 {
        ymd_from_serial(self.0).0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the day of the month (1–31).
    pub fn day(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        let (y, m, d) = ymd_from_serial(self.0);
        let mut doy = d as u16;
        for mon in 1..m {
            doy += days_in_month(y, mon) as u16;
        }
        doy
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // January 1, 1583 (serial 1) was a Saturday.
        let w = ((self.0 + 4).rem_euclid(7) + 1) as u8;
        Weekday::from_ordinal(w).expect("rem_euclid always in 1..=7")
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days (negative `n` goes backward).
    pub fn add_days(self, n: i32) -> Result<Self> {
        Date::from_serial(self.0 + n)
    }

    /// Return the number of calendar days from `self` to `other`.
    /// Positive if `other > self`.
    pub fn days_until(self, other: Date) -> i32 {
        other.0 - self.0
    }

    // ── Weekday searches ──────────────────────────────────────────────────────

    /// Return the first date on or after `self` that falls on `weekday`.
    ///
    /// The scan is bounded: it advances at most 6 days.
    pub fn weekday_on_or_after(self, weekday: Weekday) -> Result<Self> {
        let skip = (weekday.ordinal() as i32 - self.weekday().ordinal() as i32).rem_euclid(7);
        self.add_days(skip)
    }

    /// Return the last date on or before `self` that falls on `weekday`.
    pub fn weekday_on_or_before(self, weekday: Weekday) -> Result<Self> {
        let skip = (self.weekday().ordinal() as i32 - weekday.ordinal() as i32).rem_euclid(7);
        self.add_days(-skip)
    }

    /// Return the *n*-th occurrence of `weekday` in the given month.
    ///
    /// For example, `nth_weekday(4, Weekday::Thursday, 2024, 11)` returns the
    /// fourth Thursday of November 2024.
    ///
    /// # Errors
    /// Returns an error if `n` is zero or if the month has no such occurrence.
    pub fn nth_weekday(n: u8, weekday: Weekday, year: i32, month: u8) -> Result<Self> {
        if n == 0 {
            return Err(Error::Date("nth_weekday: n must be >= 1".into()));
        }
        let first = Date::from_ymd(year, month, 1)?;
        let first_wd = first.weekday().ordinal();
        let target_wd = weekday.ordinal();
        let skip = ((target_wd as i32 - first_wd as i32).rem_euclid(7)) as u8;
        let day = 1 + skip + 7 * (n - 1);
        if day > days_in_month(year, month) {
            return Err(Error::Date(format!(
                "nth_weekday: {n}-th {weekday} does not exist in {year}-{month:02}"
            )));
        }
        Date::from_ymd(year, month, day)
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition out of range")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction out of range")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

// ── Display / serialization ───────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "Date({y:04}-{m:02}-{d:02})")
    }
}

impl Serialize for Date {
    /// Dates serialize as ISO-8601 strings (`"2024-03-31"`).
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year under the Gregorian rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!(),
    }
}

/// Leap years in the interval [1583, year).
fn leap_years_before(year: i32) -> i32 {
    let g = |n: i32| n / 4 - n / 100 + n / 400;
    g(year - 1) - g(MIN_YEAR - 1)
}

/// Convert (year, month, day) to a serial number. Serial 1 = 1583-01-01.
fn serial_from_ymd(year: i32, month: u8, day: u8) -> i32 {
    let mut serial = (year - MIN_YEAR) * 365 + leap_years_before(year);
    serial += MONTH_OFFSET[month as usize - 1] as i32;
    if month > 2 && is_leap_year(year) {
        serial += 1;
    }
    serial + day as i32
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (i32, u8, u8) {
    let mut y = serial / 366 + MIN_YEAR;
    while serial >= serial_from_ymd(y + 1, 1, 1) {
        y += 1;
    }
    let doy = serial - serial_from_ymd(y, 1, 1) + 1;
    let mut m = 1u8;
    let mut remaining = doy;
    loop {
        let days = days_in_month(y, m) as i32;
        if remaining <= days {
            break;
        }
        remaining -= days;
        m += 1;
    }
    (y, m, remaining as u8)
}

/// Cumulative day-of-year offset at the start of each month (non-leap).
const MONTH_OFFSET: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch() {
        let d = Date::from_ymd(1583, 1, 1).unwrap();
        assert_eq!(d.serial(), 1);
        assert_eq!(d, Date::MIN);
    }

    #[test]
    fn max_date() {
        let d = Date::from_ymd(4099, 12, 31).unwrap();
        assert_eq!(d, Date::MAX);
        assert!(Date::from_serial(Date::MAX.serial() + 1).is_err());
    }

    #[test]
    fn roundtrip() {
        let dates = [
            (1583, 1, 1),
            (1600, 2, 29), // leap century
            (1700, 2, 28), // non-leap century
            (2000, 1, 1),
            (2024, 6, 15),
            (4099, 12, 31),
        ];
        for (y, m, d) in dates {
            let date = Date::from_ymd(y, m, d).unwrap();
            assert_eq!(date.year(), y, "year mismatch for {y}-{m:02}-{d:02}");
            assert_eq!(date.month(), m, "month mismatch for {y}-{m:02}-{d:02}");
            assert_eq!(date.day(), d, "day mismatch for {y}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn out_of_range_year() {
        assert!(matches!(
            Date::from_ymd(1582, 10, 4),
            Err(Error::InvalidYear { year: 1582, .. })
        ));
        assert!(matches!(
            Date::from_ymd(4100, 1, 1),
            Err(Error::InvalidYear { year: 4100, .. })
        ));
    }

    #[test]
    fn weekdays() {
        // 1583-01-01 was a Saturday; 2024-01-01 a Monday.
        assert_eq!(Date::from_ymd(1583, 1, 1).unwrap().weekday(), Weekday::Saturday);
        assert_eq!(Date::from_ymd(2024, 1, 1).unwrap().weekday(), Weekday::Monday);
        assert_eq!(Date::from_ymd(2024, 3, 31).unwrap().weekday(), Weekday::Sunday);
    }

    #[test]
    fn weekday_on_or_after_is_bounded() {
        let d = Date::from_ymd(2024, 11, 27).unwrap(); // a Wednesday
        let sunday = d.weekday_on_or_after(Weekday::Sunday).unwrap();
        assert_eq!(sunday, Date::from_ymd(2024, 12, 1).unwrap());
        assert!(sunday - d < 7);
        // A date already on the target weekday maps to itself.
        assert_eq!(sunday.weekday_on_or_after(Weekday::Sunday).unwrap(), sunday);
    }

    #[test]
    fn weekday_on_or_before() {
        let d = Date::from_ymd(2024, 12, 3).unwrap(); // a Tuesday
        let sunday = d.weekday_on_or_before(Weekday::Sunday).unwrap();
        assert_eq!(sunday, Date::from_ymd(2024, 12, 1).unwrap());
    }

    #[test]
    fn nth_weekday() {
        // Fourth Thursday of November 2024 = November 28.
        let d = Date::nth_weekday(4, Weekday::Thursday, 2024, 11).unwrap();
        assert_eq!(d, Date::from_ymd(2024, 11, 28).unwrap());
        // There is no fifth Wednesday in February 2024.
        assert!(Date::nth_weekday(5, Weekday::Wednesday, 2024, 2).is_err());
        assert!(Date::nth_weekday(0, Weekday::Monday, 2024, 1).is_err());
    }

    #[test]
    fn arithmetic() {
        let d = Date::from_ymd(2023, 12, 25).unwrap();
        assert_eq!(d + 7, Date::from_ymd(2024, 1, 1).unwrap());
        assert_eq!(Date::from_ymd(2024, 1, 1).unwrap() - d, 7);
    }

    #[test]
    fn day_of_year() {
        assert_eq!(Date::from_ymd(2024, 1, 1).unwrap().day_of_year(), 1);
        assert_eq!(Date::from_ymd(2024, 12, 31).unwrap().day_of_year(), 366);
        assert_eq!(Date::from_ymd(2023, 12, 31).unwrap().day_of_year(), 365);
    }

    #[test]
    fn display_is_iso() {
        let d = Date::from_ymd(2024, 3, 31).unwrap();
        assert_eq!(d.to_string(), "2024-03-31");
    }
}
