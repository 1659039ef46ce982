//! Error types for the ordo workspace.
//!
//! A single `thiserror`-derived enum covers every failure the library can
//! report. Configuration defects in calendar rule data (cyclic inheritance,
//! unknown anchors) are fatal for the call that hits them; authoring
//! conflicts detected during precedence resolution are *not* errors — they
//! are attached to the affected day as warnings.

use thiserror::Error;

/// The top-level error type used throughout the ordo workspace.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// General runtime error.
    #[error("{0}")]
    Runtime(String),

    /// Date-related error (invalid components, arithmetic out of range).
    #[error("date error: {0}")]
    Date(String),

    /// The requested year is outside the range on which the Gregorian
    /// computus is valid.
    #[error("year {year} out of supported range [{min}, {max}]")]
    InvalidYear {
        /// The rejected year.
        year: i32,
        /// First supported year.
        min: i32,
        /// Last supported year.
        max: i32,
    },

    /// A calendar's parent chain loops back on itself. This is a defect in
    /// the rule data and is never retried.
    #[error("cyclic calendar inheritance: {chain}")]
    CyclicInheritance {
        /// The walked chain, rendered as `a -> b -> a`.
        chain: String,
    },

    /// A calendar name (or a parent reference) is absent from the registry.
    #[error("unknown calendar: {name}")]
    UnknownCalendar {
        /// The name that failed to resolve.
        name: String,
    },

    /// An observance references a moveable anchor that does not exist in the
    /// anchor table. Fails the whole year resolution.
    #[error("observance '{observance}' references unknown anchor '{anchor}'")]
    UnknownAnchor {
        /// Key of the offending observance definition.
        observance: String,
        /// The anchor name that failed to resolve.
        anchor: String,
    },

    /// Neither the requested locale nor the English fallback carries a
    /// display name for an observance key.
    #[error("missing translation for '{key}' in locale '{locale}' (no English fallback)")]
    MissingTranslation {
        /// The observance key without a display name.
        key: String,
        /// The locale that was asked for it.
        locale: String,
    },
}

/// Shorthand `Result` type used throughout the ordo workspace.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Runtime(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use ordo_core::ensure;
/// fn checked(n: u8) -> ordo_core::Result<u8> {
///     ensure!(n <= 31, "day {n} out of range");
///     Ok(n)
/// }
/// assert!(checked(15).is_ok());
/// assert!(checked(40).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Runtime(format!($($msg)*)));
        }
    };
}

/// Return `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use ordo_core::fail;
/// fn always_err() -> ordo_core::Result<()> {
///     fail!("unreachable configuration");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
