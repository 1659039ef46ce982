//! # ordo-bundle
//!
//! The bundling collaborator: combines a flattened calendar, the martyrology
//! entries it actually references, and display names merged over an English
//! fallback into one distributable, serializable artifact.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Bundle` and its builder.
pub mod bundle;

/// Display-name resolution with English fallback.
pub mod locale;

/// The martyrology catalog (an opaque keyed lookup).
pub mod martyrology;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use bundle::{Bundle, BundleBuilder};
pub use locale::{resolve_display_names, Locale};
pub use martyrology::{subset, CanonizationLevel, MartyrologyCatalog, MartyrologyEntry};
