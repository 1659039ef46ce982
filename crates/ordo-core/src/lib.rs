//! # ordo-core
//!
//! Core types and error definitions for the ordo workspace.
//!
//! This crate provides the foundational building blocks shared across all
//! other crates in the workspace – the error taxonomy, the `Result` alias,
//! and the `ensure!` / `fail!` convenience macros.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

// ── Shared aliases ────────────────────────────────────────────────────────────

/// Identifier of an observance, calendar, anchor, or catalog entry.
///
/// Keys are lower-snake-case strings (`"peter_and_paul_apostles"`); they are
/// globally unique within the flattened definition set of one calendar.
pub type Key = String;

pub use errors::{Error, Result};
