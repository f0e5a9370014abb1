// src/links/mod.rs
// =============================================================================
// This module handles everything about candidate links before they reach the
// unlocking service.
//
// Submodules:
// - extract: Finds supported-host URLs inside free text
// - validate: Classifies a single link (parseable? supported host?)
//
// This file (mod.rs) is the module root - it re-exports the public API so
// callers can write `links::extract_links()` instead of
// `links::extract::extract_links()`.
// =============================================================================

mod extract;
mod validate;

// Re-export public items from submodules
pub use extract::extract_links;
pub use validate::{validate_link, ValidationResult};
