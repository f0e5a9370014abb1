// src/links/validate.rs
// =============================================================================
// This module classifies a single candidate link.
//
// The validator is a total function: whatever garbage comes in (binary data,
// empty strings, exotic encodings), a ValidationResult comes out. Parse
// failures are folded into the `valid: false` shape rather than raised, so
// the batch pipeline never has to guard a call to it.
//
// Rust concepts:
// - Returning values instead of throwing: the "never fails" contract is
//   visible in the signature (no Result, no panic paths)
// - match on Result: converting parse errors into data
// =============================================================================

use serde::Serialize;
use url::Url;

use crate::hosts::HostRegistry;

// The classification of one candidate link
//
// Invariant: valid == false implies supported == false and host == "invalid".
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResult {
    /// The link exactly as it was given to us
    pub url: String,
    /// Lowercased hostname, or "invalid" when the link doesn't parse
    pub host: String,
    /// Whether the link parsed into a URL with a usable hostname
    pub valid: bool,
    /// Whether the hostname belongs to a supported provider
    pub supported: bool,
    /// Parse diagnostics, only present when valid == false
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

// Validates and classifies a download link
//
// Parameters:
//   link: the candidate link (any string at all)
//   registry: the supported-host registry
//
// Returns: ValidationResult - always, for any input
pub fn validate_link(link: &str, registry: &HostRegistry) -> ValidationResult {
    let parsed = match Url::parse(link) {
        Ok(url) => url,
        Err(e) => return ValidationResult::invalid(link, e.to_string()),
    };

    // Some schemes parse fine but carry no hostname (mailto:, data:).
    // Without a hostname there is nothing to classify, so treat those
    // the same as unparsable links.
    let hostname = match parsed.host_str() {
        Some(host) => host.to_lowercase(),
        None => return ValidationResult::invalid(link, "URL has no hostname".to_string()),
    };

    ValidationResult {
        url: link.to_string(),
        supported: registry.is_host_supported(&hostname),
        host: hostname,
        valid: true,
        error: None,
    }
}

impl ValidationResult {
    // Builds the rejection shape for anything we couldn't parse
    fn invalid(link: &str, error: String) -> Self {
        ValidationResult {
            url: link.to_string(),
            host: "invalid".to_string(),
            valid: false,
            supported: false,
            error: Some(error),
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why no Result return type?
//    - The contract is "any input classifies, nothing throws"
//    - Url::parse hands us a Result, and we fold its Err case into the
//      valid:false shape right here, so callers never see an error
//
// 2. Why the "invalid" host sentinel?
//    - Reports use the host as a display label, and unparsable links still
//      need one
// -----------------------------------------------------------------------------
