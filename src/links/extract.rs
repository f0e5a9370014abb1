// src/links/extract.rs
// =============================================================================
// This module extracts candidate download links from free text.
//
// How it works:
// 1. Scan the text with a regex for http/https tokens
// 2. Parse each token's hostname with the `url` crate
// 3. Keep only tokens whose hostname belongs to a supported provider
// 4. Deduplicate, preserving first-seen order
//
// Tokens that look like URLs but fail to parse are dropped silently - a
// malformed match in a text blob is noise, not an error.
//
// Rust concepts:
// - Regex captures: Finding patterns in text
// - HashSet: O(1) duplicate detection while keeping a Vec for order
// =============================================================================

use regex::Regex;
use std::collections::HashSet;
use url::Url;

use crate::hosts::HostRegistry;

// Matches an http/https scheme followed by a run of characters that can
// appear in a pasted URL. Whitespace, brackets, braces and quotes end the
// token - those are the characters that surround links in chat logs and
// forum posts.
const URL_PATTERN: &str = r#"https?://[^\s<>"'(){}\[\]]+"#;

// Extracts all supported-host URLs from a blob of text
//
// Parameters:
//   text: arbitrary text that may contain download links (borrowed as &str)
//   registry: the supported-host registry to filter against
//
// Returns: Vec<String> of distinct URLs, in first-seen order
//
// Example input:
//   "grab https://rapidgator.net/file/abc and https://example.com/x"
//
// Example output:
//   vec!["https://rapidgator.net/file/abc"]
pub fn extract_links(text: &str, registry: &HostRegistry) -> Vec<String> {
    // The pattern is a compile-time constant, so this parse cannot fail
    let pattern = Regex::new(URL_PATTERN).expect("URL pattern is valid");

    // Track what we've seen so the result has no duplicates.
    // The Vec keeps first-seen order for deterministic output.
    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for token in pattern.find_iter(text) {
        let candidate = token.as_str();

        // Pull out the hostname; malformed tokens are dropped silently
        let hostname = match Url::parse(candidate) {
            Ok(url) => match url.host_str() {
                Some(host) => host.to_lowercase(),
                None => continue,
            },
            Err(_) => continue,
        };

        // Only keep links the unlocking service can actually handle
        if !registry.is_host_supported(&hostname) {
            continue;
        }

        if seen.insert(candidate.to_string()) {
            links.push(candidate.to_string());
        }
    }

    links
}
