// src/resolver/mod.rs
// =============================================================================
// This module talks to the external unlocking service (AllDebrid).
//
// The service is a black box to us - all that matters is its contract:
// POST {base}/link/unlock with apikey + link form fields, JSON back with a
// status, a data object on success, an error string otherwise.
//
// The one rule enforced here: nothing below this module ever sees a raw
// transport error. Every fault becomes a ResolutionOutcome.
// =============================================================================

mod client;

// Re-export public items from the client submodule
pub use client::{ResolverClient, ResolutionOutcome, UnlockPayload, DEFAULT_ENDPOINT};
