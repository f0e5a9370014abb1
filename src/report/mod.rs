// src/report/mod.rs
// =============================================================================
// This module turns a batch of outcomes into something durable and readable.
//
// Submodules:
// - summary: Counts successes/failures and computes the success rate
// - persist: Writes the outcomes to {base}_results.json for later inspection
// =============================================================================

mod persist;
mod summary;

// Re-export public items from submodules
pub use persist::persist_results;
pub use summary::{summarize, Summary};
