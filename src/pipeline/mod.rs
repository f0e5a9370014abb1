// src/pipeline/mod.rs
// =============================================================================
// This module runs batches of links through validation and resolution.
//
// Features:
// - Strictly sequential processing in input order (never concurrent)
// - Fixed pacing delay between links to stay polite to the service
// - Per-link fault isolation: one bad link never takes the batch down
// - Output is index-aligned with input: outcome[i] answers for link[i]
// =============================================================================

mod batch;

// Re-export the pipeline itself
pub use batch::Pipeline;
