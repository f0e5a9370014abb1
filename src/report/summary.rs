// src/report/summary.rs
// =============================================================================
// This module computes batch statistics.
//
// Just counting - but the success rate needs care on an empty batch, where
// the naive division would be 0/0.
// =============================================================================

use serde::Serialize;

use crate::resolver::ResolutionOutcome;

// Aggregate view of a processed batch
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// How many links resolved to a direct URL
    pub success_count: usize,
    /// How many links failed (for any reason)
    pub failure_count: usize,
    /// success_count / total, as a percentage; 0.0 for an empty batch
    pub success_rate: f64,
}

// Summarizes a batch of outcomes
pub fn summarize(outcomes: &[ResolutionOutcome]) -> Summary {
    let success_count = outcomes.iter().filter(|o| o.success).count();
    let failure_count = outcomes.len() - success_count;

    let success_rate = if outcomes.is_empty() {
        0.0
    } else {
        success_count as f64 / outcomes.len() as f64 * 100.0
    };

    Summary {
        success_count,
        failure_count,
        success_rate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::UnlockPayload;

    fn success_outcome() -> ResolutionOutcome {
        ResolutionOutcome::success(
            "https://rapidgator.net/x",
            UnlockPayload {
                filename: "x.bin".to_string(),
                size: 10,
                link: "https://cdn/x".to_string(),
                extra: serde_json::Map::new(),
            },
        )
    }

    fn failure_outcome() -> ResolutionOutcome {
        ResolutionOutcome::failure("https://rapidgator.net/y", "dead link".to_string())
    }

    #[test]
    fn test_empty_batch_has_zero_rate() {
        let summary = summarize(&[]);
        assert_eq!(summary.success_count, 0);
        assert_eq!(summary.failure_count, 0);
        assert_eq!(summary.success_rate, 0.0);
    }

    #[test]
    fn test_three_successes_one_failure_is_75_percent() {
        let outcomes = vec![
            success_outcome(),
            success_outcome(),
            success_outcome(),
            failure_outcome(),
        ];
        let summary = summarize(&outcomes);
        assert_eq!(summary.success_count, 3);
        assert_eq!(summary.failure_count, 1);
        assert_eq!(summary.success_rate, 75.0);
    }

    #[test]
    fn test_all_failures_is_zero_percent() {
        let outcomes = vec![failure_outcome(), failure_outcome()];
        let summary = summarize(&outcomes);
        assert_eq!(summary.success_count, 0);
        assert_eq!(summary.failure_count, 2);
        assert_eq!(summary.success_rate, 0.0);
    }
}
