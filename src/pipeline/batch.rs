// src/pipeline/batch.rs
// =============================================================================
// This module implements the sequential batch pipeline.
//
// Per-link flow:
// 1. Validate (parse + classify against the host registry)
// 2. Reject early when invalid, unsupported, or no API key is configured -
//    those links never generate a network call
// 3. Otherwise hand the link to the resolver client
// 4. Sleep the pacing interval before the next link (never after the last)
//
// Fault isolation: each link is processed behind its own error boundary.
// An unexpected error from one link becomes that link's failure outcome and
// the loop moves on - every input link gets exactly one outcome, always.
//
// Sequential on purpose: the unlocking service expects polite, paced
// traffic, and one-at-a-time processing keeps failure isolation trivial.
//
// Rust concepts:
// - async fn in a struct impl: the pipeline owns its collaborators
// - tokio::time::sleep: async pacing delay (doesn't block the thread)
// =============================================================================

use anyhow::Result;
use std::time::Duration;

use crate::hosts::HostRegistry;
use crate::links::{validate_link, ValidationResult};
use crate::resolver::{ResolutionOutcome, ResolverClient};

// How long to wait between links. One second keeps us well inside the
// service's fair-use expectations.
const DEFAULT_PACING: Duration = Duration::from_secs(1);

// The batch pipeline
//
// Owns the resolver client (and through it the API key) and the host
// registry. Nothing here reads global state, so multiple pipelines with
// different credentials can coexist.
pub struct Pipeline {
    resolver: ResolverClient,
    registry: HostRegistry,
    pacing: Duration,
}

impl Pipeline {
    // Creates a pipeline with the standard one-second pacing
    pub fn new(resolver: ResolverClient, registry: HostRegistry) -> Self {
        Self::with_pacing(resolver, registry, DEFAULT_PACING)
    }

    // Creates a pipeline with a custom pacing interval (tests use zero)
    pub fn with_pacing(resolver: ResolverClient, registry: HostRegistry, pacing: Duration) -> Self {
        Pipeline {
            resolver,
            registry,
            pacing,
        }
    }

    // Processes a batch of links, one at a time, in order
    //
    // Returns one ResolutionOutcome per input link, index-aligned: the
    // outcome at position i describes the link at position i. The batch
    // always runs to completion - failures are recorded, never propagated.
    pub async fn process_batch(&self, links: &[String]) -> Vec<ResolutionOutcome> {
        let mut results = Vec::with_capacity(links.len());

        for (index, link) in links.iter().enumerate() {
            println!("📎 [{}/{}] {}", index + 1, links.len(), link);

            // Links that don't even parse are rejected on the spot, with
            // no pacing charged - the delay only separates attempts that
            // can reach the service
            let validation = validate_link(link, &self.registry);
            if !validation.valid {
                let outcome =
                    ResolutionOutcome::failure(link, "Invalid link format".to_string());
                print_progress(&outcome);
                results.push(outcome);
                continue;
            }

            // The per-link boundary: anything unexpected becomes this
            // link's failure outcome so the rest of the batch still runs
            let outcome = match self.attempt(link, validation).await {
                Ok(outcome) => outcome,
                Err(e) => ResolutionOutcome::failure(link, e.to_string()),
            };

            print_progress(&outcome);
            results.push(outcome);

            // Pacing between links - no delay after the last one
            if index + 1 < links.len() {
                tokio::time::sleep(self.pacing).await;
            }
        }

        results
    }

    // Runs one already-validated link through reject-or-resolve
    //
    // The Result is the fault boundary process_batch catches; the happy
    // paths all come back as Ok(outcome), including every rejection.
    async fn attempt(
        &self,
        link: &str,
        validation: ValidationResult,
    ) -> Result<ResolutionOutcome> {
        // Without an API key every attempt fails the same way, and we skip
        // the host check so the reason reported is the one that matters
        if !self.resolver.has_credential() {
            return Ok(ResolutionOutcome::failure_with_host(
                link,
                "No AllDebrid API key".to_string(),
                validation.host,
            ));
        }

        if !validation.supported {
            return Ok(ResolutionOutcome::failure_with_host(
                link,
                "Unsupported host".to_string(),
                validation.host,
            ));
        }

        Ok(self.resolver.resolve(link).await)
    }
}

// Prints the one-line result marker under the progress line
fn print_progress(outcome: &ResolutionOutcome) {
    if outcome.success {
        if let Some(data) = &outcome.data {
            println!("   ✅ {} ({:.1} MB)", data.filename, data.size_mb());
        }
    } else {
        let error = outcome.error.as_deref().unwrap_or("Unknown error");
        if outcome.host.is_some() {
            // Rejected before the service was ever contacted
            println!("   ⚠️  {}", error);
        } else {
            println!("   ❌ {}", error);
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why sequential instead of buffer_unordered / join_all?
//    - The service rate-limits aggressively; one paced request at a time
//      is the polite (and reliable) way to talk to it
//    - Sequential also means outcome order trivially matches input order
//
// 2. Why does attempt() return Result when it never errors today?
//    - It is the per-link fault boundary: if a fallible step gets added
//      later, process_batch already downgrades the error to that link's
//      failure outcome instead of killing the batch
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn keyless_pipeline(endpoint: String) -> Pipeline {
        Pipeline::with_pacing(
            ResolverClient::with_endpoint(None, endpoint),
            HostRegistry::new(),
            Duration::ZERO,
        )
    }

    #[tokio::test]
    async fn test_empty_batch_yields_empty_results() {
        let server = MockServer::start().await;
        let pipeline = keyless_pipeline(server.uri());
        let results = pipeline.process_batch(&[]).await;
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_order_preserved_across_mixed_batch() {
        let server = MockServer::start().await;
        let pipeline = keyless_pipeline(server.uri());

        let links = vec![
            "not a url at all".to_string(),
            "https://example.com/file".to_string(),
            "https://rapidgator.net/file/abc".to_string(),
        ];
        let results = pipeline.process_batch(&links).await;

        assert_eq!(results.len(), 3);
        for (link, outcome) in links.iter().zip(&results) {
            assert_eq!(&outcome.original_link, link);
            assert!(!outcome.success);
        }

        // The invalid link is rejected for its format, the parseable ones
        // for the missing key (which outranks the host check)
        assert_eq!(results[0].error.as_deref(), Some("Invalid link format"));
        assert!(results[1].error.as_deref().unwrap().contains("API key"));
        assert!(results[2].error.as_deref().unwrap().contains("API key"));
    }

    #[tokio::test]
    async fn test_no_credential_makes_zero_network_calls() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let pipeline = keyless_pipeline(server.uri());
        let links = vec!["https://rapidgator.net/file/abc".to_string()];
        let results = pipeline.process_batch(&links).await;

        assert_eq!(results.len(), 1);
        assert!(!results[0].success);
        assert!(results[0].error.as_deref().unwrap().contains("API key"));
    }

    #[tokio::test]
    async fn test_unsupported_host_skips_the_service() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let pipeline = Pipeline::with_pacing(
            ResolverClient::with_endpoint(Some("secret".to_string()), server.uri()),
            HostRegistry::new(),
            Duration::ZERO,
        );
        let links = vec!["https://example.com/file".to_string()];
        let results = pipeline.process_batch(&links).await;

        assert_eq!(results[0].error.as_deref(), Some("Unsupported host"));
        assert_eq!(results[0].host.as_deref(), Some("example.com"));
    }

    #[tokio::test]
    async fn test_one_faulty_link_does_not_abort_the_batch() {
        let server = MockServer::start().await;

        // Links one and three unlock fine; link two gets a response the
        // client can't decode. Form-encoding turns '/' into %2F, hence the
        // escaped body matchers.
        Mock::given(method("POST"))
            .and(path("/link/unlock"))
            .and(body_string_contains("file%2Fone"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "success",
                "data": {"filename": "one.bin", "size": 1024, "link": "https://cdn/one"}
            })))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/link/unlock"))
            .and(body_string_contains("file%2Ftwo"))
            .respond_with(ResponseTemplate::new(500).set_body_string("internal meltdown"))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/link/unlock"))
            .and(body_string_contains("file%2Fthree"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "success",
                "data": {"filename": "three.bin", "size": 2048, "link": "https://cdn/three"}
            })))
            .mount(&server)
            .await;

        let pipeline = Pipeline::with_pacing(
            ResolverClient::with_endpoint(Some("secret".to_string()), server.uri()),
            HostRegistry::new(),
            Duration::ZERO,
        );
        let links = vec![
            "https://rapidgator.net/file/one".to_string(),
            "https://rapidgator.net/file/two".to_string(),
            "https://rapidgator.net/file/three".to_string(),
        ];
        let results = pipeline.process_batch(&links).await;

        assert_eq!(results.len(), 3);
        assert!(results[0].success);
        assert!(!results[1].success);
        assert!(results[1].error.is_some());
        assert!(results[2].success);
        assert_eq!(results[2].data.as_ref().unwrap().filename, "three.bin");
    }

    #[tokio::test]
    async fn test_pacing_waits_between_links_but_not_after_the_last() {
        let server = MockServer::start().await;
        let pipeline = Pipeline::with_pacing(
            ResolverClient::with_endpoint(None, server.uri()),
            HostRegistry::new(),
            Duration::from_millis(50),
        );

        // Three links -> exactly two pacing delays
        let links = vec![
            "https://rapidgator.net/a".to_string(),
            "https://rapidgator.net/b".to_string(),
            "https://rapidgator.net/c".to_string(),
        ];
        let start = std::time::Instant::now();
        pipeline.process_batch(&links).await;
        assert!(start.elapsed() >= Duration::from_millis(100));
    }

    #[tokio::test]
    async fn test_invalid_links_are_not_paced() {
        let server = MockServer::start().await;
        let pipeline = Pipeline::with_pacing(
            ResolverClient::with_endpoint(None, server.uri()),
            HostRegistry::new(),
            Duration::from_millis(200),
        );

        // Format rejections never reach the pacing delay
        let links = vec!["nope".to_string(), "also nope".to_string()];
        let start = std::time::Instant::now();
        let results = pipeline.process_batch(&links).await;
        assert!(start.elapsed() < Duration::from_millis(150));
        assert_eq!(results.len(), 2);
    }
}
