// src/resolver/client.rs
// =============================================================================
// This module resolves one locked link at a time against the AllDebrid API.
//
// Key functionality:
// - Makes a single POST to {base}/link/unlock per resolve call
// - Bounded 30 second timeout per request
// - Maps every possible outcome (service success, service error, timeout,
//   connection failure, undecodable response) to a ResolutionOutcome value
//
// There are no retries here. If the caller wants pacing or backoff, that is
// the batch pipeline's business, not the client's.
//
// Rust concepts:
// - async/await: For the network call
// - Converting errors to values: resolve() cannot fail, it only describes
// - serde flatten: Passing provider-specific response fields through opaquely
// =============================================================================

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

// Where the unlocking service lives unless the caller overrides it
pub const DEFAULT_ENDPOINT: &str = "https://api.alldebrid.com/v4";

// Per-request timeout. The service can be slow on exotic hosts; anything
// past this is treated as a failed resolution.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// The file details the service hands back for a successfully unlocked link
//
// filename/size/link are the fields every provider returns; everything else
// the provider sends is kept in `extra` and passed through untouched, so
// provider-specific data survives into the persisted results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnlockPayload {
    /// Name of the file behind the link
    #[serde(default)]
    pub filename: String,
    /// File size in bytes
    #[serde(default)]
    pub size: u64,
    /// The direct, downloadable URL
    #[serde(default)]
    pub link: String,
    /// Any other fields the provider returned
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl UnlockPayload {
    /// File size in megabytes, for display
    pub fn size_mb(&self) -> f64 {
        self.size as f64 / (1024.0 * 1024.0)
    }
}

// The terminal record of one resolution attempt
//
// Exactly one of `data` (success) or `error` (failure) is populated - the
// constructors below are the only way these get built, which keeps that
// invariant airtight. Field names match the persisted JSON format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolutionOutcome {
    /// The link we were asked to resolve, untouched
    pub original_link: String,
    /// Did the service hand us a direct link?
    pub success: bool,
    /// File details, present iff success == true
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<UnlockPayload>,
    /// What went wrong, present iff success == false
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Hostname of the link, when a rejection happened after classification
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
}

impl ResolutionOutcome {
    /// Builds a success outcome carrying the unlocked file details
    pub fn success(link: &str, payload: UnlockPayload) -> Self {
        ResolutionOutcome {
            original_link: link.to_string(),
            success: true,
            data: Some(payload),
            error: None,
            host: None,
        }
    }

    /// Builds a failure outcome carrying the reason
    pub fn failure(link: &str, error: String) -> Self {
        ResolutionOutcome {
            original_link: link.to_string(),
            success: false,
            data: None,
            error: Some(error),
            host: None,
        }
    }

    /// Builds a failure outcome that also records the link's hostname
    /// (used for rejections that happen after classification)
    pub fn failure_with_host(link: &str, error: String, host: String) -> Self {
        ResolutionOutcome {
            host: Some(host),
            ..Self::failure(link, error)
        }
    }
}

// The service's response envelope for /link/unlock
//
// status is "success" or some error status; data rides along on success,
// error on failure. We don't model error codes - the error string is all
// the user sees.
#[derive(Debug, Deserialize)]
struct UnlockResponse {
    status: String,
    #[serde(default)]
    data: Option<UnlockPayload>,
    #[serde(default)]
    error: Option<String>,
}

// Client for the unlocking service
//
// Holds the credential explicitly - there is no ambient/global key, so two
// clients with different keys can coexist (and tests can build keyless ones).
#[derive(Debug, Clone)]
pub struct ResolverClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl ResolverClient {
    // Creates a client for the given endpoint (the CLI passes the real
    // AllDebrid base URL by default; tests point this at a local mock
    // server). api_key is optional: without one, every resolve() call
    // fails fast without touching the network.
    pub fn with_endpoint(api_key: Option<String>, base_url: String) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        ResolverClient {
            client,
            base_url,
            api_key,
        }
    }

    /// Whether an API key was configured
    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    /// The service endpoint this client talks to
    pub fn endpoint(&self) -> &str {
        &self.base_url
    }

    // Attempts to unlock one link
    //
    // This function never fails in the Result sense - whatever happens on
    // the wire, the caller gets a ResolutionOutcome describing it:
    // - No API key configured -> immediate failure, zero network calls
    // - Transport fault (timeout, refused, bad TLS) -> failure with the
    //   error text
    // - Response that isn't the expected JSON -> failure with the decode
    //   error text
    // - status != "success" -> failure with the service's error string
    // - status == "success" -> success with the file payload
    pub async fn resolve(&self, link: &str) -> ResolutionOutcome {
        let api_key = match &self.api_key {
            Some(key) => key,
            None => {
                return ResolutionOutcome::failure(
                    link,
                    "No AllDebrid API key provided".to_string(),
                )
            }
        };

        let url = format!("{}/link/unlock", self.base_url);
        let params = [("apikey", api_key.as_str()), ("link", link)];

        // One request, one outcome. Any transport error stops here.
        let response = match self.client.post(&url).form(&params).send().await {
            Ok(response) => response,
            Err(e) => return ResolutionOutcome::failure(link, e.to_string()),
        };

        // A response we can't decode is no better than no response
        let body: UnlockResponse = match response.json().await {
            Ok(body) => body,
            Err(e) => return ResolutionOutcome::failure(link, e.to_string()),
        };

        if body.status == "success" {
            match body.data {
                Some(payload) => ResolutionOutcome::success(link, payload),
                // A "success" without file details would break the
                // payload-iff-success invariant, so it counts as a failure
                None => {
                    ResolutionOutcome::failure(link, "Service returned no data".to_string())
                }
            }
        } else {
            let error = body.error.unwrap_or_else(|| "Unknown error".to_string());
            ResolutionOutcome::failure(link, error)
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why does resolve() return a plain value instead of a Result?
//    - A failed unlock is a normal, expected answer, not an exception
//    - Encoding "it failed" as data means callers can't forget to handle it
//    - The batch pipeline just collects whatever comes back
//
// 2. What does #[serde(flatten)] do?
//    - Collects any JSON fields not matched by the named struct fields
//    - Here it catches provider-specific extras so they survive into the
//      saved results without us modeling every provider's response
//
// 3. Why Option<String> for the API key?
//    - The key is genuinely optional - the tool still validates and
//      classifies links without one
//    - Option makes "no key configured" a state the compiler tracks,
//      instead of a magic empty string
// -----------------------------------------------------------------------------
