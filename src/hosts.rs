// src/hosts.rs
// =============================================================================
// This module holds the registry of file-hosting providers the unlocking
// service knows how to handle.
//
// The registry is data, not logic:
// - A fixed list of lowercase domain strings, agreed with the service's
//   documented provider list
// - Adding support for a new host means adding one string
//
// Both the link extractor and the link validator consult this single registry,
// so the two can never disagree about what counts as a supported host.
//
// Rust concepts:
// - Slices of string literals: &[&str] for static configuration data
// - Struct with methods: grouping data with the operations on it
// =============================================================================

// Hosting providers supported by the unlocking service.
// Keep entries lowercase - the membership test lowercases hostnames to match.
const SUPPORTED_HOSTS: &[&str] = &[
    "uploaded.net",
    "rapidgator.net",
    "nitroflare.com",
    "katfile.com",
    "uptobox.com",
    "1fichier.com",
    "filerio.com",
    "turbobit.net",
    "userupload.net",
    "ddownload.com",
    "dropapk.to",
    "k2s.cc",
    "keep2share.cc",
    "filefactory.com",
    "oboom.com",
    "rapidrar.com",
    "file-up.org",
    "uploadgig.com",
];

// The registry of supported hosting-provider domains.
//
// Built once at startup and read-only afterwards. The membership test is
// substring containment on the hostname, not exact match: a hostname
// "supports" an entry if the entry appears anywhere inside it. That is how
// the unlocking service itself classifies links (it matches e.g.
// "dl.rapidgator.net" against "rapidgator.net"), so we keep the same rule.
#[derive(Debug, Clone)]
pub struct HostRegistry {
    hosts: Vec<String>,
}

impl HostRegistry {
    // Creates the registry with the default provider list
    pub fn new() -> Self {
        Self::with_hosts(SUPPORTED_HOSTS.iter().map(|h| h.to_string()).collect())
    }

    // Creates a registry with a custom host list (useful in tests)
    pub fn with_hosts(hosts: Vec<String>) -> Self {
        HostRegistry { hosts }
    }

    // Checks whether a hostname belongs to a supported provider
    //
    // Case-insensitive: "RAPIDGATOR.NET" matches "rapidgator.net".
    // Containment, not equality: "dl.rapidgator.net" matches too.
    pub fn is_host_supported(&self, hostname: &str) -> bool {
        let hostname = hostname.to_lowercase();
        self.hosts.iter().any(|host| hostname.contains(host.as_str()))
    }

    // Number of providers in the registry (for the status display)
    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    // The provider list itself (for the status display)
    pub fn hosts(&self) -> &[String] {
        &self.hosts
    }
}

impl Default for HostRegistry {
    fn default() -> Self {
        Self::new()
    }
}
