// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API: the CLI structure is described with Rust structs
// and attributes, and clap generates the parsing code.
//
// The API key is a global option rather than ambient configuration - it is
// parsed here and handed explicitly to the resolver client, so nothing in
// the pipeline ever reads the environment or global state.
// =============================================================================

use clap::{Parser, Subcommand};

use crate::resolver::DEFAULT_ENDPOINT;

// This struct represents our entire CLI application
#[derive(Parser, Debug)]
#[command(
    name = "link-unlocker",
    version = "0.1.0",
    about = "Resolve locked file-hosting links into direct download URLs",
    long_about = "link-unlocker validates download links against the providers AllDebrid supports, \
                  resolves them into direct URLs through the AllDebrid API, and saves the results \
                  as JSON for later inspection."
)]
pub struct Cli {
    /// AllDebrid API key
    ///
    /// Optional: without it every resolution is reported as a failure
    /// ("No AllDebrid API key") and no network calls are made.
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Base URL of the unlocking service
    ///
    /// Mostly useful for testing against a local mock server.
    #[arg(long, global = true, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    #[command(subcommand)]
    pub command: Commands,
}

// This enum defines our subcommands (links, file, status, test)
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve one or more download links given on the command line
    ///
    /// Example: link-unlocker --api-key KEY links https://rapidgator.net/file/abc
    Links {
        /// The download links to resolve, in order
        #[arg(required = true)]
        links: Vec<String>,

        /// Output results in JSON format instead of a readable report
        #[arg(long)]
        json: bool,

        /// Base name for the persisted results file ({out}_results.json)
        #[arg(long, default_value = "manual_processing")]
        out: String,
    },

    /// Extract supported-host links from a text file and resolve them
    ///
    /// Example: link-unlocker --api-key KEY file links.txt
    File {
        /// Path to a UTF-8 text file containing links anywhere in its text
        path: String,

        /// Output results in JSON format instead of a readable report
        #[arg(long)]
        json: bool,

        /// Base name for the persisted results file
        /// (defaults to the input file's stem + "_processed")
        #[arg(long)]
        out: Option<String>,
    },

    /// Show the current configuration and supported providers
    Status,

    /// Probe the unlocking service to check the API key works
    Test,
}
