// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Build the host registry, resolver client, and pipeline
// 3. Dispatch to the appropriate subcommand handler
// 4. Render results, persist them, and exit with a proper code
//    (0 = all links resolved, 1 = some links failed, 2 = error)
//
// Everything in this file is presentation: the decisions live in the
// pipeline, resolver, and report modules.
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli; // src/cli.rs - command-line parsing
mod hosts; // src/hosts.rs - supported-provider registry
mod links; // src/links/ - extraction and validation
mod pipeline; // src/pipeline/ - sequential batch processing
mod report; // src/report/ - summary and persistence
mod resolver; // src/resolver/ - unlocking-service client

use clap::Parser;
use cli::{Cli, Commands};

use anyhow::Result;
use hosts::HostRegistry;
use pipeline::Pipeline;
use report::{persist_results, summarize};
use resolver::{ResolutionOutcome, ResolverClient};

// The #[tokio::main] attribute transforms our async main into a real main
// function by creating a tokio runtime and running our code inside it
#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Main application logic
// Returns:
//   Ok(0) = every link resolved
//   Ok(1) = some links failed
//   Ok(2) = internal error (bad input file, bad credential, ...)
//   Err = unexpected error
async fn run() -> Result<i32> {
    let cli = Cli::parse();

    // The credential travels explicitly from here into the client - no
    // globals, no environment reads
    let registry = HostRegistry::new();
    let resolver = ResolverClient::with_endpoint(cli.api_key, cli.endpoint);

    match cli.command {
        Commands::Links { links, json, out } => {
            handle_links(resolver, registry, links, json, &out).await
        }
        Commands::File { path, json, out } => {
            handle_file(resolver, registry, &path, json, out).await
        }
        Commands::Status => {
            handle_status(&resolver, &registry);
            Ok(0)
        }
        Commands::Test => handle_test(&resolver).await,
    }
}

// Handles the 'links' subcommand: resolve links given on the command line
async fn handle_links(
    resolver: ResolverClient,
    registry: HostRegistry,
    links: Vec<String>,
    json: bool,
    out: &str,
) -> Result<i32> {
    println!("🔄 Processing {} link(s)...\n", links.len());

    let pipeline = Pipeline::new(resolver, registry);
    let results = pipeline.process_batch(&links).await;

    finish_batch(&results, json, out)
}

// Handles the 'file' subcommand: extract links from a text file, then resolve
async fn handle_file(
    resolver: ResolverClient,
    registry: HostRegistry,
    path: &str,
    json: bool,
    out: Option<String>,
) -> Result<i32> {
    // File problems (missing, unreadable, not UTF-8) are user-visible
    // messages, never crashes
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("❌ Could not read '{}': {}", path, e);
            return Ok(2);
        }
    };

    println!("📁 Reading links from: {}", path);
    let found = links::extract_links(&content, &registry);

    if found.is_empty() {
        println!("❌ No supported download links found in file.");
        return Ok(0);
    }

    println!("✅ Found {} link(s)\n", found.len());

    // Default output base: "links.txt" -> "links_processed_results.json"
    let base = out.unwrap_or_else(|| {
        let stem = std::path::Path::new(path).with_extension("");
        format!("{}_processed", stem.to_string_lossy())
    });

    let pipeline = Pipeline::new(resolver, registry);
    let results = pipeline.process_batch(&found).await;

    finish_batch(&results, json, &base)
}

// Handles the 'status' subcommand: show the current configuration
fn handle_status(resolver: &ResolverClient, registry: &HostRegistry) {
    println!("{}", "=".repeat(60));
    println!("📋 LINK UNLOCKER STATUS");
    println!("{}", "=".repeat(60));

    let key_state = if resolver.has_credential() {
        "🟢 Configured"
    } else {
        "🔴 Not configured"
    };
    println!("🔑 AllDebrid API: {}", key_state);
    println!("🌐 Supported hosts: 🟢 {} providers", registry.len());
    println!("📍 API endpoint: {}", resolver.endpoint());

    println!("\nProviders:");
    for host in registry.hosts() {
        println!("   • {}", host);
    }
}

// Handles the 'test' subcommand: probe the service with a throwaway link
//
// The probe link doesn't exist, so a "link" error from the service actually
// means the connection and the API key are fine - the service looked at the
// request and answered. Only key-related errors count as real failures.
async fn handle_test(resolver: &ResolverClient) -> Result<i32> {
    println!("🔧 Testing AllDebrid connection...");

    if !resolver.has_credential() {
        println!("❌ No AllDebrid API key configured");
        return Ok(2);
    }

    let outcome = resolver.resolve("https://uploaded.net/file/test123").await;

    if outcome.success {
        println!("✅ AllDebrid connection successful!");
        return Ok(0);
    }

    let error = outcome.error.unwrap_or_else(|| "Unknown error".to_string());
    let lowered = error.to_lowercase();

    if lowered.contains("api key") || lowered.contains("apikey") {
        println!("❌ API key issue: {}", error);
        Ok(2)
    } else if lowered.contains("link") {
        println!("✅ AllDebrid connection successful! (test link rejected as expected)");
        Ok(0)
    } else {
        println!("⚠️  Connection issue: {}", error);
        Ok(2)
    }
}

// Renders the batch, persists it, and maps the outcomes to an exit code
fn finish_batch(results: &[ResolutionOutcome], json: bool, base: &str) -> Result<i32> {
    if json {
        // Machine-readable mode: just the outcomes, pretty-printed
        let json_output = serde_json::to_string_pretty(results)?;
        println!("{}", json_output);
    } else {
        display_results(results);
    }

    // Persistence faults are warnings - the results were already shown and
    // are still in memory, losing the file must not fail the run
    match persist_results(results, base) {
        Ok(path) => println!("💾 Results saved to: {}", path.display()),
        Err(e) => eprintln!("⚠️  Warning: could not save results: {}", e),
    }

    let summary = summarize(results);
    if summary.failure_count > 0 {
        Ok(1)
    } else {
        Ok(0)
    }
}

// Prints the human-readable results report with a summary block
fn display_results(results: &[ResolutionOutcome]) {
    println!("\n{}", "=".repeat(60));
    println!("📊 PROCESSING RESULTS");
    println!("{}", "=".repeat(60));

    for result in results {
        if result.success {
            // success implies the payload is present; guard anyway so a
            // malformed record renders instead of panicking
            let Some(data) = &result.data else { continue };
            println!("✅ SUCCESS: {}", data.filename);
            println!("   📏 Size: {:.1} MB", data.size_mb());
            println!("   🔗 Download: {}", truncate(&data.link, 60));
        } else {
            let error = result.error.as_deref().unwrap_or("Unknown error");
            let subject = result.host.as_deref().unwrap_or(&result.original_link);
            println!("❌ FAILED: {}", subject);
            println!("   💬 Error: {}", error);
        }
        println!();
    }

    let summary = summarize(results);
    println!("{}", "-".repeat(60));
    println!(
        "📈 Summary: {} successful, {} failed",
        summary.success_count, summary.failure_count
    );
    println!("📊 Success Rate: {:.1}%", summary.success_rate);
}

// Shortens long URLs for display (char-boundary safe)
fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{}...", cut)
    }
}
