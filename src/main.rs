// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (stderr only, stdout is for results)
// 3. Start the fetch pool and print each result as soon as it arrives
// 4. Exit with proper code (0 = ran, 1 = no URLs given, 2 = setup error)
//
// A URL that fails to download is not a failure of the program: it gets
// reported like any other result and the exit code stays 0.
// =============================================================================

mod cli;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use futures::StreamExt;
use std::time::Duration;
use tracing::{debug, info};

use cli::Cli;
use myhttp::logging::init_logging;
use myhttp::{ClientConfig, FetchResult, Pool};

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = every URL was attempted (whatever the outcome)
//   Ok(1) = no URLs given, usage printed
//   Err   = the pool could not be set up
async fn run() -> Result<i32> {
    let cli = Cli::parse_from(cli::normalize_args(std::env::args()));

    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    if cli.urls.is_empty() {
        eprintln!("{}", Cli::command().render_help());
        return Ok(1);
    }

    let pool = Pool::builder(cli.urls)
        .concurrency(cli.parallel.get())
        .client_config(ClientConfig::with_timeout(Duration::from_secs(cli.timeout)))
        .build()
        .context("failed to set up the fetch pool")?;

    debug!(
        workers = pool.effective_concurrency(),
        timeout_secs = cli.timeout,
        "fetching"
    );

    let mut results = pool.run();
    let mut failed = 0usize;
    while let Some(result) = results.next().await {
        if !result.is_ok() {
            failed += 1;
        }
        print_result(&result, cli.json)?;
    }

    if failed > 0 {
        info!(failed, "some URLs could not be fetched");
    }

    Ok(0)
}

// Plain:  <url> <digest-or-error-message>
// JSON:   {"url":"...","digest":"..."} per line
fn print_result(result: &FetchResult, json: bool) -> Result<()> {
    if json {
        let line = serde_json::to_string(result).context("failed to encode result as JSON")?;
        println!("{}", line);
    } else {
        println!("{} {}", result.url, result.summary());
    }
    Ok(())
}
