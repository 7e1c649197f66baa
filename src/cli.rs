// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
//   myhttp [OPTIONS] URL [URL...]
//
// Every option can also come from an environment variable (MYHTTP_PARALLEL,
// MYHTTP_TIMEOUT), which is handy in CI where editing the command is awkward.
//
// For compatibility with the classic single-dash style (`-parallel 3`) the
// raw arguments go through `normalize_args` before clap sees them.
// =============================================================================

use clap::Parser;
use std::num::NonZeroUsize;

const EXAMPLES: &str = "\
EXAMPLES:
  $ myhttp google.com
  $ myhttp -parallel 3 google.com facebook.com yahoo.com
  $ myhttp --json --timeout 5 https://example.com";

#[derive(Parser, Debug)]
#[command(
    name = "myhttp",
    version,
    about = "Fetch URLs in parallel and print the MD5 checksum of each response body",
    after_help = EXAMPLES
)]
pub struct Cli {
    /// Website URLs to fetch, separated by spaces
    ///
    /// A missing scheme defaults to https://
    #[arg(value_name = "URL")]
    pub urls: Vec<String>,

    /// Number of requests to send in parallel
    #[arg(long, short = 'p', env = "MYHTTP_PARALLEL", default_value = "10")]
    pub parallel: NonZeroUsize,

    /// Connect and overall timeout per request, in seconds
    #[arg(
        long,
        env = "MYHTTP_TIMEOUT",
        default_value_t = 10,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    /// Print one JSON object per result instead of plain text
    #[arg(long)]
    pub json: bool,

    /// Show debug logs on stderr
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

// Single-dash long flags that get rewritten to their double-dash form
const LEGACY_FLAGS: [&str; 2] = ["-parallel", "-timeout"];

/// Rewrites `-parallel N` / `-parallel=N` (and `-timeout`) to the `--` form.
///
/// Everything else, including URLs that happen to start with a dash after
/// `--`, is passed through untouched.
pub fn normalize_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen_separator = false;

    args.into_iter()
        .map(|arg| {
            if seen_separator {
                return arg;
            }
            if arg == "--" {
                seen_separator = true;
                return arg;
            }

            let name = arg.split('=').next().unwrap_or_default();
            if LEGACY_FLAGS.contains(&name) {
                format!("-{}", arg)
            } else {
                arg
            }
        })
        .collect()
}
