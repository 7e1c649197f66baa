// src/logging.rs
// =============================================================================
// Human-readable tracing output on stderr.
//
// stdout is reserved for results, so logs never mix with the output other
// tools may be parsing.
// =============================================================================

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "warn";
const VERBOSE_FILTER: &str = "warn,myhttp=debug";

/// Installs the global subscriber.
///
/// `RUST_LOG` wins when set. Otherwise only warnings are shown, or debug
/// output from this crate when `verbose` is on. Fails if a subscriber is
/// already installed.
pub fn init_logging(verbose: bool) -> Result<(), TryInitError> {
    let default_filter = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init()?;

    tracing::debug!("logging initialized");
    Ok(())
}
