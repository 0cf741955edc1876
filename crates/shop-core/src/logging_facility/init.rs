//! Logging initialization module
//!
//! Provides a single initialization point for the logging facility.

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Default filter when `RUST_LOG` is unset
const DEFAULT_FILTER: &str = "shop=info";

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output for development
    Development,
    /// JSON structured output for production
    Production,
    /// Bare registry; tests attach their own capture layer
    Test,
}

static INIT_ONCE: Once = Once::new();

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize the logging facility
///
/// Call once at startup; later calls are no-ops. Events are written to
/// stderr so that report output on stdout stays untouched.
///
/// # Profiles
///
/// - **Development**: Human-readable logs
/// - **Production**: JSON structured logs
/// - **Test**: No output
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| {
        // A subscriber installed elsewhere (e.g. test capture) wins.
        let _ = match profile {
            Profile::Development => tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(env_filter())
                .finish()
                .try_init(),
            Profile::Production => tracing_subscriber::fmt()
                .json()
                .with_writer(std::io::stderr)
                .with_env_filter(env_filter())
                .finish()
                .try_init(),
            Profile::Test => tracing_subscriber::registry().try_init(),
        };
    });
}
