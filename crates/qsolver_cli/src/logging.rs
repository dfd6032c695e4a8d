//! Tracing subscriber set-up.
//!
//! Log output goes to stderr; stdout is reserved for roots and usage.

use crate::config::LogLevel;
use crate::error::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber.
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init_tracing(log_level: LogLevel) -> Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(log_level.as_filter_str())),
        )
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()?;
    Ok(())
}
