use tracing_subscriber::EnvFilter;

use crate::error::{Result, XpyError};

/// Install the global fmt subscriber.
///
/// Honors `RUST_LOG` and always enables `xpy=info` on top of it. Fails if a
/// global subscriber is already installed.
pub fn init_tracing() -> Result<()> {
    let directive = "xpy=info"
        .parse()
        .map_err(|e| XpyError::Telemetry(format!("invalid default directive: {e}")))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .try_init()
        .map_err(|e| XpyError::Telemetry(e.to_string()))
}
