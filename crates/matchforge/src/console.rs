//! Console logging for constraint evaluation.
//!
//! Installs a `tracing` subscriber that prints engine events. Directives
//! from `RUST_LOG` take precedence over the configured filter.

use std::sync::OnceLock;

use matchforge_config::MatchConfig;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

const FALLBACK_FILTER: &str = "matchforge=info";

static INIT: OnceLock<()> = OnceLock::new();

/// Initializes console logging with the default configuration.
///
/// Safe to call multiple times - only the first call has effect.
pub fn init() {
    init_with(&MatchConfig::default());
}

/// Initializes console logging with `config.log_filter` as the default
/// directive.
///
/// An unparsable directive falls back to `matchforge=info`. If another
/// global subscriber is already installed, it is left in place.
pub fn init_with(config: &MatchConfig) {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&config.log_filter))
            .unwrap_or_else(|_| EnvFilter::new(FALLBACK_FILTER));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true))
            .try_init();
    });
}

/// Returns true once [`init`] or [`init_with`] has run.
pub fn is_initialized() -> bool {
    INIT.get().is_some()
}
