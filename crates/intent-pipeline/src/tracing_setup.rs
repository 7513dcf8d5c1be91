//! Tracing initialization and span helpers.

use std::sync::Once;

use intent_core::config::ObservabilityConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter, e.g.
/// `INTENT_LOG=intent_clustering=debug,info`.
pub const LOG_ENV: &str = "INTENT_LOG";

/// Initialize logging to stderr.
///
/// `INTENT_LOG` wins over `config.log_level`. Idempotent.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

        let registry = tracing_subscriber::registry().with(filter);
        // A subscriber installed elsewhere (tests, embedding hosts) is kept.
        let _ = if config.json_logs {
            registry
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .try_init()
        } else {
            registry
                .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
                .try_init()
        };
    });
}

/// Span covering one bucket's clustering and decision.
#[macro_export]
macro_rules! bucket_span {
    ($primary:expr, $secondary:expr, $size:expr) => {
        tracing::info_span!(
            "intent.bucket",
            primary = %$primary,
            secondary = %$secondary,
            size = $size
        )
    };
}
