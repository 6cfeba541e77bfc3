use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global subscriber. `RUST_LOG` wins over `default_filter`;
/// `json` switches from human-readable lines to one JSON object per event.
pub fn init_tracing(default_filter: &str, json: bool) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let registry = tracing_subscriber::registry().with(env_filter);
    if json {
        let fmt_layer = fmt::layer()
            .with_target(false)
            .with_thread_ids(false)
            .with_ansi(false)
            .json();
        registry.with(fmt_layer).init();
    } else {
        let fmt_layer = fmt::layer().with_target(false);
        registry.with(fmt_layer).init();
    }
}
