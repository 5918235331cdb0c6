use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the server's tracing subscriber.
///
/// Verbosity comes from `RUST_LOG`, falling back to `info` for this crate and
/// `warn` for everything else. `log` records from shared code are forwarded
/// by the subscriber's log bridge.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("qa_portfolio=info,tower_http=info,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .compact(),
        )
        .init();
}
