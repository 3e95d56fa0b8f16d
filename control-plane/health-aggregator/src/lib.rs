pub mod aggregator;
pub mod association;
pub mod config;
pub mod error;
pub mod render;
pub mod replicas;
pub mod status;


pub use aggregator::{
    HealthAssessment, HealthCause, assess, calculate_health,
    calculate_snapshot_health,
};
pub use association::all_established;
pub use error::EvalError;
pub use render::{parse_snapshot, read_snapshot, render};
pub use replicas::replica_health;

use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Install the global subscriber. `RUST_LOG` wins when it is set; otherwise
/// `default_env` is used as the filter directive.
pub fn init_tracing(default_env: &str) {
    let default_directive = default_env
        .parse()
        .unwrap_or_else(|_| LevelFilter::INFO.into());
    let filter = EnvFilter::builder()
        .with_default_directive(default_directive)
        .with_env_var("RUST_LOG")
        .from_env_lossy();

    // stdout carries the evaluation result only
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}
