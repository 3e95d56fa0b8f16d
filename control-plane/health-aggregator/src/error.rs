use thiserror::Error;

#[derive(Error, Debug)]
pub enum EvalError {
    #[error("Failed to read input: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to open input: {0}")]
    Input(#[from] clap_stdin::StdinError),

    #[error("Invalid workload snapshot: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to encode status: {0}")]
    Encode(serde_json::Error),

    #[error("Invalid replica counts: {0}")]
    Snapshot(#[from] health_models::SnapshotError),

    #[error("Configuration error: {0}")]
    Config(#[from] envconfig::Error),
}
