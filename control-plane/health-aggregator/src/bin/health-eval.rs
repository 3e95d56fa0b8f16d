use chrono::Utc;
use clap::Parser;
use envconfig::Envconfig;
use health_aggregator::{
    EvalError,
    config::{EvalConfig, OutputFormat},
    init_tracing, read_snapshot, render,
};
use tracing::{debug, info};

/// Evaluate the health of a workload snapshot.
#[derive(Parser, Clone, Debug)]
#[clap(author, version, about, long_about = None)]
struct HealthEvalCli {
    /// Snapshot document as file or stdin if `-` is given.
    /// Example: `cat snap.json | health-eval -`
    #[arg(default_value = "-")]
    input: clap_stdin::FileOrStdin,
    /// Output format (overrides HEALTH_EVAL_OUTPUT)
    #[arg(short = 'o', long, value_enum)]
    output: Option<OutputFormat>,
    /// Generation recorded as observedGeneration in status output
    #[arg(short, long)]
    generation: Option<i64>,
}

fn main() -> anyhow::Result<()> {
    let cfg = EvalConfig::init_from_env().map_err(EvalError::from)?;
    init_tracing(&cfg.log);
    let cli = HealthEvalCli::parse();
    let output = cfg.resolve_output(cli.output);
    info!(?cfg, %output, "Starting health evaluation");

    let snapshot = read_snapshot(cli.input)?;
    debug!(
        associations = snapshot.associations.len(),
        ready = snapshot.ready,
        desired = snapshot.desired,
        "read snapshot"
    );

    let rendered = render(&snapshot, output, cli.generation, cfg.pretty, Utc::now())?;
    println!("{}", rendered);
    Ok(())
}
