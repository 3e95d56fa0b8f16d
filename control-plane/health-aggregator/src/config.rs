use envconfig::Envconfig;
use std::fmt;

#[derive(Envconfig, Clone, Debug)]
pub struct EvalConfig {
    /// Tracing directive used when RUST_LOG is unset.
    /// Env: HEALTH_EVAL_LOG
    #[envconfig(from = "HEALTH_EVAL_LOG", default = "info")]
    pub log: String,

    /// Output used when `--output` is not given (verdict | assessment | status)
    /// Env: HEALTH_EVAL_OUTPUT
    #[envconfig(from = "HEALTH_EVAL_OUTPUT", default = "verdict")]
    pub output: String,

    /// Env: HEALTH_EVAL_PRETTY
    #[envconfig(from = "HEALTH_EVAL_PRETTY", default = "true")]
    pub pretty: bool,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Bare verdict: green, yellow or red
    Verdict,
    /// Verdict followed by its cause
    Assessment,
    /// Full observed status as JSON
    Status,
}

impl OutputFormat {
    pub fn from_name(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "assessment" => OutputFormat::Assessment,
            "status" => OutputFormat::Status,
            _ => OutputFormat::Verdict,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Verdict => write!(f, "verdict"),
            OutputFormat::Assessment => write!(f, "assessment"),
            OutputFormat::Status => write!(f, "status"),
        }
    }
}

impl EvalConfig {
    /// Output format, preferring the command line over the environment.
    pub fn resolve_output(&self, flag: Option<OutputFormat>) -> OutputFormat {
        flag.unwrap_or_else(|| OutputFormat::from_name(&self.output))
    }
}
