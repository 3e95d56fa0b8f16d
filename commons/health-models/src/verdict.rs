use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Summarized health of a workload.
///
/// Variants are declared from least to most severe so the derived `Ord`
/// follows severity: `Green < Yellow < Red`.
#[derive(
    Deserialize,
    Serialize,
    Clone,
    Copy,
    Debug,
    JsonSchema,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
)]
#[serde(rename_all = "lowercase")]
pub enum HealthVerdict {
    #[default]
    Green,
    Yellow,
    Red,
}

impl HealthVerdict {
    /// The more severe of the two verdicts. `Green` is the identity.
    pub fn worst(self, other: HealthVerdict) -> HealthVerdict {
        self.max(other)
    }

    /// Fold a sequence of verdicts into the most severe one, `Green` if empty.
    pub fn worst_of<I>(verdicts: I) -> HealthVerdict
    where
        I: IntoIterator<Item = HealthVerdict>,
    {
        verdicts
            .into_iter()
            .fold(HealthVerdict::Green, HealthVerdict::worst)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HealthVerdict::Green => "green",
            HealthVerdict::Yellow => "yellow",
            HealthVerdict::Red => "red",
        }
    }
}

impl fmt::Display for HealthVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
