use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("{field} replica count cannot be negative: {value}")]
    NegativeCount { field: &'static str, value: i32 },
}

/// Ready and desired instance counts of the workload at evaluation time.
/// `ready` is not required to be lower than `desired`.
#[derive(
    Deserialize, Serialize, Clone, Copy, Debug, JsonSchema, Default, PartialEq, Eq,
)]
pub struct ReplicaSnapshot {
    pub ready: u32,
    pub desired: u32,
}

impl ReplicaSnapshot {
    pub fn new(ready: u32, desired: u32) -> Self {
        Self { ready, desired }
    }

    /// Build a snapshot from Kubernetes `int32` counts
    /// (e.g. `status.numberReady` / `status.desiredNumberScheduled`).
    pub fn from_counts(ready: i32, desired: i32) -> Result<Self, SnapshotError> {
        let ready = u32::try_from(ready).map_err(|_| SnapshotError::NegativeCount {
            field: "ready",
            value: ready,
        })?;
        let desired =
            u32::try_from(desired).map_err(|_| SnapshotError::NegativeCount {
                field: "desired",
                value: desired,
            })?;
        Ok(Self { ready, desired })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_counts_accepts_non_negative() {
        let snap = ReplicaSnapshot::from_counts(2, 3).unwrap();
        assert_eq!(snap, ReplicaSnapshot::new(2, 3));
        assert_eq!(ReplicaSnapshot::from_counts(0, 0).unwrap(), ReplicaSnapshot::default());
    }

    #[test]
    fn from_counts_keeps_over_count() {
        let snap = ReplicaSnapshot::from_counts(5, 3).unwrap();
        assert_eq!(snap.ready, 5);
        assert_eq!(snap.desired, 3);
    }

    #[test]
    fn from_counts_rejects_negative() {
        let err = ReplicaSnapshot::from_counts(-1, 3).unwrap_err();
        assert_eq!(
            err,
            SnapshotError::NegativeCount {
                field: "ready",
                value: -1
            }
        );
        let err = ReplicaSnapshot::from_counts(1, -4).unwrap_err();
        assert_eq!(err.to_string(), "desired replica count cannot be negative: -4");
    }
}
