use crate::association::{all_established, unestablished};
use crate::replicas::replica_health;
use health_models::{Associated, AssociationKind, HealthVerdict, WorkloadSnapshot};
use std::fmt;
use tracing::debug;

/// Health of a workload from its associations and replica counts.
///
/// An association that is not established makes the workload Red whatever
/// its readiness. Otherwise the replica ratio decides.
pub fn calculate_health<A: Associated>(
    associations: &[A],
    ready: u32,
    desired: u32,
) -> HealthVerdict {
    let verdict = if all_established(associations) {
        replica_health(ready, desired)
    } else {
        HealthVerdict::Red
    };
    debug!(
        %verdict,
        associations = associations.len(),
        ready,
        desired,
        "calculated health"
    );
    verdict
}

pub fn calculate_snapshot_health(snapshot: &WorkloadSnapshot) -> HealthVerdict {
    calculate_health(&snapshot.associations, snapshot.ready, snapshot.desired)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HealthCause {
    AssociationsNotEstablished(Vec<AssociationKind>),
    NoReplicasDesired,
    AllReplicasReady,
    NoReplicasReady,
    PartiallyReady { ready: u32, desired: u32 },
}

impl HealthCause {
    /// CamelCase reason, suitable for a status condition.
    pub fn reason(&self) -> &'static str {
        match self {
            HealthCause::AssociationsNotEstablished(_) => {
                "AssociationsNotEstablished"
            }
            HealthCause::NoReplicasDesired => "NoReplicasDesired",
            HealthCause::AllReplicasReady => "AllReplicasReady",
            HealthCause::NoReplicasReady => "NoReplicasReady",
            HealthCause::PartiallyReady { .. } => "PartiallyReady",
        }
    }
}

impl fmt::Display for HealthCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HealthCause::AssociationsNotEstablished(kinds) => {
                let names: Vec<&str> =
                    kinds.iter().map(|k| k.association_type()).collect();
                write!(f, "associations not established: {}", names.join(", "))
            }
            HealthCause::NoReplicasDesired => write!(f, "no replicas desired"),
            HealthCause::AllReplicasReady => write!(f, "all replicas ready"),
            HealthCause::NoReplicasReady => write!(f, "no replicas ready"),
            HealthCause::PartiallyReady { ready, desired } => {
                write!(f, "{}/{} replicas ready", ready, desired)
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HealthAssessment {
    pub verdict: HealthVerdict,
    pub cause: HealthCause,
}

/// Same verdict as [`calculate_health`], together with what produced it.
pub fn assess<A: Associated>(
    associations: &[A],
    ready: u32,
    desired: u32,
) -> HealthAssessment {
    let verdict = calculate_health(associations, ready, desired);
    let cause = if !all_established(associations) {
        HealthCause::AssociationsNotEstablished(unestablished(associations))
    } else if desired == 0 {
        HealthCause::NoReplicasDesired
    } else if ready == desired {
        HealthCause::AllReplicasReady
    } else if ready == 0 {
        HealthCause::NoReplicasReady
    } else {
        HealthCause::PartiallyReady { ready, desired }
    };
    HealthAssessment { verdict, cause }
}
