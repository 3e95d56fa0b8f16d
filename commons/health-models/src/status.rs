use crate::{Association, EstablishmentState, HealthVerdict, ReplicaSnapshot};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Input of one health evaluation, as gathered by the reconcile loop.
#[derive(Deserialize, Serialize, Clone, Debug, JsonSchema, Default, PartialEq)]
pub struct WorkloadSnapshot {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub associations: Vec<Association>,
    #[serde(default)]
    pub ready: u32,
    #[serde(default)]
    pub desired: u32,
}

impl WorkloadSnapshot {
    pub fn replicas(&self) -> ReplicaSnapshot {
        ReplicaSnapshot::new(self.ready, self.desired)
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, JsonSchema, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkloadStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health: Option<HealthVerdict>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_nodes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_nodes: Option<u32>,
    /// Establishment state per association type (e.g. "elasticsearch").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub associations: Option<BTreeMap<String, EstablishmentState>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observed_generation: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
    // K8s-style conditions (Healthy/AssociationsEstablished)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<Vec<Condition>>,
}

#[derive(Deserialize, Serialize, Clone, Debug, JsonSchema, PartialEq)]
pub struct Condition {
    #[serde(rename = "type")]
    pub type_: ConditionType,
    pub status: ConditionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(
        rename = "lastTransitionTime",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_transition_time: Option<String>,
}

#[derive(Deserialize, Serialize, Clone, Debug, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub enum ConditionType {
    Healthy,
    AssociationsEstablished,
    #[serde(other)]
    Unknown,
}

#[derive(Deserialize, Serialize, Clone, Copy, Debug, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub enum ConditionStatus {
    True,
    False,
    Unknown,
}

impl From<bool> for ConditionStatus {
    fn from(value: bool) -> Self {
        if value {
            ConditionStatus::True
        } else {
            ConditionStatus::False
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AssociationKind, Associated};

    #[test]
    fn snapshot_parses_with_defaults() {
        let snap: WorkloadSnapshot = serde_json::from_str(r#"{"desired": 3}"#).unwrap();
        assert!(snap.associations.is_empty());
        assert_eq!(snap.replicas(), ReplicaSnapshot::new(0, 3));
    }

    #[test]
    fn snapshot_parses_associations() {
        let json = r#"{
            "associations": [
                {"kind": "elasticsearch", "status": "Established"},
                {"kind": "kibana", "status": "Pending"}
            ],
            "ready": 1,
            "desired": 1
        }"#;
        let snap: WorkloadSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snap.associations.len(), 2);
        assert_eq!(snap.associations[1].kind(), AssociationKind::Kibana);
        assert_eq!(
            snap.associations[1].establishment_state(),
            EstablishmentState::Pending
        );
    }

    #[test]
    fn status_serializes_camel_case_and_skips_empty() {
        let status = WorkloadStatus {
            health: Some(HealthVerdict::Yellow),
            available_nodes: Some(1),
            expected_nodes: Some(3),
            ..Default::default()
        };
        let v = serde_json::to_value(&status).unwrap();
        assert_eq!(
            v,
            serde_json::json!({"health": "yellow", "availableNodes": 1, "expectedNodes": 3})
        );
    }

    #[test]
    fn unknown_condition_type_is_tolerated() {
        let c: Condition =
            serde_json::from_str(r#"{"type": "Reconciled", "status": "True"}"#).unwrap();
        assert_eq!(c.type_, ConditionType::Unknown);
        assert_eq!(c.status, ConditionStatus::True);
    }
}
