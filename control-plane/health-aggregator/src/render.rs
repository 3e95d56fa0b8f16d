use std::io::Read;

use chrono::{DateTime, Utc};
use health_models::{Association, ReplicaSnapshot, SnapshotError, WorkloadSnapshot};
use serde::Deserialize;

use crate::aggregator::{assess, calculate_snapshot_health};
use crate::config::OutputFormat;
use crate::error::EvalError;
use crate::status::build_status;

/// Snapshot document as written by callers. Counts are signed, the way
/// Kubernetes reports them, and are checked before evaluation.
#[derive(Deserialize, Debug, Default)]
struct SnapshotDocument {
    #[serde(default)]
    associations: Vec<Association>,
    #[serde(default)]
    ready: i32,
    #[serde(default)]
    desired: i32,
}

impl TryFrom<SnapshotDocument> for WorkloadSnapshot {
    type Error = SnapshotError;

    fn try_from(doc: SnapshotDocument) -> Result<Self, Self::Error> {
        let replicas = ReplicaSnapshot::from_counts(doc.ready, doc.desired)?;
        Ok(WorkloadSnapshot {
            associations: doc.associations,
            ready: replicas.ready,
            desired: replicas.desired,
        })
    }
}

pub fn parse_snapshot(doc: &str) -> Result<WorkloadSnapshot, EvalError> {
    let doc: SnapshotDocument = serde_json::from_str(doc)?;
    Ok(WorkloadSnapshot::try_from(doc)?)
}

/// Read a snapshot document from a file, or stdin for `-`.
pub fn read_snapshot(input: clap_stdin::FileOrStdin) -> Result<WorkloadSnapshot, EvalError> {
    let mut buf = String::new();
    input.into_reader()?.read_to_string(&mut buf)?;
    parse_snapshot(&buf)
}

/// Text printed by `health-eval` for one snapshot, without trailing newline.
pub fn render(
    snapshot: &WorkloadSnapshot,
    output: OutputFormat,
    generation: Option<i64>,
    pretty: bool,
    now: DateTime<Utc>,
) -> Result<String, EvalError> {
    let rendered = match output {
        OutputFormat::Verdict => calculate_snapshot_health(snapshot).to_string(),
        OutputFormat::Assessment => {
            let a = assess(&snapshot.associations, snapshot.ready, snapshot.desired);
            format!("{}: {}", a.verdict, a.cause)
        }
        OutputFormat::Status => {
            let status = build_status(snapshot, None, generation, now);
            if pretty {
                serde_json::to_string_pretty(&status).map_err(EvalError::Encode)?
            } else {
                serde_json::to_string(&status).map_err(EvalError::Encode)?
            }
        }
    };
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use health_models::HealthVerdict;

    const KIBANA_PENDING: &str = r#"{
        "associations": [
            {"kind": "elasticsearch", "status": "Established"},
            {"kind": "kibana", "status": "Pending"}
        ],
        "ready": 3,
        "desired": 3
    }"#;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()
    }

    #[test]
    fn parse_accepts_missing_fields() {
        let snap = parse_snapshot("{}").unwrap();
        assert_eq!(snap, WorkloadSnapshot::default());
    }

    #[test]
    fn negative_count_is_a_snapshot_error() {
        let err = parse_snapshot(r#"{"ready": -1, "desired": 2}"#).unwrap_err();
        assert!(matches!(
            err,
            EvalError::Snapshot(SnapshotError::NegativeCount { field: "ready", value: -1 })
        ));
        assert_eq!(
            err.to_string(),
            "Invalid replica counts: ready replica count cannot be negative: -1"
        );
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        let err = parse_snapshot(r#"{"associations": [{"kind": "logstash"}]}"#).unwrap_err();
        assert!(matches!(err, EvalError::Parse(_)));
        let err = parse_snapshot("not json").unwrap_err();
        assert!(matches!(err, EvalError::Parse(_)));
    }

    #[test]
    fn renders_verdict() {
        let snap = parse_snapshot(KIBANA_PENDING).unwrap();
        let out = render(&snap, OutputFormat::Verdict, None, true, now()).unwrap();
        assert_eq!(out, "red");
    }

    #[test]
    fn renders_assessment_line() {
        let snap = parse_snapshot(KIBANA_PENDING).unwrap();
        let out = render(&snap, OutputFormat::Assessment, None, true, now()).unwrap();
        assert_eq!(out, "red: associations not established: kibana");

        let snap = parse_snapshot(r#"{"ready": 1, "desired": 5}"#).unwrap();
        let out = render(&snap, OutputFormat::Assessment, None, true, now()).unwrap();
        assert_eq!(out, "yellow: 1/5 replicas ready");
    }

    #[test]
    fn renders_status_json() {
        let snap = parse_snapshot(KIBANA_PENDING).unwrap();
        let out = render(&snap, OutputFormat::Status, Some(7), false, now()).unwrap();
        assert!(!out.contains('\n'));
        let doc: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(doc["health"], serde_json::json!(HealthVerdict::Red));
        assert_eq!(doc["observedGeneration"], serde_json::json!(7));
        assert_eq!(doc["lastUpdated"], serde_json::json!(now().to_rfc3339()));
        assert_eq!(
            doc["associations"],
            serde_json::json!({"elasticsearch": "Established", "kibana": "Pending"})
        );

        let pretty = render(&snap, OutputFormat::Status, Some(7), true, now()).unwrap();
        assert!(pretty.contains('\n'));
        assert_eq!(serde_json::from_str::<serde_json::Value>(&pretty).unwrap(), doc);
    }
}
