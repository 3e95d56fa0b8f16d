use crate::aggregator::{HealthAssessment, assess};
use crate::association::{all_established, states_by_type};
use chrono::{DateTime, Utc};
use health_models::{
    Association, Condition, ConditionType, HealthVerdict, WorkloadSnapshot,
    WorkloadStatus,
};

/// Observed status for one reconcile pass.
///
/// Conditions whose status did not change keep the transition time found in
/// `current`.
pub fn build_status(
    snapshot: &WorkloadSnapshot,
    current: Option<&WorkloadStatus>,
    generation: Option<i64>,
    now: DateTime<Utc>,
) -> WorkloadStatus {
    let assessment =
        assess(&snapshot.associations, snapshot.ready, snapshot.desired);
    let associations = if snapshot.associations.is_empty() {
        None
    } else {
        Some(states_by_type(&snapshot.associations))
    };
    let conditions = build_conditions(
        &assessment,
        &snapshot.associations,
        current.and_then(|s| s.conditions.as_ref()),
        now,
    );
    WorkloadStatus {
        health: Some(assessment.verdict),
        available_nodes: Some(snapshot.ready),
        expected_nodes: Some(snapshot.desired),
        associations,
        observed_generation: generation,
        last_updated: Some(now.to_rfc3339()),
        conditions: Some(conditions),
    }
}

/// `Healthy` condition, plus `AssociationsEstablished` when the workload
/// declares associations.
pub fn build_conditions(
    assessment: &HealthAssessment,
    associations: &[Association],
    prev: Option<&Vec<Condition>>,
    now: DateTime<Utc>,
) -> Vec<Condition> {
    let now = now.to_rfc3339();
    let mut out: Vec<Condition> = Vec::new();

    out.push(Condition {
        type_: ConditionType::Healthy,
        status: (assessment.verdict == HealthVerdict::Green).into(),
        reason: Some(assessment.cause.reason().into()),
        message: Some(assessment.cause.to_string()),
        last_transition_time: Some(now.clone()),
    });

    if !associations.is_empty() {
        let established = all_established(associations);
        let (reason, message) = if established {
            ("Established", "All associations established")
        } else {
            ("NotEstablished", "One or more associations not established")
        };
        out.push(Condition {
            type_: ConditionType::AssociationsEstablished,
            status: established.into(),
            reason: Some(reason.into()),
            message: Some(message.into()),
            last_transition_time: Some(now),
        });
    }

    if let Some(prev_list) = prev {
        for c in &mut out {
            carry_transition_time(c, prev_list);
        }
    }
    out
}

/// Merge `desired` status into `current`: fields left unset in `desired`
/// keep their current value. Returns a new status object.
pub fn merge_status(
    current: Option<&WorkloadStatus>,
    mut desired: WorkloadStatus,
) -> WorkloadStatus {
    if let Some(cur) = current {
        if desired.health.is_none() {
            desired.health = cur.health;
        }
        if desired.available_nodes.is_none() {
            desired.available_nodes = cur.available_nodes;
        }
        if desired.expected_nodes.is_none() {
            desired.expected_nodes = cur.expected_nodes;
        }
        if desired.associations.is_none() {
            desired.associations = cur.associations.clone();
        }
        if desired.observed_generation.is_none() {
            desired.observed_generation = cur.observed_generation;
        }
        if desired.last_updated.is_none() {
            desired.last_updated = cur.last_updated.clone();
        }
        let merged = upsert_conditions(
            cur.conditions.as_deref().unwrap_or_default(),
            desired.conditions.unwrap_or_default(),
        );
        desired.conditions = if merged.is_empty() {
            None
        } else {
            Some(merged)
        };
    }
    desired
}

fn carry_transition_time(c: &mut Condition, prev: &[Condition]) {
    if let Some(p) = prev.iter().find(|p| p.type_ == c.type_) {
        if p.status == c.status && p.last_transition_time.is_some() {
            c.last_transition_time = p.last_transition_time.clone();
        }
    }
}

fn upsert_conditions(
    existing: &[Condition],
    incoming: Vec<Condition>,
) -> Vec<Condition> {
    let mut out: Vec<Condition> = existing.to_vec();
    for mut inc in incoming {
        carry_transition_time(&mut inc, existing);
        if let Some(idx) = out.iter().position(|c| c.type_ == inc.type_) {
            out[idx] = inc;
        } else {
            out.push(inc);
        }
    }
    out.sort_by_key(|c| cond_rank(&c.type_));
    out
}

fn cond_rank(t: &ConditionType) -> u8 {
    match t {
        ConditionType::Healthy => 0,
        ConditionType::AssociationsEstablished => 1,
        ConditionType::Unknown => 250,
    }
}
