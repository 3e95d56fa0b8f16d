use health_models::HealthVerdict;

/// Verdict from the ready/desired ratio alone.
///
/// Zero desired replicas is healthy. An over-count (`ready > desired`) is not
/// clamped and reports Yellow.
pub fn replica_health(ready: u32, desired: u32) -> HealthVerdict {
    if desired == 0 || ready == desired {
        return HealthVerdict::Green;
    }
    if ready == 0 {
        return HealthVerdict::Red;
    }
    HealthVerdict::Yellow
}
