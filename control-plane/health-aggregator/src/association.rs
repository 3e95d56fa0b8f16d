use health_models::{Associated, AssociationKind, EstablishmentState};
use std::collections::BTreeMap;

/// True when every association is established. A workload without
/// associations is never blocked by them.
pub fn all_established<A: Associated>(associations: &[A]) -> bool {
    associations
        .iter()
        .all(|a| a.establishment_state().is_established())
}

/// Kinds of the associations that are not established, in input order.
pub fn unestablished<A: Associated>(associations: &[A]) -> Vec<AssociationKind> {
    associations
        .iter()
        .filter(|a| !a.establishment_state().is_established())
        .map(|a| a.kind())
        .collect()
}

/// Summary state for status reporting.
///
/// Failed wins over Pending, Pending over Unknown. The result is
/// `Established` exactly when [`all_established`] holds.
pub fn aggregate_state<A: Associated>(associations: &[A]) -> EstablishmentState {
    reduce_states(associations.iter().map(|a| a.establishment_state()))
}

/// Establishment state keyed by association type.
pub fn states_by_type<A: Associated>(
    associations: &[A],
) -> BTreeMap<String, EstablishmentState> {
    let mut grouped: BTreeMap<String, Vec<EstablishmentState>> = BTreeMap::new();
    for a in associations {
        grouped
            .entry(a.kind().association_type().to_string())
            .or_default()
            .push(a.establishment_state());
    }
    grouped
        .into_iter()
        .map(|(k, states)| (k, reduce_states(states)))
        .collect()
}

fn reduce_states<I>(states: I) -> EstablishmentState
where
    I: IntoIterator<Item = EstablishmentState>,
{
    states
        .into_iter()
        .max_by_key(state_rank)
        .filter(|s| !s.is_established())
        .unwrap_or(EstablishmentState::Established)
}

fn state_rank(s: &EstablishmentState) -> u8 {
    match s {
        EstablishmentState::Established => 0,
        EstablishmentState::Unknown => 1,
        EstablishmentState::Pending => 2,
        EstablishmentState::Failed => 3,
    }
}
