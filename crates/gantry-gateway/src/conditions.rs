//! Gateway condition evaluation and pruning
//!
//! Conditions are appended over the life of a Gateway, so the head of the list
//! holds the oldest entries. Lookups scan linearly and any match counts.

use gantry_common::crd::{
    condition_reasons, condition_types, Condition, ConditionStatus, Gateway, MAX_CONDITIONS,
};

/// Whether the Gateway was scheduled by this controller at some point
///
/// Scheduling is a one-time milestone, so the condition's generation is not
/// compared.
pub fn is_gateway_scheduled(gateway: &Gateway) -> bool {
    gateway.status_conditions().iter().any(|cond| {
        cond.matches(
            condition_types::SCHEDULED,
            condition_reasons::SCHEDULED,
            ConditionStatus::True,
        )
    })
}

/// Whether a Ready condition exists for the Gateway's current generation
///
/// A Ready condition stamped against an older generation is stale and counts
/// as absent.
pub fn is_gateway_ready(gateway: &Gateway) -> bool {
    let generation = gateway.generation();
    gateway.status_conditions().iter().any(|cond| {
        cond.type_ == condition_types::READY
            && cond.reason == condition_reasons::READY
            && cond.observed_generation.unwrap_or_default() == generation
    })
}

/// Drop the oldest conditions so at most [`MAX_CONDITIONS`] remain
pub fn prune_conditions(conditions: &mut Vec<Condition>) {
    if conditions.len() > MAX_CONDITIONS {
        let excess = conditions.len() - MAX_CONDITIONS;
        conditions.drain(..excess);
    }
}

/// Prune the Gateway's status conditions in place
pub fn prune_gateway_status_conditions(gateway: &mut Gateway) -> &mut Gateway {
    if let Some(status) = gateway.status.as_mut() {
        prune_conditions(&mut status.conditions);
    }
    gateway
}
