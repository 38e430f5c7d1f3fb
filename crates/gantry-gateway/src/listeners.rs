//! Listener status synchronization
//!
//! Projects `spec.listeners` onto `status.listeners`. The attached-route
//! counters are owned by the route controllers, so they are carried over from
//! the previous status and never recomputed here.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use gantry_common::crd::{
    condition_reasons, condition_types, Condition, ConditionStatus, Gateway, ListenerStatus,
    RouteGroupKind,
};
use gantry_common::Error;
use tracing::debug;

/// Message on the Ready condition of every synchronized listener
pub const LISTENER_READY_MESSAGE: &str = "the listener is ready and available for routing";

/// Route kinds every listener advertises
const SUPPORTED_ROUTE_KINDS: [&str; 4] = ["HTTPRoute", "TCPRoute", "UDPRoute", "TLSRoute"];

/// The fixed set of route kinds reported in `supportedKinds`
pub fn supported_route_group_kinds() -> Vec<RouteGroupKind> {
    SUPPORTED_ROUTE_KINDS
        .iter()
        .map(|kind| RouteGroupKind::gateway_api(*kind))
        .collect()
}

/// Reject Gateways that declare the same listener name twice
pub fn validate_listener_names(gateway: &Gateway) -> Result<(), Error> {
    let mut seen = HashSet::with_capacity(gateway.spec.listeners.len());
    for (index, listener) in gateway.spec.listeners.iter().enumerate() {
        if !seen.insert(listener.name.as_str()) {
            return Err(Error::validation_for_field(
                format!("gateway {}", gateway.key()),
                format!("spec.listeners[{index}].name"),
                format!("duplicate listener name {}", listener.name),
            ));
        }
    }
    Ok(())
}

/// Build one listener status per spec listener, in spec order
///
/// `attachedRoutes` is taken from the previous status entry with the same
/// name, or starts at zero for a new listener. Previous entries for listeners
/// no longer in the spec are dropped.
pub fn listener_statuses(
    gateway: &Gateway,
    now: DateTime<Utc>,
) -> Result<Vec<ListenerStatus>, Error> {
    validate_listener_names(gateway)?;

    let previous: HashMap<&str, i32> = gateway
        .status_listeners()
        .iter()
        .map(|status| (status.name.as_str(), status.attached_routes))
        .collect();

    let generation = gateway.generation();
    let statuses: Vec<ListenerStatus> = gateway
        .spec
        .listeners
        .iter()
        .map(|listener| ListenerStatus {
            name: listener.name.clone(),
            supported_kinds: supported_route_group_kinds(),
            attached_routes: previous
                .get(listener.name.as_str())
                .copied()
                .unwrap_or_default(),
            conditions: vec![listener_ready_condition(generation, now)],
        })
        .collect();

    debug!(
        gateway = %gateway.key(),
        generation,
        listeners = statuses.len(),
        "synchronized listener statuses"
    );

    Ok(statuses)
}

fn listener_ready_condition(generation: i64, now: DateTime<Utc>) -> Condition {
    Condition::new(
        condition_types::READY,
        ConditionStatus::True,
        condition_reasons::READY,
        LISTENER_READY_MESSAGE,
    )
    .observed_at(generation)
    .transitioned_at(now)
}
