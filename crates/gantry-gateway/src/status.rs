//! Next-status computation for a Gateway
//!
//! Composes the condition evaluator, listener synchronizer and pruner into
//! the status the reconciliation loop writes back. Writing is the caller's
//! job; this module only decides whether a write is needed and what it holds.

use chrono::{DateTime, Utc};
use gantry_common::crd::{
    condition_reasons, condition_types, Condition, ConditionStatus, Gateway, GatewayAddress,
    GatewayStatus,
};
use gantry_common::Error;
use tracing::{debug, info};

use crate::clock::Clock;
use crate::conditions::{
    is_gateway_ready, is_gateway_scheduled, prune_conditions, prune_gateway_status_conditions,
};
use crate::equality::addresses_equal;
use crate::listeners::listener_statuses;

/// Message on the Scheduled condition
pub const SCHEDULED_MESSAGE: &str = "this gateway has been picked up by the controller";

/// Message on the Gateway Ready condition
pub const READY_MESSAGE: &str = "the gateway is ready and listeners are available for routing";

/// Outcome of [`plan_status`]
#[derive(Clone, Debug, PartialEq)]
pub enum StatusPlan {
    /// Stored status is current; skip the write
    Unchanged,
    /// Write this status
    Update(GatewayStatus),
}

impl StatusPlan {
    /// Whether a status write is needed
    pub fn needs_write(&self) -> bool {
        matches!(self, StatusPlan::Update(_))
    }
}

/// Scheduled condition stamped with the given generation
pub fn scheduled_condition(generation: i64, now: DateTime<Utc>) -> Condition {
    Condition::new(
        condition_types::SCHEDULED,
        ConditionStatus::True,
        condition_reasons::SCHEDULED,
        SCHEDULED_MESSAGE,
    )
    .observed_at(generation)
    .transitioned_at(now)
}

/// Gateway Ready condition stamped with the given generation
pub fn ready_condition(generation: i64, now: DateTime<Utc>) -> Condition {
    Condition::new(
        condition_types::READY,
        ConditionStatus::True,
        condition_reasons::READY,
        READY_MESSAGE,
    )
    .observed_at(generation)
    .transitioned_at(now)
}

/// Append a condition, dropping any earlier entries of the same type
fn set_condition(conditions: &mut Vec<Condition>, condition: Condition) {
    conditions.retain(|existing| existing.type_ != condition.type_);
    conditions.push(condition);
}

/// Record that this controller has picked up the Gateway
///
/// Appends a Scheduled condition unless one is already present, then prunes.
/// Returns whether the status changed.
pub fn mark_scheduled(gateway: &mut Gateway, clock: &dyn Clock) -> bool {
    if is_gateway_scheduled(gateway) {
        return false;
    }

    let condition = scheduled_condition(gateway.generation(), clock.now());
    let status = gateway.status.get_or_insert_with(GatewayStatus::default);
    set_condition(&mut status.conditions, condition);
    prune_gateway_status_conditions(gateway);

    info!(gateway = %gateway.key(), "marked gateway scheduled");
    true
}

/// Compute the status to write for a Gateway given its current addresses
///
/// A Gateway that is already Ready at its current generation and advertises
/// the same addresses (in the same order) needs no write.
pub fn plan_status(
    gateway: &Gateway,
    addresses: Vec<GatewayAddress>,
    clock: &dyn Clock,
) -> Result<StatusPlan, Error> {
    if is_gateway_ready(gateway) && addresses_equal(gateway.status_addresses(), &addresses) {
        debug!(gateway = %gateway.key(), "gateway status is current");
        return Ok(StatusPlan::Unchanged);
    }

    let now = clock.now();
    let generation = gateway.generation();
    let listeners = listener_statuses(gateway, now)?;

    let mut conditions = gateway.status_conditions().to_vec();
    if !is_gateway_scheduled(gateway) {
        set_condition(&mut conditions, scheduled_condition(generation, now));
    }
    set_condition(&mut conditions, ready_condition(generation, now));
    prune_conditions(&mut conditions);

    debug!(
        gateway = %gateway.key(),
        generation,
        addresses = addresses.len(),
        listeners = listeners.len(),
        "planned gateway status update"
    );

    Ok(StatusPlan::Update(GatewayStatus {
        addresses,
        conditions,
        listeners,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::MockClock;
    use chrono::TimeZone;
    use gantry_common::crd::{GatewaySpec, Listener, ListenerStatus, MAX_CONDITIONS};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    fn clock() -> MockClock {
        let mut clock = MockClock::new();
        clock.expect_now().returning(now);
        clock
    }

    fn gateway(generation: i64) -> Gateway {
        let mut gateway = Gateway::new(
            "edge",
            GatewaySpec {
                gateway_class_name: "gantry".to_string(),
                listeners: vec![
                    Listener::new("http", "HTTP", 80),
                    Listener::new("https", "HTTPS", 443),
                ],
                addresses: vec![],
            },
        );
        gateway.metadata.namespace = Some("default".to_string());
        gateway.metadata.generation = Some(generation);
        gateway
    }

    fn addresses() -> Vec<GatewayAddress> {
        vec![GatewayAddress::ip("10.0.0.1")]
    }

    fn apply(gateway: &mut Gateway, plan: StatusPlan) {
        match plan {
            StatusPlan::Update(status) => gateway.status = Some(status),
            StatusPlan::Unchanged => {}
        }
    }

    /// Story: a fresh Gateway is scheduled and made ready in one write
    #[test]
    fn story_new_gateway_becomes_ready() {
        let gw = gateway(1);
        let plan = plan_status(&gw, addresses(), &clock()).unwrap();
        let StatusPlan::Update(status) = plan else {
            panic!("expected an update for a new gateway");
        };

        let types: Vec<_> = status.conditions.iter().map(|c| c.type_.as_str()).collect();
        assert_eq!(types, vec!["Scheduled", "Ready"]);
        assert_eq!(status.addresses, addresses());
        assert_eq!(status.listeners.len(), 2);
        assert!(status
            .conditions
            .iter()
            .all(|c| c.observed_generation == Some(1) && c.last_transition_time == now()));
    }

    /// Story: once ready, an unchanged Gateway produces no write
    #[test]
    fn story_ready_gateway_with_same_addresses_is_unchanged() {
        let mut gw = gateway(1);
        let plan = plan_status(&gw, addresses(), &clock()).unwrap();
        apply(&mut gw, plan);

        // No clock expectations: the planner must not stamp anything.
        let idle = MockClock::new();
        let plan = plan_status(&gw, addresses(), &idle).unwrap();
        assert_eq!(plan, StatusPlan::Unchanged);
        assert!(!plan.needs_write());
    }

    #[test]
    fn changed_addresses_trigger_update_without_rescheduling() {
        let mut gw = gateway(1);
        let plan = plan_status(&gw, addresses(), &clock()).unwrap();
        apply(&mut gw, plan);

        let moved = vec![GatewayAddress::ip("10.0.0.2")];
        let StatusPlan::Update(status) = plan_status(&gw, moved.clone(), &clock()).unwrap() else {
            panic!("expected an update for new addresses");
        };
        assert_eq!(status.addresses, moved);
        let scheduled = status
            .conditions
            .iter()
            .filter(|c| c.type_ == "Scheduled")
            .count();
        assert_eq!(scheduled, 1);
    }

    #[test]
    fn reordered_addresses_trigger_update() {
        let mut gw = gateway(1);
        let two = vec![GatewayAddress::ip("10.0.0.1"), GatewayAddress::ip("10.0.0.2")];
        let plan = plan_status(&gw, two.clone(), &clock()).unwrap();
        apply(&mut gw, plan);

        let mut reversed = two;
        reversed.reverse();
        assert!(plan_status(&gw, reversed, &clock()).unwrap().needs_write());
    }

    /// Story: a spec edit makes the old Ready stale and forces a new one
    #[test]
    fn story_generation_bump_restamps_ready() {
        let mut gw = gateway(1);
        let plan = plan_status(&gw, addresses(), &clock()).unwrap();
        apply(&mut gw, plan);
        gw.status.as_mut().unwrap().listeners[1].attached_routes = 3;

        gw.metadata.generation = Some(2);
        let StatusPlan::Update(status) = plan_status(&gw, addresses(), &clock()).unwrap() else {
            panic!("expected an update after a generation bump");
        };
        let last = status.conditions.last().unwrap();
        assert_eq!(last.type_, "Ready");
        assert_eq!(last.observed_generation, Some(2));
        assert_eq!(status.listeners[1].attached_routes, 3);
    }

    /// Story: repeated spec edits keep one Ready entry and never lose Scheduled
    #[test]
    fn story_scheduled_survives_many_spec_edits() {
        let mut gw = gateway(1);
        for generation in 1..=12 {
            gw.metadata.generation = Some(generation);
            let plan = plan_status(&gw, addresses(), &clock()).unwrap();
            apply(&mut gw, plan);
        }

        let conditions = gw.status_conditions();
        let types: Vec<_> = conditions.iter().map(|c| c.type_.as_str()).collect();
        assert_eq!(types, vec!["Scheduled", "Ready"]);
        assert_eq!(conditions[0].observed_generation, Some(1));
        assert_eq!(conditions[1].observed_generation, Some(12));
        assert!(is_gateway_scheduled(&gw));
        assert!(is_gateway_ready(&gw));
    }

    #[test]
    fn foreign_conditions_are_kept_and_history_is_pruned() {
        let mut gw = gateway(1);
        gw.status = Some(GatewayStatus {
            conditions: (0..MAX_CONDITIONS)
                .map(|i| {
                    Condition::new(
                        format!("Custom{i}"),
                        ConditionStatus::True,
                        "Observed",
                        "",
                    )
                })
                .collect(),
            ..Default::default()
        });

        let StatusPlan::Update(status) = plan_status(&gw, addresses(), &clock()).unwrap() else {
            panic!("expected an update for an unscheduled gateway");
        };
        assert_eq!(status.conditions.len(), MAX_CONDITIONS);
        let types: Vec<_> = status.conditions.iter().map(|c| c.type_.as_str()).collect();
        assert_eq!(&types[..2], &["Custom2", "Custom3"]);
        assert_eq!(&types[MAX_CONDITIONS - 2..], &["Scheduled", "Ready"]);
    }

    #[test]
    fn duplicate_listeners_fail_the_plan() {
        let mut gw = gateway(1);
        gw.spec.listeners.push(Listener::new("http", "HTTP", 8080));
        assert!(plan_status(&gw, addresses(), &clock()).is_err());
    }

    #[test]
    fn mark_scheduled_appends_once() {
        let mut gw = gateway(3);
        assert!(mark_scheduled(&mut gw, &clock()));
        assert!(is_gateway_scheduled(&gw));
        assert_eq!(gw.status_conditions().len(), 1);
        assert_eq!(gw.status_conditions()[0].observed_generation, Some(3));

        let idle = MockClock::new();
        assert!(!mark_scheduled(&mut gw, &idle));
        assert_eq!(gw.status_conditions().len(), 1);
    }

    #[test]
    fn mark_scheduled_keeps_existing_listener_status() {
        let mut gw = gateway(1);
        gw.status = Some(GatewayStatus {
            listeners: vec![ListenerStatus {
                name: "http".to_string(),
                attached_routes: 2,
                ..Default::default()
            }],
            ..Default::default()
        });
        mark_scheduled(&mut gw, &clock());
        assert_eq!(gw.status_listeners()[0].attached_routes, 2);
    }
}
