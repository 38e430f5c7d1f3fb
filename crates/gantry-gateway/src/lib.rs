//! Gateway status reconciliation and event filtering
//!
//! The pieces a Gateway controller needs around its reconcile loop:
//! - condition evaluation and pruning for Gateway status
//! - listener status synchronization
//! - status planning (skip the write when nothing changed)
//! - watch event filtering by controller ownership
//! - fan-out of GatewayClass changes into Gateway reconcile requests

#![deny(missing_docs)]

pub mod clock;
pub mod conditions;
pub mod diagnostics;
pub mod equality;
pub mod events;
pub mod listeners;
pub mod router;
pub mod status;

pub use clock::{Clock, SystemClock};
pub use conditions::{
    is_gateway_ready, is_gateway_scheduled, prune_conditions, prune_gateway_status_conditions,
};
pub use diagnostics::{DiagnosticSink, NoopDiagnostics, TracingDiagnostics};
pub use equality::{addresses_equal, listeners_equal};
pub use events::WatchEvent;
pub use listeners::{listener_statuses, supported_route_group_kinds, validate_listener_names};
pub use router::{
    gateway_class_from_object, gateway_update_requires_reconcile,
    reconcile_gateways_if_class_matches, GatewayEventRouter,
};
pub use status::{mark_scheduled, plan_status, StatusPlan};
