//! Event filtering and request fan-out for the Gateway controller
//!
//! Decides which watch events concern this controller and which Gateways a
//! GatewayClass change should re-reconcile. Malformed payloads are reported to
//! the diagnostic sink and treated as "not ours"; nothing here returns an
//! error to the watch stream.

use std::sync::Arc;

use gantry_common::annotations::extract_unmanaged_gateway_mode;
use gantry_common::crd::{Gateway, GatewayClass, GATEWAY_API_GROUP};
use gantry_common::{Error, GatewayControllerConfig};
use kube::api::DynamicObject;
use kube::runtime::reflector::ObjectRef;
use kube::{Resource, ResourceExt};
use tracing::{debug, trace};

use crate::diagnostics::DiagnosticSink;
use crate::equality::{addresses_equal, listeners_equal};
use crate::events::WatchEvent;

/// Interpret an untyped watch payload as a GatewayClass
///
/// Any version of the Gateway API group is accepted; other kinds are an
/// [`Error::UnexpectedObject`].
pub fn gateway_class_from_object(obj: &DynamicObject) -> Result<GatewayClass, Error> {
    let expected_kind = GatewayClass::kind(&());
    let is_class = obj.types.as_ref().is_some_and(|types| {
        types.kind == expected_kind
            && types
                .api_version
                .split_once('/')
                .is_some_and(|(group, _)| group == GATEWAY_API_GROUP)
    });

    if !is_class {
        let found = obj
            .types
            .as_ref()
            .map(|types| format!("{}/{}", types.api_version, types.kind))
            .unwrap_or_else(|| "untyped object".to_string());
        return Err(Error::unexpected_object(expected_kind, found));
    }

    let value = serde_json::to_value(obj)?;
    serde_json::from_value(value)
        .map_err(|e| Error::serialization_for_kind(expected_kind, e.to_string()))
}

/// Routes watch events for Gateways and GatewayClasses
///
/// Holds this controller's identity so ownership checks never read a global.
pub struct GatewayEventRouter {
    controller_name: String,
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl GatewayEventRouter {
    /// Create a router for the configured controller identity
    pub fn new(config: &GatewayControllerConfig, diagnostics: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            controller_name: config.controller_name.clone(),
            diagnostics,
        }
    }

    /// The controllerName this router claims GatewayClasses for
    pub fn controller_name(&self) -> &str {
        &self.controller_name
    }

    /// Whether the Gateway is in unmanaged mode and its class belongs to us
    ///
    /// Both must hold: an unmanaged Gateway of another controller's class is
    /// not ours.
    pub fn is_gateway_in_class_and_unmanaged(
        &self,
        gateway_class: &GatewayClass,
        gateway: &Gateway,
    ) -> bool {
        extract_unmanaged_gateway_mode(gateway.annotations()).is_some()
            && gateway_class.is_controlled_by(&self.controller_name)
    }

    /// Whether any GatewayClass carried by the event belongs to this controller
    ///
    /// Objects that are not GatewayClasses are reported and skipped. For
    /// updates, a match on either the old or the new object is enough.
    pub fn is_gateway_class_event_in_class(&self, event: &WatchEvent<DynamicObject>) -> bool {
        for obj in event.objects() {
            let gateway_class = match gateway_class_from_object(obj) {
                Ok(gateway_class) => gateway_class,
                Err(e) => {
                    self.diagnostics.report(
                        &e,
                        "received invalid object type in event handlers",
                        &[
                            ("event", event.kind().to_string()),
                            ("name", obj.name_any()),
                        ],
                    );
                    continue;
                }
            };

            if gateway_class.is_controlled_by(&self.controller_name) {
                debug!(
                    event = event.kind(),
                    gateway_class = %gateway_class.name_any(),
                    "gateway class event is in class"
                );
                return true;
            }
        }

        trace!(event = event.kind(), "gateway class event filtered out");
        false
    }
}

/// Reconcile requests for every Gateway that references the class, in order
pub fn reconcile_gateways_if_class_matches(
    gateway_class: &GatewayClass,
    gateways: &[Gateway],
) -> Vec<ObjectRef<Gateway>> {
    let class_name = gateway_class.name_any();
    let requests: Vec<ObjectRef<Gateway>> = gateways
        .iter()
        .filter(|gateway| gateway.class_name() == class_name)
        .map(|gateway| {
            let request = ObjectRef::new(&gateway.name_any());
            match gateway.namespace() {
                Some(namespace) => request.within(&namespace),
                None => request,
            }
        })
        .collect();

    debug!(
        gateway_class = %class_name,
        gateways = gateways.len(),
        requests = requests.len(),
        "expanded gateway class into reconcile requests"
    );
    requests
}

/// Whether a Gateway update changes anything the controller acts on
///
/// Status-only updates (including our own status writes) are filtered out.
pub fn gateway_update_requires_reconcile(old: &Gateway, new: &Gateway) -> bool {
    old.generation() != new.generation()
        || old.class_name() != new.class_name()
        || !listeners_equal(&old.spec.listeners, &new.spec.listeners)
        || !addresses_equal(&old.spec.addresses, &new.spec.addresses)
        || extract_unmanaged_gateway_mode(old.annotations())
            != extract_unmanaged_gateway_mode(new.annotations())
}
