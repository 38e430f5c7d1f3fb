//! Gateway API Gateway resource
//!
//! A Gateway declares listeners (named network-exposure endpoints) and
//! references the GatewayClass whose controller is responsible for it. The
//! status sub-resource carries the controller's view: conditions, addresses
//! and one listener status per declared listener.

use kube::{CustomResource, ResourceExt};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::types::Condition;

/// API group shared by all Gateway API resources
pub const GATEWAY_API_GROUP: &str = "gateway.networking.k8s.io";

/// Maximum number of status conditions a Gateway may carry at one time
pub const MAX_CONDITIONS: usize = 8;

/// Gateway condition types
pub mod condition_types {
    /// The controller has accepted the Gateway and assigned it resources
    pub const SCHEDULED: &str = "Scheduled";
    /// The Gateway (or listener) is ready to serve traffic
    pub const READY: &str = "Ready";
}

/// Gateway condition reasons
pub mod condition_reasons {
    /// Reason paired with a True Scheduled condition
    pub const SCHEDULED: &str = "Scheduled";
    /// Reason paired with a True Ready condition
    pub const READY: &str = "Ready";
}

// =============================================================================
// CRD
// =============================================================================

/// Spec for a Gateway
#[derive(CustomResource, Clone, Debug, Deserialize, Serialize, JsonSchema, PartialEq)]
#[kube(
    group = "gateway.networking.k8s.io",
    version = "v1alpha2",
    kind = "Gateway",
    plural = "gateways",
    shortname = "gtw",
    namespaced,
    status = "GatewayStatus",
    derive = "PartialEq",
    printcolumn = r#"{"name":"Class","type":"string","jsonPath":".spec.gatewayClassName"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct GatewaySpec {
    /// Name of the GatewayClass this Gateway belongs to
    pub gateway_class_name: String,

    /// Listener configurations, unique by name
    #[serde(default)]
    pub listeners: Vec<Listener>,

    /// Addresses requested for this Gateway
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub addresses: Vec<GatewayAddress>,
}

/// Gateway listener configuration
#[derive(Clone, Debug, Deserialize, Serialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Listener {
    /// Listener name
    pub name: String,
    /// Optional hostname filter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    /// Port number
    pub port: u16,
    /// Protocol (HTTP, HTTPS, TCP, UDP, TLS)
    pub protocol: String,
    /// TLS configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls: Option<GatewayTlsConfig>,
    /// Routes allowed to attach to this listener
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_routes: Option<AllowedRoutes>,
}

impl Listener {
    /// Create a listener with no hostname, TLS or route restrictions
    pub fn new(name: impl Into<String>, protocol: impl Into<String>, port: u16) -> Self {
        Self {
            name: name.into(),
            hostname: None,
            port,
            protocol: protocol.into(),
            tls: None,
            allowed_routes: None,
        }
    }
}

/// Listener TLS configuration
#[derive(Clone, Debug, Deserialize, Serialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GatewayTlsConfig {
    /// TLS mode (Terminate, Passthrough)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    /// Certificate secret references
    #[serde(default)]
    pub certificate_refs: Vec<CertificateRef>,
}

/// Reference to a TLS certificate secret
#[derive(Clone, Debug, Deserialize, Serialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CertificateRef {
    /// Resource kind (default: Secret)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Secret name
    pub name: String,
    /// Secret namespace (defaults to the Gateway's namespace)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

/// Routes allowed to attach to a listener
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AllowedRoutes {
    /// Namespace selector
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespaces: Option<RouteNamespaces>,
    /// Route kinds allowed to attach
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub kinds: Vec<RouteGroupKind>,
}

/// Route namespace selector
#[derive(Clone, Debug, Deserialize, Serialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RouteNamespaces {
    /// Namespace selection mode (Same, All, Selector)
    pub from: String,
}

/// Group and kind of a route resource
#[derive(Clone, Debug, Deserialize, Serialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RouteGroupKind {
    /// API group (defaults to gateway.networking.k8s.io)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Route kind (HTTPRoute, TCPRoute, ...)
    pub kind: String,
}

impl RouteGroupKind {
    /// A route kind in the Gateway API group
    pub fn gateway_api(kind: impl Into<String>) -> Self {
        Self {
            group: Some(GATEWAY_API_GROUP.to_string()),
            kind: kind.into(),
        }
    }
}

/// Type of a Gateway address
#[derive(Clone, Copy, Debug, Deserialize, Serialize, JsonSchema, PartialEq, Eq)]
pub enum AddressType {
    /// A textual IPv4 or IPv6 address
    #[serde(rename = "IPAddress")]
    IpAddress,
    /// A DNS hostname
    Hostname,
    /// An implementation-specific name
    NamedAddress,
}

/// Network address bound to a Gateway
#[derive(Clone, Debug, Deserialize, Serialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GatewayAddress {
    /// Address type (defaults to IPAddress)
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_: Option<AddressType>,
    /// Address value
    pub value: String,
}

impl GatewayAddress {
    /// An IP address
    pub fn ip(value: impl Into<String>) -> Self {
        Self {
            type_: Some(AddressType::IpAddress),
            value: value.into(),
        }
    }

    /// A DNS hostname
    pub fn hostname(value: impl Into<String>) -> Self {
        Self {
            type_: Some(AddressType::Hostname),
            value: value.into(),
        }
    }
}

// =============================================================================
// Status
// =============================================================================

/// Status of a Gateway
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GatewayStatus {
    /// Addresses the Gateway is reachable on
    #[serde(default)]
    pub addresses: Vec<GatewayAddress>,
    /// Gateway conditions, oldest first
    #[serde(default)]
    pub conditions: Vec<Condition>,
    /// One status entry per spec listener
    #[serde(default)]
    pub listeners: Vec<ListenerStatus>,
}

/// Observed status of a single listener
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListenerStatus {
    /// Name of the listener this status describes
    pub name: String,
    /// Route kinds this listener supports
    #[serde(default)]
    pub supported_kinds: Vec<RouteGroupKind>,
    /// Number of routes attached to this listener
    #[serde(default)]
    pub attached_routes: i32,
    /// Listener conditions
    #[serde(default)]
    pub conditions: Vec<Condition>,
}

// =============================================================================
// Helpers
// =============================================================================

impl Gateway {
    /// Current spec generation (0 before the API server assigns one)
    pub fn generation(&self) -> i64 {
        self.metadata.generation.unwrap_or_default()
    }

    /// Name of the referenced GatewayClass
    pub fn class_name(&self) -> &str {
        &self.spec.gateway_class_name
    }

    /// Status conditions, empty when no status has been written
    pub fn status_conditions(&self) -> &[Condition] {
        self.status
            .as_ref()
            .map(|s| s.conditions.as_slice())
            .unwrap_or_default()
    }

    /// Listener statuses, empty when no status has been written
    pub fn status_listeners(&self) -> &[ListenerStatus] {
        self.status
            .as_ref()
            .map(|s| s.listeners.as_slice())
            .unwrap_or_default()
    }

    /// Status addresses, empty when no status has been written
    pub fn status_addresses(&self) -> &[GatewayAddress] {
        self.status
            .as_ref()
            .map(|s| s.addresses.as_slice())
            .unwrap_or_default()
    }

    /// `namespace/name` for log fields and error context
    pub fn key(&self) -> String {
        format!(
            "{}/{}",
            self.namespace().unwrap_or_default(),
            self.name_any()
        )
    }
}
