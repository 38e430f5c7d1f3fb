//! Gateway API GatewayClass resource
//!
//! Cluster-scoped. Names the controller responsible for every Gateway that
//! references it; many Gateways may share one class.

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::types::Condition;

/// Spec for a GatewayClass
#[derive(CustomResource, Clone, Debug, Deserialize, Serialize, JsonSchema, PartialEq)]
#[kube(
    group = "gateway.networking.k8s.io",
    version = "v1alpha2",
    kind = "GatewayClass",
    plural = "gatewayclasses",
    shortname = "gc",
    status = "GatewayClassStatus",
    derive = "PartialEq",
    printcolumn = r#"{"name":"Controller","type":"string","jsonPath":".spec.controllerName"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct GatewayClassSpec {
    /// Controller responsible for Gateways of this class
    pub controller_name: String,

    /// Implementation-specific parameters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters_ref: Option<ParametersReference>,

    /// Free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Reference to a class parameters resource
#[derive(Clone, Debug, Deserialize, Serialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ParametersReference {
    /// API group of the referent
    pub group: String,
    /// Kind of the referent
    pub kind: String,
    /// Name of the referent
    pub name: String,
    /// Namespace of the referent, for namespaced kinds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

/// Status of a GatewayClass
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GatewayClassStatus {
    /// Class conditions
    #[serde(default)]
    pub conditions: Vec<Condition>,
}

impl GatewayClass {
    /// Whether this class is handled by the controller with the given identity
    pub fn is_controlled_by(&self, controller_name: &str) -> bool {
        self.spec.controller_name == controller_name
    }
}
