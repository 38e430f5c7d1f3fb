//! Gateway API resource definitions used by Gantry
//!
//! Only the fields the status and routing logic reads are modelled; the rest
//! of a manifest is ignored on deserialization.

mod gateway;
mod gateway_class;
mod types;

pub use gateway::{
    condition_reasons, condition_types, AddressType, AllowedRoutes, CertificateRef, Gateway,
    GatewayAddress, GatewaySpec, GatewayStatus, GatewayTlsConfig, Listener, ListenerStatus,
    RouteGroupKind, RouteNamespaces, GATEWAY_API_GROUP, MAX_CONDITIONS,
};
pub use gateway_class::{GatewayClass, GatewayClassSpec, GatewayClassStatus, ParametersReference};
pub use types::{Condition, ConditionStatus};
