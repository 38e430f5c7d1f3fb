//! Common types for Gantry: Gateway API resources, errors, and configuration

#![deny(missing_docs)]

pub mod annotations;
pub mod config;
pub mod crd;
pub mod error;
pub mod reference;
pub mod telemetry;

pub use config::{GatewayControllerArgs, GatewayControllerConfig, DEFAULT_CONTROLLER_NAME};
pub use error::Error;
pub use reference::{ref_from_publish_service, NamespacedName};

/// Result type alias using our custom Error type
pub type Result<T> = std::result::Result<T, Error>;
