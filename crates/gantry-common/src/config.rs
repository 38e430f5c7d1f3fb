//! Gateway controller configuration
//!
//! The controller identity is passed explicitly to every ownership check
//! rather than read from a global.

use clap::Args;

use crate::reference::{ref_from_publish_service, NamespacedName};
use crate::Error;

/// Default `controllerName` this controller advertises
pub const DEFAULT_CONTROLLER_NAME: &str = "gantry.dev/gateway-controller";

/// Validated configuration for the gateway controller
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GatewayControllerConfig {
    /// Identity matched against `GatewayClass.spec.controllerName`
    pub controller_name: String,
    /// Service whose addresses unmanaged Gateways publish by default
    pub publish_service: Option<NamespacedName>,
}

impl Default for GatewayControllerConfig {
    fn default() -> Self {
        Self {
            controller_name: DEFAULT_CONTROLLER_NAME.to_string(),
            publish_service: None,
        }
    }
}

impl GatewayControllerConfig {
    /// Create a config with the given controller identity
    pub fn new(controller_name: impl Into<String>) -> Self {
        Self {
            controller_name: controller_name.into(),
            publish_service: None,
        }
    }

    /// Set the default publish service from a `namespace/name` string
    pub fn with_publish_service(mut self, publish_service: &str) -> Result<Self, Error> {
        self.publish_service = Some(ref_from_publish_service(publish_service)?);
        Ok(self)
    }
}

/// Command-line arguments for the gateway controller
///
/// Meant to be `#[command(flatten)]`ed into the host binary's parser.
#[derive(Args, Clone, Debug)]
pub struct GatewayControllerArgs {
    /// controllerName this instance reconciles GatewayClasses for
    #[arg(
        long = "gateway-controller-name",
        env = "GANTRY_GATEWAY_CONTROLLER_NAME",
        default_value = DEFAULT_CONTROLLER_NAME
    )]
    pub controller_name: String,

    /// Service (namespace/name) whose addresses unmanaged Gateways publish
    #[arg(long = "publish-service", env = "GANTRY_PUBLISH_SERVICE")]
    pub publish_service: Option<String>,
}

impl TryFrom<GatewayControllerArgs> for GatewayControllerConfig {
    type Error = Error;

    fn try_from(args: GatewayControllerArgs) -> Result<Self, Self::Error> {
        if args.controller_name.trim().is_empty() {
            return Err(Error::validation_for_field(
                "gateway controller",
                "--gateway-controller-name",
                "controller name cannot be empty",
            ));
        }

        let publish_service = args
            .publish_service
            .as_deref()
            .map(ref_from_publish_service)
            .transpose()?;

        Ok(Self {
            controller_name: args.controller_name,
            publish_service,
        })
    }
}
