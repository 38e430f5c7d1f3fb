//! Gateway annotations understood by Gantry

use std::collections::BTreeMap;

use crate::reference::{ref_from_publish_service, NamespacedName};
use crate::Error;

/// Marks a Gateway as unmanaged: the controller does not provision a data
/// plane for it and instead publishes the addresses of an existing Service.
///
/// The value is either `true` (follow the controller's default publish
/// service) or a `namespace/name` Service reference.
pub const UNMANAGED_GATEWAY_ANNOTATION: &str = "gantry.dev/gateway-unmanaged";

/// Annotation value selecting the controller's default publish service
pub const UNMANAGED_GATEWAY_DEFAULT: &str = "true";

/// Return the unmanaged-mode annotation value, if present
pub fn extract_unmanaged_gateway_mode(annotations: &BTreeMap<String, String>) -> Option<&str> {
    annotations
        .get(UNMANAGED_GATEWAY_ANNOTATION)
        .map(String::as_str)
}

/// Resolve which Service an unmanaged Gateway publishes
///
/// Returns `Ok(None)` when the Gateway is not in unmanaged mode.
pub fn resolve_unmanaged_publish_service(
    annotations: &BTreeMap<String, String>,
    default: Option<&NamespacedName>,
) -> Result<Option<NamespacedName>, Error> {
    let Some(value) = extract_unmanaged_gateway_mode(annotations) else {
        return Ok(None);
    };

    let value = value.trim();
    if value.is_empty() || value.eq_ignore_ascii_case(UNMANAGED_GATEWAY_DEFAULT) {
        return default.cloned().map(Some).ok_or_else(|| {
            Error::validation_for_field(
                UNMANAGED_GATEWAY_ANNOTATION,
                "metadata.annotations",
                "gateway requests the default publish service but none is configured",
            )
        });
    }

    ref_from_publish_service(value).map(Some)
}
