//! Namespace-qualified object references
//!
//! The publish service (the Service whose addresses a Gateway advertises) is
//! configured as a `namespace/name` string, both on the command line and in
//! the unmanaged-gateway annotation.

use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Flag name quoted in publish-service parse errors
pub const PUBLISH_SERVICE_FLAG: &str = "--publish-service";

/// Namespace and name of a namespaced object
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NamespacedName {
    /// Object namespace
    pub namespace: String,
    /// Object name
    pub name: String,
}

impl NamespacedName {
    /// Create a reference from its parts
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for NamespacedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}

impl FromStr for NamespacedName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ref_from_publish_service(s)
    }
}

/// Split a publish service string in `namespace/name` form
///
/// Anything that does not split into exactly two parts on `/` is rejected,
/// including `a/b/c`. Stricter than a bare split: `ns/` and `/name` are
/// rejected too, since neither names a Service.
pub fn ref_from_publish_service(publish_service: &str) -> Result<NamespacedName, Error> {
    let parts: Vec<&str> = publish_service.splitn(3, '/').collect();
    match parts.as_slice() {
        [namespace, name] if !namespace.is_empty() && !name.is_empty() => {
            Ok(NamespacedName::new(*namespace, *name))
        }
        _ => Err(Error::validation(format!(
            "{PUBLISH_SERVICE_FLAG} expected in format 'namespace/name' but got {publish_service}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_namespace_and_name() {
        let reference = ref_from_publish_service("ns/name").unwrap();
        assert_eq!(reference, NamespacedName::new("ns", "name"));
        assert_eq!(reference.to_string(), "ns/name");
    }

    #[test]
    fn rejects_value_without_separator() {
        let err = ref_from_publish_service("badvalue").unwrap_err();
        assert!(err.to_string().contains("--publish-service"));
        assert!(err.to_string().contains("badvalue"));
    }

    #[test]
    fn rejects_more_than_one_separator() {
        assert!(ref_from_publish_service("a/b/c").is_err());
        assert!(ref_from_publish_service("a/b/c/d").is_err());
    }

    #[test]
    fn rejects_empty_parts() {
        assert!(ref_from_publish_service("").is_err());
        assert!(ref_from_publish_service("/name").is_err());
        assert!(ref_from_publish_service("ns/").is_err());
        assert!(ref_from_publish_service("/").is_err());
    }

    #[test]
    fn from_str_uses_publish_service_format() {
        let reference: NamespacedName = "edge/proxy".parse().unwrap();
        assert_eq!(reference.namespace, "edge");
        assert_eq!(reference.name, "proxy");
        assert!("proxy".parse::<NamespacedName>().is_err());
    }
}
