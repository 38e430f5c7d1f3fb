//! Supporting types shared by the Gateway API resources

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Condition status following Kubernetes conventions
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq, Eq)]
pub enum ConditionStatus {
    /// Condition is true
    True,
    /// Condition is false
    False,
    /// Condition status is unknown
    #[default]
    Unknown,
}

impl std::fmt::Display for ConditionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::True => write!(f, "True"),
            Self::False => write!(f, "False"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Kubernetes-style condition for status reporting
///
/// Used on Gateways, GatewayClasses and individual listener statuses.
/// `observed_generation` records which spec generation the condition was
/// computed against, so stale conditions can be told apart from fresh ones.
#[derive(Clone, Debug, Deserialize, Serialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    /// Type of condition (e.g., Ready, Scheduled)
    #[serde(rename = "type")]
    pub type_: String,

    /// Status of the condition (True, False, Unknown)
    pub status: ConditionStatus,

    /// Machine-readable reason for the condition
    pub reason: String,

    /// Human-readable message
    #[serde(default)]
    pub message: String,

    /// Generation of the resource this condition was computed against
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observed_generation: Option<i64>,

    /// Last time the condition transitioned
    pub last_transition_time: DateTime<Utc>,
}

impl Condition {
    /// Create a new condition with the current timestamp
    pub fn new(
        type_: impl Into<String>,
        status: ConditionStatus,
        reason: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            type_: type_.into(),
            status,
            reason: reason.into(),
            message: message.into(),
            observed_generation: None,
            last_transition_time: Utc::now(),
        }
    }

    /// Stamp the generation this condition was computed against
    pub fn observed_at(mut self, generation: i64) -> Self {
        self.observed_generation = Some(generation);
        self
    }

    /// Override the transition time (callers with an injected clock)
    pub fn transitioned_at(mut self, time: DateTime<Utc>) -> Self {
        self.last_transition_time = time;
        self
    }

    /// Whether this condition has the given type, reason and status
    pub fn matches(&self, type_: &str, reason: &str, status: ConditionStatus) -> bool {
        self.type_ == type_ && self.reason == reason && self.status == status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    /// Story: conditions serialize with Kubernetes field names
    #[test]
    fn story_condition_uses_kubernetes_field_names() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let condition = Condition::new("Ready", ConditionStatus::True, "Ready", "listening")
            .observed_at(3)
            .transitioned_at(at);

        let json = serde_json::to_value(&condition).unwrap();
        assert_eq!(json["type"], "Ready");
        assert_eq!(json["status"], "True");
        assert_eq!(json["observedGeneration"], 3);
        assert_eq!(json["lastTransitionTime"], "2024-05-01T12:00:00Z");

        let back: Condition = serde_json::from_value(json).unwrap();
        assert_eq!(back, condition);
    }

    #[test]
    fn observed_generation_is_omitted_when_unset() {
        let condition = Condition::new("Scheduled", ConditionStatus::True, "Scheduled", "");
        let json = serde_json::to_value(&condition).unwrap();
        assert!(json.get("observedGeneration").is_none());
    }

    #[test]
    fn matches_checks_type_reason_and_status() {
        let condition = Condition::new("Scheduled", ConditionStatus::True, "Scheduled", "");
        assert!(condition.matches("Scheduled", "Scheduled", ConditionStatus::True));
        assert!(!condition.matches("Scheduled", "Scheduled", ConditionStatus::False));
        assert!(!condition.matches("Scheduled", "NoResources", ConditionStatus::True));
        assert!(!condition.matches("Ready", "Scheduled", ConditionStatus::True));
    }

    #[test]
    fn condition_status_default_and_display() {
        assert_eq!(ConditionStatus::default(), ConditionStatus::Unknown);
        assert_eq!(ConditionStatus::True.to_string(), "True");
        assert_eq!(ConditionStatus::False.to_string(), "False");
        assert_eq!(ConditionStatus::Unknown.to_string(), "Unknown");
    }
}
