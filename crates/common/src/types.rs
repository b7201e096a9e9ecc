use serde::{Deserialize, Serialize};

/// Greeting returned by the root endpoint.
pub const GREETING: &str = "Hello from Container!";

/// Platform label used when `PLATFORM` is not set.
pub const UNKNOWN_PLATFORM: &str = "Unknown";

/// Name of the environment variable holding the platform label.
pub const PLATFORM_ENV: &str = "PLATFORM";

/// Body of `GET /`.
///
/// Built fresh for every request; all three fields are always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
    pub hostname: String,
    pub platform: String,
}

impl RootResponse {
    /// Creates the root document for the given host, falling back to
    /// [`UNKNOWN_PLATFORM`] when no platform label is available.
    pub fn new(hostname: impl Into<String>, platform: Option<String>) -> Self {
        Self {
            message: GREETING.to_string(),
            hostname: hostname.into(),
            platform: platform.unwrap_or_else(|| UNKNOWN_PLATFORM.to_string()),
        }
    }
}

/// Liveness status reported by `GET /health`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    #[default]
    Healthy,
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HealthStatus::Healthy => write!(f, "healthy"),
        }
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct HealthResponse {
    pub status: HealthStatus,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: HealthStatus::Healthy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_response_uses_fixed_greeting() {
        let response = RootResponse::new("box-1", Some("docker".to_string()));
        assert_eq!(response.message, "Hello from Container!");
        assert_eq!(response.hostname, "box-1");
        assert_eq!(response.platform, "docker");
    }

    #[test]
    fn root_response_defaults_platform_to_unknown() {
        let response = RootResponse::new("box-1", None);
        assert_eq!(response.platform, "Unknown");
    }

    #[test]
    fn root_response_keeps_empty_platform() {
        let response = RootResponse::new("box-1", Some(String::new()));
        assert_eq!(response.platform, "");
    }

    #[test]
    fn root_response_serializes_string_fields_only() {
        let response = RootResponse::new("box-1", None);
        let json = serde_json::to_value(&response).unwrap();
        let object = json.as_object().unwrap();

        assert_eq!(object.len(), 3);
        assert!(object.values().all(serde_json::Value::is_string));
        assert_eq!(json["message"], GREETING);
        assert_eq!(json["hostname"], "box-1");
        assert_eq!(json["platform"], UNKNOWN_PLATFORM);
    }

    #[test]
    fn health_response_serialization() {
        let json = serde_json::to_string(&HealthResponse::healthy()).unwrap();
        assert_eq!(json, r#"{"status":"healthy"}"#);
    }

    #[test]
    fn health_status_display_matches_wire_format() {
        let wire = serde_json::to_value(HealthStatus::Healthy).unwrap();
        assert_eq!(wire, HealthStatus::Healthy.to_string());
    }

    #[test]
    fn health_response_deserializes() {
        let parsed: HealthResponse = serde_json::from_str(r#"{"status":"healthy"}"#).unwrap();
        assert_eq!(parsed, HealthResponse::default());
    }
}
