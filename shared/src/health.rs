use chrono::Local;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<&'static str>,
    pub timestamp: String,
}

impl HealthResponse {
    pub fn healthy(service: Option<&'static str>) -> Self {
        Self {
            status: "healthy",
            service,
            timestamp: Local::now().to_rfc3339(),
        }
    }
}
