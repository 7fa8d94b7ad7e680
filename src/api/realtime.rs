use super::client::{ApiClient, ApiError};
use crate::models::TelemetrySnapshot;

/// Path of the realtime snapshot endpoint
pub const REALTIME_PATH: &str = "/api/realtime";

impl ApiClient {
    /// Get the latest cost and temperature snapshot
    pub async fn get_realtime(&self) -> Result<TelemetrySnapshot, ApiError> {
        self.get(REALTIME_PATH).await
    }
}
