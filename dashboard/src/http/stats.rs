//! Statistics API client

use crate::errors::DashboardError;
use crate::http::client::ApiClient;
use crate::models::stats::StatMetrics;

impl ApiClient {
    /// Get aggregate deployment and scan counters
    pub async fn get_stats(&self) -> Result<StatMetrics, DashboardError> {
        self.get("/api/stats").await
    }
}
