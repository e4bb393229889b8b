//! Services API client

use serde::Deserialize;

use crate::errors::DashboardError;
use crate::http::client::ApiClient;
use crate::models::service::DeployedService;

/// List of services response
#[derive(Debug, Clone, Deserialize)]
pub struct ServicesResponse {
    pub services: Vec<DeployedService>,
    pub count: usize,
}

impl ApiClient {
    /// Get the currently running services
    pub async fn get_services(&self) -> Result<ServicesResponse, DashboardError> {
        self.get("/api/services").await
    }
}
