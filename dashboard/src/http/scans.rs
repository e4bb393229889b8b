//! Security scan API client

use serde::Deserialize;

use crate::errors::DashboardError;
use crate::http::client::ApiClient;
use crate::http::query::ListParams;
use crate::models::scan::SecurityScan;

/// List of security scans response
#[derive(Debug, Clone, Deserialize)]
pub struct SecurityScansResponse {
    pub scans: Vec<SecurityScan>,
    pub count: usize,
}

impl ApiClient {
    /// Get recent security scan runs
    pub async fn get_security_scans(
        &self,
        params: &ListParams,
    ) -> Result<SecurityScansResponse, DashboardError> {
        self.get(&params.to_path("/api/security-scans")).await
    }
}
