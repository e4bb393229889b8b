//! Deployment API client

use serde::Deserialize;

use crate::errors::DashboardError;
use crate::http::client::ApiClient;
use crate::http::query::ListParams;
use crate::models::deployment::DeploymentEvent;

/// List of deployments response
#[derive(Debug, Clone, Deserialize)]
pub struct DeploymentsResponse {
    pub deployments: Vec<DeploymentEvent>,
    pub count: usize,
}

/// Outcome of a deployment trigger request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriggerStatus {
    Success,
    Error,
}

/// Response to a deployment trigger request
#[derive(Debug, Clone, Deserialize)]
pub struct TriggerDeploymentResponse {
    pub status: TriggerStatus,
    pub message: String,
}

/// Path for the deployment trigger endpoint
pub fn deploy_path(owner: &str, repo: &str) -> String {
    format!("/api/deploy/{}/{}", owner, repo)
}

impl ApiClient {
    /// Get recent deployment events
    pub async fn get_deployments(
        &self,
        params: &ListParams,
    ) -> Result<DeploymentsResponse, DashboardError> {
        self.get(&params.to_path("/api/deployments")).await
    }

    /// Trigger a new deployment for a repository. POST with no body.
    pub async fn trigger_deployment(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<TriggerDeploymentResponse, DashboardError> {
        self.post(&deploy_path(owner, repo)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deploy_path() {
        assert_eq!(
            deploy_path("octocat", "hello-world"),
            "/api/deploy/octocat/hello-world"
        );
    }
}
