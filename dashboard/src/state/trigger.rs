//! Deploy-trigger state container

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::errors::{ApiFailure, DashboardError};
use crate::http::client::ApiClient;
use crate::http::deployments::TriggerDeploymentResponse;

/// Observable state of the trigger operation
#[derive(Debug, Clone, Default)]
pub struct TriggerState {
    /// True while a trigger request is in flight
    pub is_loading: bool,

    /// Failure of the most recent trigger, if it failed
    pub error: Option<ApiFailure>,
}

/// Wraps the deployment trigger endpoint with loading/error state. Unlike
/// the read resources it starts idle and holds no data.
pub struct DeployTrigger {
    client: Arc<ApiClient>,
    state: RwLock<TriggerState>,
}

impl DeployTrigger {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            client,
            state: RwLock::new(TriggerState::default()),
        }
    }

    pub async fn snapshot(&self) -> TriggerState {
        self.state.read().await.clone()
    }

    /// Trigger a deployment for `owner/repo`. The backend response is
    /// returned to the caller as well as any failure being recorded in the
    /// trigger state.
    pub async fn trigger(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<TriggerDeploymentResponse, DashboardError> {
        {
            let mut state = self.state.write().await;
            state.is_loading = true;
            state.error = None;
        }

        let result = self.client.trigger_deployment(owner, repo).await;

        let mut state = self.state.write().await;
        state.is_loading = false;
        match result {
            Ok(response) => Ok(response),
            Err(err) => {
                state.error = Some(ApiFailure::from_error(&err));
                Err(err)
            }
        }
    }
}
