//! Deployment event model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status of a deployment attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentStatus {
    Analyzing,
    Deploying,
    Success,
    Failed,
    Updated,
}

impl DeploymentStatus {
    /// Terminal statuses will not change again; analyzing and deploying are
    /// still in progress.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            DeploymentStatus::Success | DeploymentStatus::Failed | DeploymentStatus::Updated
        )
    }

    pub fn is_in_progress(&self) -> bool {
        !self.is_terminal()
    }
}

/// One deployment attempt reported by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeploymentEvent {
    pub id: i64,

    /// Source repository ("owner/name")
    pub repo_name: String,

    /// SHA of the commit being deployed
    pub commit_sha: String,

    /// Current status
    pub status: DeploymentStatus,

    /// URL of the deployed service, once one exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_url: Option<String>,

    /// Failure description, for failed deployments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,

    /// When the attempt started
    pub created_at: DateTime<Utc>,

    /// When the attempt reached a terminal status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}
