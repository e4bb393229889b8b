//! Deployed service model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Cloud provider a service runs on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Gcp,
    Aws,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Gcp => "gcp",
            Provider::Aws => "aws",
        }
    }
}

/// One currently running deployment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeployedService {
    /// Stable identity key
    pub id: i64,

    /// Source repository ("owner/name")
    pub repo_name: String,

    /// Name of the deployed cloud service
    pub service_name: String,

    /// Public URL of the running service
    pub service_url: String,

    /// Cloud provider
    pub provider: Provider,

    /// Provider region
    pub region: String,

    /// SHA of the last deployed commit
    pub last_commit_sha: String,

    /// How many times this service has been deployed
    pub deploy_count: u64,

    /// When the service was last updated
    pub last_updated_at: DateTime<Utc>,
}
