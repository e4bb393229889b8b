//! Security scan model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Ordinal severity of a security scan result. `Ord` follows severity, so
/// `RiskLevel::Critical` compares greatest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Safe,
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Safe => "SAFE",
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
            RiskLevel::Critical => "CRITICAL",
        }
    }
}

/// One security scan run reported by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityScan {
    pub id: i64,

    /// Source repository ("owner/name")
    pub repo_name: String,

    /// SHA of the scanned commit
    pub commit_sha: String,

    /// Severity classification of the scan result
    pub risk_level: RiskLevel,

    /// Number of vulnerabilities found
    pub vulnerabilities_count: u64,

    /// Full scan report (markdown)
    pub scan_result: String,

    /// GitHub issue opened for the findings, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_issue_url: Option<String>,

    /// When the scan ran
    pub created_at: DateTime<Utc>,
}
