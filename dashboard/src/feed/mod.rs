//! Activity feed assembly

pub mod style;
pub mod time;

use chrono::{DateTime, Utc};

use crate::models::deployment::DeploymentEvent;
use crate::models::scan::SecurityScan;

/// One entry in the merged activity timeline. Display-only; built fresh for
/// each render and never persisted.
#[derive(Debug, Clone)]
pub enum ActivityItem {
    Deployment(DeploymentEvent),
    Security(SecurityScan),
}

impl ActivityItem {
    pub fn created_at(&self) -> DateTime<Utc> {
        match self {
            ActivityItem::Deployment(event) => event.created_at,
            ActivityItem::Security(scan) => scan.created_at,
        }
    }

    pub fn repo_name(&self) -> &str {
        match self {
            ActivityItem::Deployment(event) => &event.repo_name,
            ActivityItem::Security(scan) => &scan.repo_name,
        }
    }

    pub fn commit_sha(&self) -> &str {
        match self {
            ActivityItem::Deployment(event) => &event.commit_sha,
            ActivityItem::Security(scan) => &scan.commit_sha,
        }
    }
}

/// Merge deployment events and security scans into one timeline, most
/// recent first. The sort is stable, so entries with equal timestamps keep
/// the deployments-before-scans concatenation order.
pub fn merge_activity(
    deployments: &[DeploymentEvent],
    scans: &[SecurityScan],
) -> Vec<ActivityItem> {
    let mut items: Vec<ActivityItem> = deployments
        .iter()
        .cloned()
        .map(ActivityItem::Deployment)
        .chain(scans.iter().cloned().map(ActivityItem::Security))
        .collect();

    items.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
    items
}

/// First seven characters of a commit SHA for display
pub fn short_sha(sha: &str) -> &str {
    sha.get(..7).unwrap_or(sha)
}
