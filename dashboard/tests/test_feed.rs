//! Activity feed unit tests

use chrono::{DateTime, Utc};

use kovert_dashboard::feed::{merge_activity, short_sha, ActivityItem};
use kovert_dashboard::models::deployment::{DeploymentEvent, DeploymentStatus};
use kovert_dashboard::models::scan::{RiskLevel, SecurityScan};

fn ts(s: &str) -> DateTime<Utc> {
    s.parse().unwrap()
}

fn create_deployment(id: i64, created_at: &str) -> DeploymentEvent {
    DeploymentEvent {
        id,
        repo_name: "octocat/hello-world".to_string(),
        commit_sha: "a1b2c3d4e5f60718293a4b5c6d7e8f9012345678".to_string(),
        status: DeploymentStatus::Success,
        service_url: None,
        error_message: None,
        created_at: ts(created_at),
        completed_at: None,
    }
}

fn create_scan(id: i64, created_at: &str) -> SecurityScan {
    SecurityScan {
        id,
        repo_name: "octocat/hello-world".to_string(),
        commit_sha: "a1b2c3d4e5f60718293a4b5c6d7e8f9012345678".to_string(),
        risk_level: RiskLevel::Low,
        vulnerabilities_count: 0,
        scan_result: "No significant findings".to_string(),
        github_issue_url: None,
        created_at: ts(created_at),
    }
}

#[test]
fn test_merge_sorts_most_recent_first() {
    let deployments = vec![
        create_deployment(1, "2025-06-01T10:00:00Z"),
        create_deployment(2, "2025-06-03T10:00:00Z"),
    ];
    let scans = vec![
        create_scan(1, "2025-06-02T10:00:00Z"),
        create_scan(2, "2025-06-04T10:00:00Z"),
    ];

    let merged = merge_activity(&deployments, &scans);
    assert_eq!(merged.len(), 4);

    // Adjacent pairs are non-increasing in created_at
    for pair in merged.windows(2) {
        assert!(pair[0].created_at() >= pair[1].created_at());
    }

    assert!(matches!(&merged[0], ActivityItem::Security(s) if s.id == 2));
    assert!(matches!(&merged[1], ActivityItem::Deployment(d) if d.id == 2));
    assert!(matches!(&merged[2], ActivityItem::Security(s) if s.id == 1));
    assert!(matches!(&merged[3], ActivityItem::Deployment(d) if d.id == 1));
}

#[test]
fn test_merge_tie_break_keeps_deployments_first() {
    let deployments = vec![create_deployment(7, "2025-06-01T10:00:00Z")];
    let scans = vec![create_scan(9, "2025-06-01T10:00:00Z")];

    let merged = merge_activity(&deployments, &scans);
    assert!(matches!(&merged[0], ActivityItem::Deployment(d) if d.id == 7));
    assert!(matches!(&merged[1], ActivityItem::Security(s) if s.id == 9));
}

#[test]
fn test_merge_empty_inputs() {
    assert!(merge_activity(&[], &[]).is_empty());

    let scans = vec![create_scan(1, "2025-06-01T10:00:00Z")];
    let merged = merge_activity(&[], &scans);
    assert_eq!(merged.len(), 1);
}

#[test]
fn test_status_styles_are_distinct_labels() {
    let statuses = [
        DeploymentStatus::Analyzing,
        DeploymentStatus::Deploying,
        DeploymentStatus::Success,
        DeploymentStatus::Failed,
        DeploymentStatus::Updated,
    ];
    let labels: Vec<&str> = statuses.iter().map(|s| s.style().label).collect();
    assert_eq!(
        labels,
        vec!["Analyzing", "Deploying", "Success", "Failed", "Updated"]
    );
}

#[test]
fn test_risk_styles() {
    assert_eq!(RiskLevel::Critical.style().label, "Critical");
    assert_eq!(RiskLevel::High.style().label, "High");
    assert_eq!(RiskLevel::Medium.style().label, "Medium");
    assert_eq!(RiskLevel::Low.style().label, "Low");
    assert_eq!(RiskLevel::Safe.style().label, "Safe");
}

#[test]
fn test_vulnerability_badge_only_when_found() {
    let mut scan = create_scan(1, "2025-06-01T10:00:00Z");
    assert_eq!(scan.vulnerability_badge(), None);

    scan.vulnerabilities_count = 3;
    assert_eq!(scan.vulnerability_badge(), Some("3 issues".to_string()));
}

#[test]
fn test_short_sha() {
    assert_eq!(short_sha("a1b2c3d4e5f6"), "a1b2c3d");
    assert_eq!(short_sha("abc"), "abc");
    assert_eq!(short_sha(""), "");
}
