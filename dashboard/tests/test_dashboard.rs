//! Dashboard aggregation tests

use std::marker::PhantomData;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use kovert_dashboard::errors::DashboardError;
use kovert_dashboard::http::query::ListParams;
use kovert_dashboard::models::deployment::{DeploymentEvent, DeploymentStatus};
use kovert_dashboard::models::scan::SecurityScan;
use kovert_dashboard::models::service::DeployedService;
use kovert_dashboard::models::stats::StatMetrics;
use kovert_dashboard::state::dashboard::Dashboard;
use kovert_dashboard::state::resource::{BoxedFetcher, Fetcher};

struct OkFetcher<P, T> {
    value: T,
    calls: Arc<AtomicUsize>,
    _marker: PhantomData<fn(P)>,
}

impl<P, T> OkFetcher<P, T> {
    fn boxed(value: T) -> (BoxedFetcher<P, T>, Arc<AtomicUsize>)
    where
        P: Clone + PartialEq + Send + Sync + 'static,
        T: Clone + Send + Sync + 'static,
    {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Box::new(Self {
                value,
                calls: calls.clone(),
                _marker: PhantomData,
            }),
            calls,
        )
    }
}

#[async_trait]
impl<P, T> Fetcher for OkFetcher<P, T>
where
    P: Clone + PartialEq + Send + Sync,
    T: Clone + Send + Sync,
{
    type Params = P;
    type Output = T;

    async fn fetch(&self, _params: &P) -> Result<T, DashboardError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.value.clone())
    }
}

struct FailFetcher<P, T> {
    status: u16,
    _marker: PhantomData<fn(P) -> T>,
}

impl<P, T> FailFetcher<P, T> {
    fn boxed(status: u16) -> BoxedFetcher<P, T>
    where
        P: Clone + PartialEq + Send + Sync + 'static,
        T: Clone + Send + Sync + 'static,
    {
        Box::new(Self {
            status,
            _marker: PhantomData,
        })
    }
}

#[async_trait]
impl<P, T> Fetcher for FailFetcher<P, T>
where
    P: Clone + PartialEq + Send + Sync,
    T: Clone + Send + Sync,
{
    type Params = P;
    type Output = T;

    async fn fetch(&self, _params: &P) -> Result<T, DashboardError> {
        Err(DashboardError::ApiError {
            status: self.status,
            body: "connection refused by backend".to_string(),
        })
    }
}

fn ts(s: &str) -> DateTime<Utc> {
    s.parse().unwrap()
}

fn sample_stats() -> StatMetrics {
    StatMetrics {
        total_deployments: 10,
        successful_deployments: 8,
        updated_deployments: 1,
        failed_deployments: 1,
        total_security_scans: 5,
        critical_vulnerabilities: 2,
        high_vulnerabilities: 3,
    }
}

fn sample_deployment() -> DeploymentEvent {
    DeploymentEvent {
        id: 1,
        repo_name: "octocat/hello-world".to_string(),
        commit_sha: "a1b2c3d4e5f60718293a4b5c6d7e8f9012345678".to_string(),
        status: DeploymentStatus::Success,
        service_url: Some("https://hello.run.app".to_string()),
        error_message: None,
        created_at: ts("2025-06-01T10:00:00Z"),
        completed_at: Some(ts("2025-06-01T10:02:00Z")),
    }
}

/// Dashboard where every resource succeeds
fn all_ok_dashboard() -> Dashboard {
    let (stats, _) = OkFetcher::boxed(sample_stats());
    let (services, _) = OkFetcher::boxed(Vec::<DeployedService>::new());
    let (deployments, _) = OkFetcher::boxed(vec![sample_deployment()]);
    let (scans, _) = OkFetcher::boxed(Vec::<SecurityScan>::new());
    Dashboard::with_fetchers(stats, services, deployments, scans, ListParams::with_limit(20))
}

#[tokio::test]
async fn test_loading_until_all_settle() {
    let dashboard = all_ok_dashboard();

    // Everything starts loading
    assert!(dashboard.view().await.is_loading);

    // Still loading while any one resource has not settled
    dashboard.services().refetch().await.unwrap();
    dashboard.deployments().refetch().await.unwrap();
    dashboard.security_scans().refetch().await.unwrap();
    assert!(dashboard.view().await.is_loading);

    dashboard.stats().refetch().await.unwrap();
    assert!(!dashboard.view().await.is_loading);
}

#[tokio::test]
async fn test_refetch_all_populates_view() {
    let dashboard = all_ok_dashboard();
    dashboard.refetch_all().await.unwrap();

    let view = dashboard.view().await;
    assert!(!view.is_loading);
    assert!(!view.errors.has_any());
    assert_eq!(view.stats.as_ref().unwrap().total_deployments, 10);
    assert_eq!(view.deployments.len(), 1);
    assert!(view.services.is_empty());
    assert_eq!(view.success_rate(), 80);
}

#[tokio::test]
async fn test_partial_failure_is_isolated() {
    let stats = FailFetcher::boxed(503);
    let (services, _) = OkFetcher::boxed(Vec::<DeployedService>::new());
    let (deployments, _) = OkFetcher::boxed(vec![sample_deployment()]);
    let (scans, _) = OkFetcher::boxed(Vec::<SecurityScan>::new());
    let dashboard =
        Dashboard::with_fetchers(stats, services, deployments, scans, ListParams::with_limit(20));

    // The barrier waits for all four, then reports the failure
    assert!(dashboard.refetch_all().await.is_err());

    let view = dashboard.view().await;
    assert!(!view.is_loading);

    // Only the failing resource carries an error
    let failure = view.errors.stats.as_ref().expect("stats should have failed");
    assert_eq!(failure.status, Some(503));
    assert!(view.errors.services.is_none());
    assert!(view.errors.deployments.is_none());
    assert!(view.errors.security_scans.is_none());
    assert!(view.errors.has_any());

    // The successful resources still rendered their data
    assert_eq!(view.deployments.len(), 1);
    assert!(view.stats.is_none());
    assert_eq!(view.success_rate(), 0);
}

#[tokio::test]
async fn test_set_feed_params_refetches_both_feeds() {
    let (stats, stats_calls) = OkFetcher::boxed(sample_stats());
    let (services, _) = OkFetcher::boxed(Vec::<DeployedService>::new());
    let (deployments, deployment_calls) = OkFetcher::boxed(vec![sample_deployment()]);
    let (scans, scan_calls) = OkFetcher::boxed(Vec::<SecurityScan>::new());
    let dashboard =
        Dashboard::with_fetchers(stats, services, deployments, scans, ListParams::with_limit(20));

    // Unchanged parameters are a no-op
    dashboard
        .set_feed_params(ListParams::with_limit(20))
        .await
        .unwrap();
    assert_eq!(deployment_calls.load(Ordering::SeqCst), 0);
    assert_eq!(scan_calls.load(Ordering::SeqCst), 0);

    // A repo filter re-runs both feed resources, not stats or services
    dashboard
        .set_feed_params(ListParams {
            limit: Some(20),
            repo: Some("octocat/hello-world".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(deployment_calls.load(Ordering::SeqCst), 1);
    assert_eq!(scan_calls.load(Ordering::SeqCst), 1);
    assert_eq!(stats_calls.load(Ordering::SeqCst), 0);
}
