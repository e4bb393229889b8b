//! Dashboard view-model aggregation

use std::sync::Arc;

use async_trait::async_trait;
use futures::join;

use crate::errors::{ApiFailure, DashboardError};
use crate::http::client::ApiClient;
use crate::http::query::ListParams;
use crate::models::deployment::DeploymentEvent;
use crate::models::scan::SecurityScan;
use crate::models::service::DeployedService;
use crate::models::stats::StatMetrics;
use crate::state::resource::{BoxedFetcher, Fetcher, Resource};

/// Number of feed entries requested for the dashboard
pub const FEED_LIMIT: u32 = 20;

struct StatsFetcher {
    client: Arc<ApiClient>,
}

#[async_trait]
impl Fetcher for StatsFetcher {
    type Params = ();
    type Output = StatMetrics;

    async fn fetch(&self, _params: &()) -> Result<StatMetrics, DashboardError> {
        self.client.get_stats().await
    }
}

struct ServicesFetcher {
    client: Arc<ApiClient>,
}

#[async_trait]
impl Fetcher for ServicesFetcher {
    type Params = ();
    type Output = Vec<DeployedService>;

    async fn fetch(&self, _params: &()) -> Result<Vec<DeployedService>, DashboardError> {
        Ok(self.client.get_services().await?.services)
    }
}

struct DeploymentsFetcher {
    client: Arc<ApiClient>,
}

#[async_trait]
impl Fetcher for DeploymentsFetcher {
    type Params = ListParams;
    type Output = Vec<DeploymentEvent>;

    async fn fetch(&self, params: &ListParams) -> Result<Vec<DeploymentEvent>, DashboardError> {
        Ok(self.client.get_deployments(params).await?.deployments)
    }
}

struct ScansFetcher {
    client: Arc<ApiClient>,
}

#[async_trait]
impl Fetcher for ScansFetcher {
    type Params = ListParams;
    type Output = Vec<SecurityScan>;

    async fn fetch(&self, params: &ListParams) -> Result<Vec<SecurityScan>, DashboardError> {
        Ok(self.client.get_security_scans(params).await?.scans)
    }
}

/// Per-resource error map. One failing resource never blocks the others
/// from rendering.
#[derive(Debug, Clone, Default)]
pub struct DashboardErrors {
    pub stats: Option<ApiFailure>,
    pub services: Option<ApiFailure>,
    pub deployments: Option<ApiFailure>,
    pub security_scans: Option<ApiFailure>,
}

impl DashboardErrors {
    /// True when any resource failed; drives the connection banner
    pub fn has_any(&self) -> bool {
        self.stats.is_some()
            || self.services.is_some()
            || self.deployments.is_some()
            || self.security_scans.is_some()
    }
}

/// Composed dashboard view-model, recomputed from the resource snapshots on
/// every call
#[derive(Debug, Clone)]
pub struct DashboardView {
    pub stats: Option<StatMetrics>,
    pub services: Vec<DeployedService>,
    pub deployments: Vec<DeploymentEvent>,
    pub security_scans: Vec<SecurityScan>,

    /// True while any constituent resource is still loading
    pub is_loading: bool,

    pub errors: DashboardErrors,
}

impl DashboardView {
    /// Percentage of successful deployments, 0 until stats arrive
    pub fn success_rate(&self) -> u32 {
        self.stats.as_ref().map(|s| s.success_rate()).unwrap_or(0)
    }
}

/// Aggregates the four dashboard resources. Reads the constituent states,
/// never mutates them beyond the refetch operations they expose.
pub struct Dashboard {
    stats: Resource<BoxedFetcher<(), StatMetrics>>,
    services: Resource<BoxedFetcher<(), Vec<DeployedService>>>,
    deployments: Resource<BoxedFetcher<ListParams, Vec<DeploymentEvent>>>,
    security_scans: Resource<BoxedFetcher<ListParams, Vec<SecurityScan>>>,
}

impl Dashboard {
    /// Create a dashboard backed by the real API client
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self::with_fetchers(
            Box::new(StatsFetcher {
                client: client.clone(),
            }),
            Box::new(ServicesFetcher {
                client: client.clone(),
            }),
            Box::new(DeploymentsFetcher {
                client: client.clone(),
            }),
            Box::new(ScansFetcher { client }),
            ListParams::with_limit(FEED_LIMIT),
        )
    }

    /// Create a dashboard from explicit fetchers
    pub fn with_fetchers(
        stats: BoxedFetcher<(), StatMetrics>,
        services: BoxedFetcher<(), Vec<DeployedService>>,
        deployments: BoxedFetcher<ListParams, Vec<DeploymentEvent>>,
        security_scans: BoxedFetcher<ListParams, Vec<SecurityScan>>,
        feed_params: ListParams,
    ) -> Self {
        Self {
            stats: Resource::new(stats, ()),
            services: Resource::new(services, ()),
            deployments: Resource::new(deployments, feed_params.clone()),
            security_scans: Resource::new(security_scans, feed_params),
        }
    }

    pub fn stats(&self) -> &Resource<BoxedFetcher<(), StatMetrics>> {
        &self.stats
    }

    pub fn services(&self) -> &Resource<BoxedFetcher<(), Vec<DeployedService>>> {
        &self.services
    }

    pub fn deployments(&self) -> &Resource<BoxedFetcher<ListParams, Vec<DeploymentEvent>>> {
        &self.deployments
    }

    pub fn security_scans(&self) -> &Resource<BoxedFetcher<ListParams, Vec<SecurityScan>>> {
        &self.security_scans
    }

    /// Refetch all four resources concurrently. Waits for every fetch to
    /// complete, then reports the first failure if any.
    pub async fn refetch_all(&self) -> Result<(), DashboardError> {
        let (stats, services, deployments, scans) = join!(
            self.stats.refetch(),
            self.services.refetch(),
            self.deployments.refetch(),
            self.security_scans.refetch(),
        );
        stats.and(services).and(deployments).and(scans)
    }

    /// Change the limit/repo filters on both feed resources. Each refetches
    /// only when its parameters actually changed.
    pub async fn set_feed_params(&self, params: ListParams) -> Result<(), DashboardError> {
        let (deployments, scans) = join!(
            self.deployments.set_params(params.clone()),
            self.security_scans.set_params(params),
        );
        deployments.and(scans)
    }

    /// Compose the current view-model from the resource snapshots
    pub async fn view(&self) -> DashboardView {
        let stats = self.stats.snapshot().await;
        let services = self.services.snapshot().await;
        let deployments = self.deployments.snapshot().await;
        let scans = self.security_scans.snapshot().await;

        DashboardView {
            is_loading: stats.is_loading
                || services.is_loading
                || deployments.is_loading
                || scans.is_loading,
            errors: DashboardErrors {
                stats: stats.error,
                services: services.error,
                deployments: deployments.error,
                security_scans: scans.error,
            },
            stats: stats.data,
            services: services.data.unwrap_or_default(),
            deployments: deployments.data.unwrap_or_default(),
            security_scans: scans.data.unwrap_or_default(),
        }
    }
}
