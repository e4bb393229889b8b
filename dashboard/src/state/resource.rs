//! Per-resource refreshable state containers

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::errors::{ApiFailure, DashboardError};

/// Fetch seam between a resource container and the backend client.
/// Production fetchers wrap an `ApiClient`; tests substitute their own.
#[async_trait]
pub trait Fetcher: Send + Sync {
    type Params: Clone + PartialEq + Send + Sync;
    type Output: Clone + Send + Sync;

    async fn fetch(&self, params: &Self::Params) -> Result<Self::Output, DashboardError>;
}

#[async_trait]
impl<P, T> Fetcher for Box<dyn Fetcher<Params = P, Output = T>>
where
    P: Clone + PartialEq + Send + Sync,
    T: Clone + Send + Sync,
{
    type Params = P;
    type Output = T;

    async fn fetch(&self, params: &P) -> Result<T, DashboardError> {
        (**self).fetch(params).await
    }
}

/// Boxed fetcher, used so the dashboard aggregator can hold any fetcher
/// implementation behind one type
pub type BoxedFetcher<P, T> = Box<dyn Fetcher<Params = P, Output = T>>;

/// Observable state of one resource
#[derive(Debug, Clone)]
pub struct ResourceState<T> {
    /// Most recently fetched data. Survives a failed refetch.
    pub data: Option<T>,

    /// True from creation or refetch start until the fetch settles
    pub is_loading: bool,

    /// Failure of the most recent fetch, if it failed
    pub error: Option<ApiFailure>,
}

impl<T> Default for ResourceState<T> {
    fn default() -> Self {
        Self {
            data: None,
            is_loading: true,
            error: None,
        }
    }
}

/// An isolated refreshable container for one backend resource. Each call
/// site owns its own instance; there is no shared module state.
pub struct Resource<F: Fetcher> {
    fetcher: F,
    params: RwLock<F::Params>,
    state: RwLock<ResourceState<F::Output>>,

    // Monotonic request token. Overlapping refetches race on the network,
    // but only the latest issued request may apply its result, so a stale
    // response can never overwrite a newer one.
    issued: AtomicU64,
}

impl<F: Fetcher> Resource<F> {
    pub fn new(fetcher: F, params: F::Params) -> Self {
        Self {
            fetcher,
            params: RwLock::new(params),
            state: RwLock::new(ResourceState::default()),
            issued: AtomicU64::new(0),
        }
    }

    /// Clone the current state for rendering
    pub async fn snapshot(&self) -> ResourceState<F::Output> {
        self.state.read().await.clone()
    }

    /// Current query parameters
    pub async fn params(&self) -> F::Params {
        self.params.read().await.clone()
    }

    /// Re-run the fetch. The previous error is cleared up front so a retry
    /// starts clean; previous data survives a failure.
    pub async fn refetch(&self) -> Result<(), DashboardError> {
        let token = self.issued.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut state = self.state.write().await;
            state.is_loading = true;
            state.error = None;
        }

        let params = self.params.read().await.clone();
        let result = self.fetcher.fetch(&params).await;

        let mut state = self.state.write().await;
        if self.issued.load(Ordering::SeqCst) != token {
            // A newer refetch owns the state now; the outcome of this one
            // is dropped entirely so callers never see a failure the state
            // does not reflect
            debug!("Discarding stale response for request {}", token);
            return Ok(());
        }

        state.is_loading = false;
        match result {
            Ok(data) => {
                state.data = Some(data);
                Ok(())
            }
            Err(err) => {
                state.error = Some(ApiFailure::from_error(&err));
                Err(err)
            }
        }
    }

    /// Update the query parameters, refetching when they changed value.
    /// Setting identical parameters is a no-op.
    pub async fn set_params(&self, params: F::Params) -> Result<(), DashboardError> {
        {
            let mut current = self.params.write().await;
            if *current == params {
                return Ok(());
            }
            *current = params;
        }
        self.refetch().await
    }
}
