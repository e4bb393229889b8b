//! Periodic dashboard refresh worker

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use tracing::{debug, error, info};

use crate::state::dashboard::{Dashboard, DashboardView};

/// Refresher worker options
#[derive(Debug, Clone)]
pub struct Options {
    /// Refresh interval
    pub interval: Duration,

    /// Initial delay before the first refresh
    pub initial_delay: Duration,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(30),
            initial_delay: Duration::from_secs(0),
        }
    }
}

/// Run the refresher worker. Refetches everything on each tick and hands
/// the recomposed view to `render`, even when parts of the refresh failed.
pub async fn run<S, F, R>(
    options: &Options,
    dashboard: &Dashboard,
    render: R,
    sleep_fn: S,
    mut shutdown_signal: Pin<Box<dyn Future<Output = ()> + Send>>,
) where
    S: Fn(Duration) -> F,
    F: Future<Output = ()>,
    R: Fn(&DashboardView),
{
    info!("Refresher worker starting...");

    sleep_fn(options.initial_delay).await;

    loop {
        // Check for shutdown
        tokio::select! {
            _ = &mut shutdown_signal => {
                info!("Refresher worker shutting down...");
                return;
            }
            _ = sleep_fn(options.interval) => {
                // Continue with refresh
            }
        }

        debug!("Refreshing dashboard data...");

        match dashboard.refetch_all().await {
            Ok(_) => {
                debug!("Refresh completed successfully");
            }
            Err(e) => {
                error!("Refresh failed: {}", e);
            }
        }

        let view = dashboard.view().await;
        render(&view);
    }
}
