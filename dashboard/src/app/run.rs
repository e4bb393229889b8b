//! Main application run loop

use std::future::Future;
use std::sync::Arc;

use chrono::Utc;
use colored::Colorize;
use tracing::{error, info};

use crate::app::options::AppOptions;
use crate::errors::DashboardError;
use crate::feed::time::format_relative_time;
use crate::feed::{merge_activity, short_sha, ActivityItem};
use crate::http::client::ApiClient;
use crate::http::deployments::TriggerStatus;
use crate::models::deployment::DeploymentEvent;
use crate::models::scan::SecurityScan;
use crate::state::dashboard::{Dashboard, DashboardView};
use crate::state::trigger::DeployTrigger;
use crate::workers::refresher;

/// Run the Kovert dashboard
pub async fn run(
    options: AppOptions,
    shutdown_signal: impl Future<Output = ()> + Send + 'static,
) -> Result<(), DashboardError> {
    info!("Initializing Kovert dashboard...");

    let client = Arc::new(ApiClient::new(&options.backend_base_url)?);
    let dashboard = Dashboard::new(client);

    // Initial load; render whatever arrived even when parts of it failed
    if let Err(e) = dashboard.refetch_all().await {
        error!("Initial load incomplete: {}", e);
    }
    let view = dashboard.view().await;
    render_view(&view, &options.backend_base_url);

    if options.run_once {
        return Ok(());
    }

    let base_url = options.backend_base_url.clone();
    refresher::run(
        &options.refresher,
        &dashboard,
        move |view| render_view(view, &base_url),
        |duration| tokio::time::sleep(duration),
        Box::pin(shutdown_signal),
    )
    .await;

    Ok(())
}

/// Trigger a deployment for `owner/repo` and report the backend's answer
pub async fn deploy(options: &AppOptions, owner: &str, repo: &str) -> Result<(), DashboardError> {
    info!("Triggering deployment of {}/{}", owner, repo);

    let client = Arc::new(ApiClient::new(&options.backend_base_url)?);
    let trigger = DeployTrigger::new(client);
    let response = trigger.trigger(owner, repo).await?;

    match response.status {
        TriggerStatus::Success => println!("{} {}", "✓".green(), response.message),
        TriggerStatus::Error => println!("{} {}", "✗".red(), response.message),
    }
    Ok(())
}

/// Print the composed view to stdout
fn render_view(view: &DashboardView, base_url: &str) {
    println!();
    println!("{}", "Kovert Dashboard".bold());

    if view.errors.has_any() {
        println!("{}", "Unable to connect to API".red().bold());
        println!(
            "{}",
            format!("Make sure the backend server is running at {}", base_url).red()
        );
    }

    if let Some(stats) = &view.stats {
        println!(
            "Deployments: {} total | {} succeeded | {} updated | {} failed | {}% success rate",
            stats.total_deployments,
            stats.successful_deployments,
            stats.updated_deployments,
            stats.failed_deployments,
            view.success_rate(),
        );
        println!(
            "Security: {} scans | {} critical | {} high",
            stats.total_security_scans, stats.critical_vulnerabilities, stats.high_vulnerabilities,
        );
    }

    if !view.services.is_empty() {
        println!();
        println!("{} ({})", "Active Services".bold(), view.services.len());
        for service in &view.services {
            println!(
                "  {} {} [{}/{}] {} ({} deploys, {})",
                service.service_name.bold(),
                service.repo_name,
                service.provider.as_str(),
                service.region,
                service.service_url,
                service.deploy_count,
                format_relative_time(service.last_updated_at, Utc::now()),
            );
        }
    }

    println!();
    println!("{}", "Recent Activity".bold());
    let activities = merge_activity(&view.deployments, &view.security_scans);
    if activities.is_empty() {
        println!("  No recent activity");
        return;
    }

    for item in &activities {
        match item {
            ActivityItem::Deployment(event) => render_deployment(event),
            ActivityItem::Security(scan) => render_security(scan),
        }
    }
}

fn render_deployment(event: &DeploymentEvent) {
    let style = event.status.style();
    let mut line = format!(
        "  {} {} {} {} {}",
        style.icon.color(style.color),
        event.repo_name,
        short_sha(&event.commit_sha),
        style.label.color(style.color),
        format_relative_time(event.created_at, Utc::now()),
    );
    if let Some(url) = &event.service_url {
        line.push_str(&format!(" {}", url));
    }
    println!("{}", line);
    if let Some(message) = &event.error_message {
        println!("    {}", message.red());
    }
}

fn render_security(scan: &SecurityScan) {
    let style = scan.risk_level.style();
    let mut line = format!(
        "  {} {} {} {} {}",
        "⛨".color(style.color),
        scan.repo_name,
        short_sha(&scan.commit_sha),
        style.label.color(style.color),
        format_relative_time(scan.created_at, Utc::now()),
    );
    if let Some(badge) = scan.vulnerability_badge() {
        line.push_str(&format!(" {}", badge.yellow()));
    }
    if let Some(url) = &scan.github_issue_url {
        line.push_str(&format!(" {}", url));
    }
    println!("{}", line);
}
