//! Kovert Dashboard - Entry Point
//!
//! Terminal client for the Kovert deployment-automation backend. Renders
//! deployment statistics, active services, and the merged activity feed,
//! refreshing on a poll interval.

use std::collections::HashMap;
use std::env;

use kovert_dashboard::app::options::AppOptions;
use kovert_dashboard::app::run::{deploy, run};
use kovert_dashboard::logs::init_logging;

use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    let mut cli_args: HashMap<String, String> = HashMap::new();

    for arg in args.iter().skip(1) {
        if let Some((key, value)) = arg.split_once('=') {
            // Handle --key=value format
            let clean_key = key.trim_start_matches('-');
            cli_args.insert(clean_key.to_string(), value.to_string());
        } else if arg.starts_with("--") {
            // Handle standalone flags like --once
            let clean_key = arg.trim_start_matches('-');
            cli_args.insert(clean_key.to_string(), "true".to_string());
        }
    }

    if cli_args.contains_key("version") {
        println!("kovert-dashboard {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    let mut options = AppOptions::from_env();
    if cli_args.contains_key("once") {
        options.run_once = true;
    }
    if let Some(url) = cli_args.get("api-url") {
        options.backend_base_url = url.clone();
    }

    if let Err(e) = init_logging(options.logs.clone()) {
        println!("Failed to initialize logging: {e}");
    }

    // One-shot deployment trigger: --deploy=owner/repo
    if let Some(target) = cli_args.get("deploy") {
        let Some((owner, repo)) = target.split_once('/') else {
            error!("Invalid deploy target '{}', expected owner/repo", target);
            return;
        };
        if let Err(e) = deploy(&options, owner, repo).await {
            error!("Deployment trigger failed: {e}");
        }
        return;
    }

    info!("Using backend at {}", options.backend_base_url);
    let result = run(options, await_shutdown_signal()).await;
    if let Err(e) = result {
        error!("Failed to run the dashboard: {e}");
    }
}

async fn await_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let mut sigterm = signal(SignalKind::terminate()).unwrap();
        let mut sigint = signal(SignalKind::interrupt()).unwrap();

        tokio::select! {
            _ = sigterm.recv() => {
                info!("SIGTERM received, shutting down...");
            }
            _ = sigint.recv() => {
                info!("SIGINT received, shutting down...");
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Ctrl+C received, shutting down...");
            }
        }
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c().await.expect("Failed to listen for Ctrl+C");
        info!("Ctrl+C received, shutting down...");
    }
}
