//! HTTP client for the Kovert backend API

pub mod client;
pub mod deployments;
pub mod query;
pub mod scans;
pub mod services;
pub mod stats;
