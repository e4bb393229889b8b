//! Kovert Dashboard Library
//!
//! Client-side aggregation for the Kovert deployment-automation backend:
//! a typed REST client, refreshable per-resource state, a composed
//! dashboard view-model, and the merged activity feed.

pub mod app;
pub mod errors;
pub mod feed;
pub mod http;
pub mod logs;
pub mod models;
pub mod state;
pub mod workers;
