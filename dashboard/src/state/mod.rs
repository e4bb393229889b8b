//! Refreshable client-side state

pub mod dashboard;
pub mod resource;
pub mod trigger;
