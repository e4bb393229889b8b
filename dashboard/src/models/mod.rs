//! Entity models received from the Kovert backend

pub mod deployment;
pub mod scan;
pub mod service;
pub mod stats;
