//! Aggregate statistics model

use serde::{Deserialize, Serialize};

/// Aggregate deployment and security-scan counters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatMetrics {
    pub total_deployments: u64,
    pub successful_deployments: u64,
    pub updated_deployments: u64,
    pub failed_deployments: u64,
    pub total_security_scans: u64,
    pub critical_vulnerabilities: u64,
    pub high_vulnerabilities: u64,
}

impl StatMetrics {
    /// Percentage of deployments that succeeded, rounded to the nearest
    /// integer. Zero when nothing has been deployed yet.
    pub fn success_rate(&self) -> u32 {
        if self.total_deployments == 0 {
            return 0;
        }
        let ratio = self.successful_deployments as f64 / self.total_deployments as f64;
        (ratio * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(total: u64, successful: u64) -> StatMetrics {
        StatMetrics {
            total_deployments: total,
            successful_deployments: successful,
            updated_deployments: 0,
            failed_deployments: 0,
            total_security_scans: 0,
            critical_vulnerabilities: 0,
            high_vulnerabilities: 0,
        }
    }

    #[test]
    fn test_success_rate() {
        assert_eq!(metrics(0, 0).success_rate(), 0);
        assert_eq!(metrics(4, 4).success_rate(), 100);
        assert_eq!(metrics(3, 1).success_rate(), 33);
        assert_eq!(metrics(3, 2).success_rate(), 67);
    }
}
