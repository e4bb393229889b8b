//! Display mappings for feed entries

use colored::Color;

use crate::models::deployment::DeploymentStatus;
use crate::models::scan::{RiskLevel, SecurityScan};

/// Visual treatment of a deployment status
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusStyle {
    pub icon: &'static str,
    pub color: Color,
    pub dot: Color,
    pub label: &'static str,
}

impl DeploymentStatus {
    /// Fixed display mapping, one entry per status
    pub fn style(&self) -> StatusStyle {
        match self {
            DeploymentStatus::Analyzing => StatusStyle {
                icon: "↻",
                color: Color::BrightBlue,
                dot: Color::BrightBlue,
                label: "Analyzing",
            },
            DeploymentStatus::Deploying => StatusStyle {
                icon: "↻",
                color: Color::Yellow,
                dot: Color::Yellow,
                label: "Deploying",
            },
            DeploymentStatus::Success => StatusStyle {
                icon: "✓",
                color: Color::Green,
                dot: Color::Green,
                label: "Success",
            },
            DeploymentStatus::Updated => StatusStyle {
                icon: "✓",
                color: Color::Cyan,
                dot: Color::Green,
                label: "Updated",
            },
            DeploymentStatus::Failed => StatusStyle {
                icon: "✗",
                color: Color::Red,
                dot: Color::Red,
                label: "Failed",
            },
        }
    }
}

/// Visual treatment of a scan risk level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskStyle {
    pub color: Color,
    pub background: Color,
    pub label: &'static str,
}

impl RiskLevel {
    /// Fixed display mapping, one entry per level
    pub fn style(&self) -> RiskStyle {
        match self {
            RiskLevel::Critical => RiskStyle {
                color: Color::Red,
                background: Color::BrightRed,
                label: "Critical",
            },
            RiskLevel::High => RiskStyle {
                color: Color::BrightRed,
                background: Color::Red,
                label: "High",
            },
            RiskLevel::Medium => RiskStyle {
                color: Color::Yellow,
                background: Color::BrightYellow,
                label: "Medium",
            },
            RiskLevel::Low => RiskStyle {
                color: Color::Green,
                background: Color::BrightGreen,
                label: "Low",
            },
            RiskLevel::Safe => RiskStyle {
                color: Color::Cyan,
                background: Color::BrightCyan,
                label: "Safe",
            },
        }
    }
}

impl SecurityScan {
    /// Badge text shown only when the scan actually found something
    pub fn vulnerability_badge(&self) -> Option<String> {
        if self.vulnerabilities_count > 0 {
            Some(format!("{} issues", self.vulnerabilities_count))
        } else {
            None
        }
    }
}
