//! Mock grid data for the dashboard, alerts, and reports sections.
//!
//! These are pure display collaborators: the TUI renders them and they
//! contribute no state back into the chat/settings core. Metrics are
//! randomized within fixed bands on the refresh timer; alerts and
//! reports are fixed seed data.

use rand::Rng;

// ============================================================================
// Dashboard metrics
// ============================================================================

/// Headline dashboard numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metrics {
    /// Current grid load in MW.
    pub grid_load_mw: u32,
    /// Total grid capacity in MW.
    pub grid_capacity_mw: u32,
    /// Grid efficiency percentage.
    pub efficiency_percent: u32,
    /// Total deployed smart meters.
    pub active_meters: u32,
    pub online_meters: u32,
    pub offline_meters: u32,
    pub total_alerts: u32,
    pub critical_alerts: u32,
    pub warning_alerts: u32,
    pub info_alerts: u32,
    /// Energy consumed today in MWh.
    pub energy_consumed_mwh: u32,
    /// Energy generated today in MWh.
    pub energy_generated_mwh: u32,
    pub renewable_percent: u32,
}

impl Metrics {
    /// Re-randomizes the live metrics within their jitter bands.
    pub fn refresh(&mut self, rng: &mut impl Rng) {
        self.grid_load_mw = rng.gen_range(2800..2900);
        self.efficiency_percent = rng.gen_range(85..95);
        self.online_meters = rng.gen_range(123_800..124_000);
        self.offline_meters = rng.gen_range(1500..1600);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self {
            grid_load_mw: 2847,
            grid_capacity_mw: 3200,
            efficiency_percent: 89,
            active_meters: 125_430,
            online_meters: 123_891,
            offline_meters: 1539,
            total_alerts: 43,
            critical_alerts: 3,
            warning_alerts: 12,
            info_alerts: 28,
            energy_consumed_mwh: 67_234,
            energy_generated_mwh: 71_567,
            renewable_percent: 34,
        }
    }
}

/// One row in the system health card.
#[derive(Debug, Clone, Copy)]
pub struct HealthItem {
    pub name: &'static str,
    pub uptime: &'static str,
    pub status: HealthStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthStatus {
    Online,
    Warning,
}

/// Fixed system health rows.
pub const SYSTEM_HEALTH: &[HealthItem] = &[
    HealthItem {
        name: "Grid Operations",
        uptime: "99.9% uptime",
        status: HealthStatus::Online,
    },
    HealthItem {
        name: "AMI System",
        uptime: "98.8% uptime",
        status: HealthStatus::Online,
    },
    HealthItem {
        name: "Data Processing",
        uptime: "97.2% uptime",
        status: HealthStatus::Warning,
    },
    HealthItem {
        name: "API Gateway",
        uptime: "99.5% uptime",
        status: HealthStatus::Online,
    },
];

// ============================================================================
// Alerts
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Critical,
    Warning,
    Info,
}

impl AlertKind {
    pub fn label(&self) -> &'static str {
        match self {
            AlertKind::Critical => "critical",
            AlertKind::Warning => "warning",
            AlertKind::Info => "info",
        }
    }
}

/// One alert card.
#[derive(Debug, Clone)]
pub struct Alert {
    pub kind: AlertKind,
    pub title: &'static str,
    pub description: &'static str,
    pub location: &'static str,
    pub timestamp: &'static str,
    pub status: &'static str,
}

/// Seed alert list.
pub fn seed_alerts() -> Vec<Alert> {
    vec![
        Alert {
            kind: AlertKind::Critical,
            title: "Transformer T-4 Overload",
            description: "Brooklyn Substation experiencing overload conditions. \
                Immediate attention required.",
            location: "Brooklyn Substation",
            timestamp: "08:45 AM",
            status: "Under Investigation",
        },
        Alert {
            kind: AlertKind::Warning,
            title: "Meter Read Failure Rate High",
            description: "Zone 7 in Manhattan showing higher than normal meter \
                read failure rates.",
            location: "Manhattan Zone 7",
            timestamp: "08:30 AM",
            status: "Acknowledged",
        },
        Alert {
            kind: AlertKind::Info,
            title: "Scheduled Maintenance Complete",
            description: "Routine maintenance at Queens Distribution Center has \
                been completed successfully.",
            location: "Queens Distribution Center",
            timestamp: "08:15 AM",
            status: "Resolved",
        },
    ]
}

/// Client-side alert list filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertFilter {
    #[default]
    All,
    Critical,
    Warning,
    Info,
}

impl AlertFilter {
    pub fn matches(&self, alert: &Alert) -> bool {
        match self {
            AlertFilter::All => true,
            AlertFilter::Critical => alert.kind == AlertKind::Critical,
            AlertFilter::Warning => alert.kind == AlertKind::Warning,
            AlertFilter::Info => alert.kind == AlertKind::Info,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AlertFilter::All => "all",
            AlertFilter::Critical => "critical",
            AlertFilter::Warning => "warning",
            AlertFilter::Info => "info",
        }
    }

    /// Cycles all → critical → warning → info → all.
    pub fn next(&self) -> AlertFilter {
        match self {
            AlertFilter::All => AlertFilter::Critical,
            AlertFilter::Critical => AlertFilter::Warning,
            AlertFilter::Warning => AlertFilter::Info,
            AlertFilter::Info => AlertFilter::All,
        }
    }
}

// ============================================================================
// Reports
// ============================================================================

/// One report card.
#[derive(Debug, Clone, Copy)]
pub struct Report {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// Fixed report catalog.
pub const REPORTS: &[Report] = &[
    Report {
        id: "grid-performance",
        title: "Grid Performance Report",
        description: "Comprehensive analysis of grid operations, load distribution, \
            and efficiency metrics.",
    },
    Report {
        id: "ami-analysis",
        title: "AMI System Analysis",
        description: "Smart meter performance, read success rates, and communication \
            health metrics.",
    },
    Report {
        id: "energy-trends",
        title: "Energy Consumption Trends",
        description: "Detailed analysis of energy usage patterns, peak demand, and \
            forecasting.",
    },
    Report {
        id: "sustainability",
        title: "Sustainability Metrics",
        description: "Renewable energy integration, carbon footprint, and \
            environmental impact analysis.",
    },
    Report {
        id: "alert-summary",
        title: "Alert Summary",
        description: "Historical alert trends, resolution times, and system \
            reliability metrics.",
    },
    Report {
        id: "maintenance",
        title: "Maintenance Schedule",
        description: "Predictive maintenance recommendations and equipment \
            lifecycle analysis.",
    },
];

// ============================================================================
// Quick actions
// ============================================================================

/// A canned prompt offered in the chat quick-actions picker. The prompt
/// is routed through the normal submit path.
#[derive(Debug, Clone, Copy)]
pub struct QuickAction {
    pub label: &'static str,
    pub prompt: &'static str,
}

pub const QUICK_ACTIONS: &[QuickAction] = &[
    QuickAction {
        label: "Critical Alerts Today",
        prompt: "Show me today's critical alerts",
    },
    QuickAction {
        label: "Brooklyn Grid Status",
        prompt: "What's the grid status in Brooklyn?",
    },
    QuickAction {
        label: "AMI System Report",
        prompt: "Generate AMI system report",
    },
    QuickAction {
        label: "Meter Success Rate",
        prompt: "Check meter read success rate",
    },
    QuickAction {
        label: "Manhattan Outages",
        prompt: "Show outages in Manhattan",
    },
    QuickAction {
        label: "Energy Trends",
        prompt: "Display energy consumption trends",
    },
];

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_refresh_stays_in_bands() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut metrics = Metrics::default();
        for _ in 0..50 {
            metrics.refresh(&mut rng);
            assert!((2800..2900).contains(&metrics.grid_load_mw));
            assert!((85..95).contains(&metrics.efficiency_percent));
            assert!((123_800..124_000).contains(&metrics.online_meters));
            assert!((1500..1600).contains(&metrics.offline_meters));
        }
        // Static fields are untouched by refresh.
        assert_eq!(metrics.grid_capacity_mw, 3200);
        assert_eq!(metrics.total_alerts, 43);
    }

    #[test]
    fn test_alert_filter() {
        let alerts = seed_alerts();
        assert_eq!(alerts.iter().filter(|a| AlertFilter::All.matches(a)).count(), 3);
        assert_eq!(
            alerts
                .iter()
                .filter(|a| AlertFilter::Critical.matches(a))
                .count(),
            1
        );
        assert_eq!(
            alerts.iter().filter(|a| AlertFilter::Info.matches(a)).count(),
            1
        );
    }

    #[test]
    fn test_alert_filter_cycle_returns_to_all() {
        let mut filter = AlertFilter::All;
        for _ in 0..4 {
            filter = filter.next();
        }
        assert_eq!(filter, AlertFilter::All);
    }

    #[test]
    fn test_quick_actions_resolve_to_their_categories() {
        use crate::responses::resolve;

        let replies: Vec<&str> = QUICK_ACTIONS.iter().map(|a| resolve(a.prompt)).collect();
        assert!(replies[0].contains("critical alerts"));
        assert!(replies[1].contains("Brooklyn grid status"));
        assert!(replies[2].contains("AMI System Report"));
        assert!(replies[3].contains("meter read success rate"));
        assert!(replies[4].contains("outage status"));
        assert!(replies[5].contains("Energy consumption trends"));
    }
}
