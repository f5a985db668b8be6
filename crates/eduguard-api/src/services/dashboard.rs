//! Dashboard feed

use async_trait::async_trait;
use eduguard_core::models::DashboardRecord;

/// Source of the performance dashboard records
#[async_trait]
pub trait DashboardFeed: Send + Sync {
    async fn records(&self) -> Vec<DashboardRecord>;
}

/// Fixed in-memory feed. No persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticDashboardFeed;

impl StaticDashboardFeed {
    pub fn snapshot() -> Vec<DashboardRecord> {
        vec![
            DashboardRecord::new("STU001", "John Smith", 85),
            DashboardRecord::new("STU002", "Sarah Johnson", 92),
            DashboardRecord::new("STU003", "Mike Davis", 78),
            DashboardRecord::new("STU004", "Emily Wilson", 88),
            DashboardRecord::new("STU005", "David Brown", 95),
        ]
    }
}

#[async_trait]
impl DashboardFeed for StaticDashboardFeed {
    async fn records(&self) -> Vec<DashboardRecord> {
        Self::snapshot()
    }
}
