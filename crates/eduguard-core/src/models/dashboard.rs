use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One row of the performance dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DashboardRecord {
    #[schema(example = "STU001")]
    pub id: String,
    #[schema(example = "John Smith")]
    pub name: String,
    /// Score in `0..=100`
    #[schema(example = 85, minimum = 0, maximum = 100)]
    pub performance_score: u8,
}

impl DashboardRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>, performance_score: u8) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            performance_score: performance_score.min(100),
        }
    }
}
