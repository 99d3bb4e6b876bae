//! Response DTOs for the API.

use chrono::{DateTime, Utc};
use serde::Serialize;

use toolkit_core::{Category, Tool};
use toolkit_telegram::BroadcastSummary;

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
    /// Uptime in seconds.
    pub uptime_seconds: u64,
}

/// Fixed acknowledgement returned to the webhook caller.
#[derive(Debug, Clone, Serialize)]
pub struct AckResponse {
    pub status: String,
}

impl AckResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

/// Result of a scheduled broadcast.
#[derive(Debug, Clone, Serialize)]
pub struct CronResponse {
    pub status: String,
    pub message: String,
    /// Users with reminders enabled.
    pub total: usize,
    /// Reminders delivered.
    pub sent: usize,
    /// Reminders that failed.
    pub failed: usize,
    pub finished_at: DateTime<Utc>,
}

impl From<BroadcastSummary> for CronResponse {
    fn from(summary: BroadcastSummary) -> Self {
        Self {
            status: "ok".to_string(),
            message: "Scheduled message sent.".to_string(),
            total: summary.total,
            sent: summary.sent,
            failed: summary.failed,
            finished_at: Utc::now(),
        }
    }
}

/// Tool entry in catalog responses.
#[derive(Debug, Clone, Serialize)]
pub struct ToolSummary {
    pub name: String,
    pub description: String,
    pub link: String,
}

impl From<&Tool> for ToolSummary {
    fn from(tool: &Tool) -> Self {
        Self {
            name: tool.name.to_string(),
            description: tool.description.to_string(),
            link: tool.link.to_string(),
        }
    }
}

/// One category with its tools.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryGroup {
    pub id: Category,
    pub name: String,
    pub tools: Vec<ToolSummary>,
}

impl From<Category> for CategoryGroup {
    fn from(category: Category) -> Self {
        Self {
            id: category,
            name: category.display_name().to_string(),
            tools: category.tools().map(ToolSummary::from).collect(),
        }
    }
}

/// Tool catalog response.
#[derive(Debug, Clone, Serialize)]
pub struct ToolCatalogResponse {
    pub categories: Vec<CategoryGroup>,
    /// Number of tools across the returned categories.
    pub total: usize,
}

impl ToolCatalogResponse {
    pub fn new(categories: Vec<CategoryGroup>) -> Self {
        let total = categories.iter().map(|c| c.tools.len()).sum();
        Self { categories, total }
    }
}
