//! Request DTOs for the API.

use serde::Deserialize;

/// Tool catalog query parameters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ToolsQuery {
    /// Restrict the catalog to one category id.
    pub category: Option<String>,
}
