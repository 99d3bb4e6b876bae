//! Tool catalog handler.

use axum::{
    extract::Query,
    Json,
};

use toolkit_core::Category;

use crate::error::{ApiError, Result};
use crate::types::{CategoryGroup, ToolCatalogResponse, ToolsQuery};

/// GET /api/tools - List the tool catalog, grouped by category.
pub async fn list_tools(Query(query): Query<ToolsQuery>) -> Result<Json<ToolCatalogResponse>> {
    let categories = match query.category.as_deref() {
        Some(raw) => vec![raw.parse::<Category>().map_err(ApiError::BadRequest)?],
        None => Category::ALL.to_vec(),
    };

    Ok(Json(ToolCatalogResponse::new(
        categories.into_iter().map(CategoryGroup::from).collect(),
    )))
}
