//! 生产建议接口

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use stockplan_errors::AppResult;

use crate::application::{GetProductionSuggestionsQuery, ServiceHandler};
use crate::domain::services::SuggestionReport;

pub async fn get_suggestions(
    State(handler): State<Arc<ServiceHandler>>,
) -> AppResult<Json<SuggestionReport>> {
    let report = handler
        .production_suggestions(GetProductionSuggestionsQuery)
        .await?;
    Ok(Json(report))
}
