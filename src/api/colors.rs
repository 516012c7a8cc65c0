use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

use super::color_input::ColorEntryDto;
use crate::services::ColorService;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ColorsQuery {
    /// Only list entries of this category (case-insensitive)
    pub category: Option<String>,
}

/// Reference color table
#[derive(Debug, Serialize, ToSchema)]
pub struct ColorsResponse {
    pub count: usize,
    pub colors: Vec<ColorEntryDto>,
}

/// List reference colors
#[utoipa::path(
    get,
    path = "/api/colors",
    params(ColorsQuery),
    responses(
        (status = 200, description = "Reference colors", body = ColorsResponse),
    ),
    tag = "Colors"
)]
pub async fn handle_colors(
    State(service): State<Arc<ColorService>>,
    Query(query): Query<ColorsQuery>,
) -> Json<ColorsResponse> {
    let colors: Vec<ColorEntryDto> = service
        .colors(query.category.as_deref())
        .into_iter()
        .map(ColorEntryDto::from)
        .collect();

    Json(ColorsResponse {
        count: colors.len(),
        colors,
    })
}
