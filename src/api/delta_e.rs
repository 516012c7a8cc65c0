use axum::{extract::State, response::Json};
use color_engine::DeltaECategory;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use super::color_input::ColorInput;
use crate::error::ApiError;
use crate::services::ColorService;

/// Two colors to compare
#[derive(Debug, Deserialize, ToSchema)]
pub struct DeltaERequest {
    pub a: ColorInput,
    pub b: ColorInput,
}

/// Perceptual difference between two colors
#[derive(Debug, Serialize, ToSchema)]
pub struct DeltaEResponse {
    /// CIEDE2000
    pub delta_e: f64,
    /// imperceptible, close_inspection, at_a_glance,
    /// more_similar_than_opposite or opposite
    #[schema(value_type = String)]
    pub category: DeltaECategory,
    pub description: String,
    /// True when ΔE exceeds 1.5
    pub requires_color_correction: bool,
}

/// Compare two colors
#[utoipa::path(
    post,
    path = "/api/delta-e",
    request_body = DeltaERequest,
    responses(
        (status = 200, description = "Difference computed", body = DeltaEResponse),
        (status = 400, description = "Invalid color input"),
    ),
    tag = "Colors"
)]
pub async fn handle_delta_e(
    State(service): State<Arc<ColorService>>,
    Json(request): Json<DeltaERequest>,
) -> Result<Json<DeltaEResponse>, ApiError> {
    let report = service.delta_e(request.a.to_lab()?, request.b.to_lab()?)?;

    Ok(Json(DeltaEResponse {
        delta_e: report.delta_e,
        category: report.category,
        description: report.category.describe().to_string(),
        requires_color_correction: report.requires_color_correction,
    }))
}
