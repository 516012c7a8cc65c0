use axum::{extract::State, response::Json};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use super::color_input::{BreakdownDto, ColorInput};
use crate::error::ApiError;
use crate::services::ColorService;

/// Reference entry a name was derived from
#[derive(Debug, Serialize, ToSchema)]
pub struct MatchInfo {
    /// Name of the closest reference color
    pub name: String,
    pub category: String,
    pub alternate_names: Vec<String>,
    pub pantone: Option<String>,
    pub ncs: Option<String>,
    pub ral: Option<String>,
    /// CIEDE2000 between the sample and the matched entry
    pub delta_e: f64,
}

/// Response from color analysis
#[derive(Debug, Serialize, ToSchema)]
pub struct AnalyzeResponse {
    /// Human-readable name (exact, blend, or nearest with modifiers)
    pub name: String,
    pub breakdown: BreakdownDto,
    #[serde(rename = "match")]
    pub matched: MatchInfo,
    /// Plain-text summary for sharing
    pub share_text: String,
}

/// Name a sampled color
///
/// Returns the display name, the color in every supported color space and
/// the reference entry the name was derived from.
#[utoipa::path(
    post,
    path = "/api/analyze",
    request_body = ColorInput,
    responses(
        (status = 200, description = "Color analyzed", body = AnalyzeResponse),
        (status = 400, description = "Invalid color input"),
        (status = 422, description = "No reference colors loaded"),
    ),
    tag = "Colors"
)]
pub async fn handle_analyze(
    State(service): State<Arc<ColorService>>,
    Json(input): Json<ColorInput>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let analysis = service.analyze(input.to_rgb()?)?;
    let entry = &analysis.description.matched;

    Ok(Json(AnalyzeResponse {
        name: analysis.description.name.clone(),
        breakdown: BreakdownDto::from(&analysis.breakdown),
        matched: MatchInfo {
            name: entry.name.clone(),
            category: entry.category.clone(),
            alternate_names: entry.alternate_names.clone(),
            pantone: entry.pantone.clone(),
            ncs: entry.ncs.clone(),
            ral: entry.ral.clone(),
            delta_e: analysis.description.delta_e,
        },
        share_text: analysis.share_text,
    }))
}
