use axum::{extract::State, response::Json};
use color_engine::{CancelFlag, MatchQuality, MixResult};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use super::color_input::ColorInput;
use crate::error::ApiError;
use crate::services::{ColorService, MixOverrides};

/// Request body for a paint-mix recipe
#[derive(Debug, Deserialize, ToSchema)]
pub struct MixRequest {
    /// Target color
    #[serde(flatten)]
    pub color: ColorInput,
    /// Maximum number of paints (1-4), defaults to the configured value
    #[serde(default)]
    pub max_paints: Option<usize>,
    /// Prefer fewer and cheaper paints among equally close recipes
    #[serde(default)]
    pub prefer_cost_effective: Option<bool>,
    /// Refine recipes that miss by more than ΔE 1.5
    #[serde(default)]
    pub allow_color_correction: Option<bool>,
}

/// One paint of a recipe
#[derive(Debug, Serialize, ToSchema)]
pub struct MixPaint {
    pub id: String,
    pub name: String,
    pub hex: String,
    /// Share of the mix in percent, one decimal
    pub percentage: f64,
}

/// Paint-mix recipe
#[derive(Debug, Serialize, ToSchema)]
pub struct MixResponse {
    pub paints: Vec<MixPaint>,
    /// CIEDE2000 between the mixture and the target
    pub delta_e: f64,
    pub estimated_cost: f64,
    pub requires_color_correction: bool,
    /// excellent, good, fair or approximate
    #[schema(value_type = String)]
    pub quality: MatchQuality,
    /// Preview of the mixed color
    pub mixed_hex: String,
}

impl From<MixResult> for MixResponse {
    fn from(result: MixResult) -> Self {
        Self {
            paints: result
                .paints
                .into_iter()
                .map(|c| MixPaint {
                    id: c.paint.id,
                    name: c.paint.name,
                    hex: c.paint.hex,
                    percentage: c.percentage,
                })
                .collect(),
            delta_e: result.delta_e,
            estimated_cost: result.estimated_cost,
            requires_color_correction: result.requires_color_correction,
            quality: result.quality,
            mixed_hex: result.mixed_hex,
        }
    }
}

/// Cancels the search when the request future is dropped
struct CancelOnDrop(CancelFlag);

impl Drop for CancelOnDrop {
    fn drop(&mut self) {
        self.0.cancel();
    }
}

/// Compute a paint-mix recipe
///
/// Searches mixtures of up to four base paints (always including the white
/// and black anchors) for the one closest to the target.
#[utoipa::path(
    post,
    path = "/api/mix",
    request_body = MixRequest,
    responses(
        (status = 200, description = "Recipe computed", body = MixResponse),
        (status = 400, description = "Invalid color input or mix options"),
        (status = 422, description = "Reference table lacks a white or black anchor"),
    ),
    tag = "Mixing"
)]
pub async fn handle_mix(
    State(service): State<Arc<ColorService>>,
    Json(request): Json<MixRequest>,
) -> Result<Json<MixResponse>, ApiError> {
    let target = request.color.to_lab()?;
    let overrides = MixOverrides {
        max_paints: request.max_paints,
        prefer_cost_effective: request.prefer_cost_effective,
        allow_color_correction: request.allow_color_correction,
    };

    // The search is CPU-bound; keep it off the async workers
    let cancel = CancelFlag::new();
    let _guard = CancelOnDrop(cancel.clone());
    let result = tokio::task::spawn_blocking(move || {
        service.mix_with_cancel(target, overrides, &cancel)
    })
    .await
    .map_err(|e| ApiError::Internal(format!("Mix task failed: {e}")))??;

    tracing::info!(
        paints = result.paints.len(),
        delta_e = result.delta_e,
        "Mix recipe computed"
    );

    Ok(Json(result.into()))
}
