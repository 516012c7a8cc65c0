use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use color_engine::ColorError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Color(#[from] ColorError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Color(ColorError::InvalidColorInput(_))
            | ApiError::Color(ColorError::InvalidMixOptions(_))
            | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Color(ColorError::NoReferenceData)
            | ApiError::Color(ColorError::InsufficientPaintPalette { .. }) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::Color(ColorError::Cancelled) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = Json(json!({
            "status": status.as_u16(),
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_color_is_transparent() {
        let error = ApiError::from(ColorError::InvalidColorInput("#12".to_string()));
        assert_eq!(error.to_string(), "invalid color input: #12");
    }

    #[test]
    fn test_api_error_bad_request() {
        let error = ApiError::BadRequest("provide hex or rgb".to_string());
        assert_eq!(error.to_string(), "Bad request: provide hex or rgb");
    }

    #[test]
    fn test_api_error_internal() {
        let error = ApiError::Internal("worker panicked".to_string());
        assert_eq!(error.to_string(), "Internal error: worker panicked");
    }

    #[test]
    fn test_api_error_into_response_status_codes() {
        // InvalidColorInput -> BAD_REQUEST
        let response = ApiError::from(ColorError::InvalidColorInput("x".into())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        // InvalidMixOptions -> BAD_REQUEST
        let response = ApiError::from(ColorError::InvalidMixOptions("x".into())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        // BadRequest -> BAD_REQUEST
        let response = ApiError::BadRequest("x".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        // NoReferenceData -> UNPROCESSABLE_ENTITY
        let response = ApiError::from(ColorError::NoReferenceData).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        // InsufficientPaintPalette -> UNPROCESSABLE_ENTITY
        let response =
            ApiError::from(ColorError::InsufficientPaintPalette { missing: "black" }).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        // Cancelled -> INTERNAL_SERVER_ERROR
        let response = ApiError::from(ColorError::Cancelled).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        // Internal -> INTERNAL_SERVER_ERROR
        let response = ApiError::Internal("x".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
