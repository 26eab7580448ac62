use axum::{Json, http::StatusCode, response::IntoResponse};
use engine::EngineError;

use api_types::error::{ErrorResponse, ProblemDetail};
pub use server::{ServerState, router, run_with_listener, spawn_with_listener};

mod round_up;
mod server;

pub mod types {
    pub use api_types::error::{ErrorMessage, ErrorResponse, ProblemDetail};
    pub use api_types::round_up::{RoundUpParams, RoundUpResponse, SavingsGoalBody, Target};
}

pub struct ServerError(EngineError);

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    match err {
        EngineError::Validation(_) | EngineError::AccountNotFound(_) => StatusCode::BAD_REQUEST,
        EngineError::Upstream(_) | EngineError::BusinessRule(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let status = status_for_engine_error(&self.0);
        // The 5xx detail is the pipeline's own step description; provider
        // error content never reaches the engine error in the first place.
        if status.is_server_error() {
            tracing::error!("round-up failed: {}", self.0);
            return (status, Json(ProblemDetail::internal(self.0.to_string()))).into_response();
        }
        (status, Json(ErrorResponse::single(self.0.to_string()))).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_400() {
        let res = ServerError::from(EngineError::Validation("bad window".to_string()))
            .into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn account_not_found_maps_to_400() {
        let res = ServerError::from(EngineError::AccountNotFound("no account".to_string()))
            .into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn upstream_maps_to_500() {
        let res =
            ServerError::from(EngineError::Upstream("step failed".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn business_rule_maps_to_500() {
        let res = ServerError::from(EngineError::BusinessRule("step failed".to_string()))
            .into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
