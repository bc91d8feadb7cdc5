use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::DivvyError;
use crate::models::SplitType;

// Request structs for JSON payloads
#[derive(Deserialize, ToSchema)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
}

#[derive(Deserialize, ToSchema)]
pub struct CreateGroupRequest {
    pub name: String,
    pub user_ids: Vec<i64>,
}

#[derive(Deserialize, ToSchema)]
pub struct CreateExpenseRequest {
    pub description: String,
    pub amount: f64,
    pub split_type: SplitType,
    pub paid_by: i64,
    pub splits: Vec<ExpenseSplitRequest>,
}

#[derive(Deserialize, ToSchema)]
pub struct ExpenseSplitRequest {
    pub user_id: i64,
    pub amount: f64,
    #[serde(default)]
    pub percentage: Option<f64>,
}

#[derive(Deserialize, ToSchema)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Serialize, ToSchema)]
pub struct ChatResponse {
    pub response: String,
}

/// Offset/limit pagination, FastAPI-style defaults.
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    #[serde(default)]
    pub skip: usize,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    100
}

// Error response struct
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

// Newtype wrapper for DivvyError to implement IntoResponse
pub struct ApiError(pub DivvyError);

impl From<DivvyError> for ApiError {
    fn from(err: DivvyError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.0 {
            DivvyError::UserNotFound(_)
            | DivvyError::GroupNotFound(_)
            | DivvyError::UsersNotFound => StatusCode::NOT_FOUND,
            DivvyError::PayerNotGroupMember(_) | DivvyError::SplitUserNotGroupMember(_) => {
                StatusCode::BAD_REQUEST
            }
            DivvyError::ChatUpstream(_) => StatusCode::BAD_GATEWAY,
            DivvyError::StorageError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(ErrorResponse {
            error: self.0.to_string(),
        });
        (status, body).into_response()
    }
}
