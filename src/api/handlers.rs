use crate::{
    api::models::*,
    chat::ChatClient,
    models::{Expense, Group, GroupBalance, NewExpense, NewExpenseSplit, User, UserBalance},
    service::DivvyService,
    storage::in_memory::InMemoryStorage,
};
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, post},
};
use serde_json::json;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<DivvyService<InMemoryStorage>>,
    pub chat: Arc<ChatClient>,
}

// Define API routes
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/users", post(create_user).get(list_users))
        .route("/users/{user_id}", get(get_user))
        .route("/groups", post(create_group).get(list_groups))
        .route("/groups/{group_id}", get(get_group))
        .route(
            "/groups/{group_id}/expenses",
            post(create_expense).get(list_group_expenses),
        )
        .route("/balances/groups/{group_id}", get(get_group_balances))
        .route("/balances/users/{user_id}", get(get_user_balances))
        .route("/chat", post(chat))
        .with_state(state)
}

pub async fn root() -> Json<serde_json::Value> {
    Json(json!({ "message": "Welcome to the Divvy API" }))
}

#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User created", body = User),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<Json<User>, ApiError> {
    let user = state.service.create_user(req.name, req.email).await?;
    Ok(Json(user))
}

#[utoipa::path(
    get,
    path = "/users/{user_id}",
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<User>, ApiError> {
    let user = state.service.get_user(user_id).await?;
    Ok(Json(user))
}

#[utoipa::path(
    get,
    path = "/users",
    params(ListParams),
    responses(
        (status = 200, description = "Page of users", body = [User])
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<User>>, ApiError> {
    let users = state.service.list_users(params.skip, params.limit).await?;
    Ok(Json(users))
}

#[utoipa::path(
    post,
    path = "/groups",
    request_body = CreateGroupRequest,
    responses(
        (status = 200, description = "Group created", body = Group),
        (status = 404, description = "One or more users not found", body = ErrorResponse)
    )
)]
pub async fn create_group(
    State(state): State<AppState>,
    Json(req): Json<CreateGroupRequest>,
) -> Result<Json<Group>, ApiError> {
    let group = state.service.create_group(req.name, req.user_ids).await?;
    Ok(Json(group))
}

#[utoipa::path(
    get,
    path = "/groups/{group_id}",
    responses(
        (status = 200, description = "Group with computed total_expenses", body = Group),
        (status = 404, description = "Group not found", body = ErrorResponse)
    )
)]
pub async fn get_group(
    State(state): State<AppState>,
    Path(group_id): Path<i64>,
) -> Result<Json<Group>, ApiError> {
    let group = state.service.get_group(group_id).await?;
    Ok(Json(group))
}

#[utoipa::path(
    get,
    path = "/groups",
    params(ListParams),
    responses(
        (status = 200, description = "Page of groups", body = [Group])
    )
)]
pub async fn list_groups(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Group>>, ApiError> {
    let groups = state.service.list_groups(params.skip, params.limit).await?;
    Ok(Json(groups))
}

#[utoipa::path(
    post,
    path = "/groups/{group_id}/expenses",
    request_body = CreateExpenseRequest,
    responses(
        (status = 200, description = "Expense created with its splits", body = Expense),
        (status = 400, description = "Payer or split participant not a group member", body = ErrorResponse),
        (status = 404, description = "Group not found", body = ErrorResponse)
    )
)]
pub async fn create_expense(
    State(state): State<AppState>,
    Path(group_id): Path<i64>,
    Json(req): Json<CreateExpenseRequest>,
) -> Result<Json<Expense>, ApiError> {
    let new = NewExpense {
        group_id,
        description: req.description,
        amount: req.amount,
        split_type: req.split_type,
        paid_by: req.paid_by,
        splits: req
            .splits
            .into_iter()
            .map(|s| NewExpenseSplit {
                user_id: s.user_id,
                amount: s.amount,
                percentage: s.percentage,
            })
            .collect(),
    };
    let expense = state.service.create_expense(new).await?;
    Ok(Json(expense))
}

#[utoipa::path(
    get,
    path = "/groups/{group_id}/expenses",
    responses(
        (status = 200, description = "Expenses of the group", body = [Expense]),
        (status = 404, description = "Group not found", body = ErrorResponse)
    )
)]
pub async fn list_group_expenses(
    State(state): State<AppState>,
    Path(group_id): Path<i64>,
) -> Result<Json<Vec<Expense>>, ApiError> {
    let expenses = state.service.list_group_expenses(group_id).await?;
    Ok(Json(expenses))
}

#[utoipa::path(
    get,
    path = "/balances/groups/{group_id}",
    responses(
        (status = 200, description = "Net balance per group member", body = GroupBalance),
        (status = 404, description = "Group not found", body = ErrorResponse)
    )
)]
pub async fn get_group_balances(
    State(state): State<AppState>,
    Path(group_id): Path<i64>,
) -> Result<Json<GroupBalance>, ApiError> {
    let balances = state.service.group_balances(group_id).await?;
    Ok(Json(balances))
}

#[utoipa::path(
    get,
    path = "/balances/users/{user_id}",
    responses(
        (status = 200, description = "Per-group net balance for one user", body = UserBalance),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub async fn get_user_balances(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<UserBalance>, ApiError> {
    let balances = state.service.user_balances(user_id).await?;
    Ok(Json(balances))
}

#[utoipa::path(
    post,
    path = "/chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Assistant reply", body = ChatResponse),
        (status = 502, description = "Completion API failure", body = ErrorResponse)
    )
)]
pub async fn chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let response = state.chat.complete(&req.message).await?;
    Ok(Json(ChatResponse { response }))
}
