use utoipa::OpenApi;

use crate::{
    api::models::{
        ChatRequest, ChatResponse, CreateExpenseRequest, CreateGroupRequest, CreateUserRequest,
        ErrorResponse, ExpenseSplitRequest,
    },
    models::{Balance, Expense, ExpenseSplit, Group, GroupBalance, SplitType, User, UserBalance},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::create_user,
        super::handlers::get_user,
        super::handlers::list_users,
        super::handlers::create_group,
        super::handlers::get_group,
        super::handlers::list_groups,
        super::handlers::create_expense,
        super::handlers::list_group_expenses,
        super::handlers::get_group_balances,
        super::handlers::get_user_balances,
        super::handlers::chat
    ),
    components(schemas(
        CreateUserRequest,
        CreateGroupRequest,
        CreateExpenseRequest,
        ExpenseSplitRequest,
        ChatRequest,
        ChatResponse,
        ErrorResponse,
        User,
        Group,
        Expense,
        ExpenseSplit,
        SplitType,
        Balance,
        GroupBalance,
        UserBalance
    )),
    info(
        title = "Divvy API",
        description = "API for splitting group expenses and tracking balances",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
