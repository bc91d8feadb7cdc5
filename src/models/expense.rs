use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// How the expense was split. Stored and echoed back verbatim; no
/// computation derives split amounts from it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum SplitType {
    Equal,
    Percentage,
    Exact,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct Expense {
    pub id: i64,
    pub group_id: i64,
    pub description: String,
    pub amount: f64,
    pub split_type: SplitType,
    pub paid_by: i64,
    pub splits: Vec<ExpenseSplit>,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ExpenseSplit {
    pub id: i64,
    pub expense_id: i64,
    pub user_id: i64,
    pub amount: f64,
    /// Informational only; balance math uses `amount` exclusively.
    pub percentage: Option<f64>,
}

/// Validated expense input handed to storage. The expense and all of
/// its splits are persisted as one unit.
#[derive(Clone, Debug)]
pub struct NewExpense {
    pub group_id: i64,
    pub description: String,
    pub amount: f64,
    pub split_type: SplitType,
    pub paid_by: i64,
    pub splits: Vec<NewExpenseSplit>,
}

#[derive(Clone, Debug)]
pub struct NewExpenseSplit {
    pub user_id: i64,
    pub amount: f64,
    pub percentage: Option<f64>,
}
