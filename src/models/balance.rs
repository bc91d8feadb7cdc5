use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A member's net position within one group: paid minus owed.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct Balance {
    pub user_id: i64,
    pub amount: f64,
    pub user_name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct GroupBalance {
    pub group_id: i64,
    pub group_name: String,
    pub balances: Vec<Balance>,
}

/// User-centric view: one `GroupBalance` per group the user belongs
/// to, each carrying a singleton balance list for that user.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct UserBalance {
    pub user_id: i64,
    pub user_name: String,
    pub group_balances: Vec<GroupBalance>,
}
