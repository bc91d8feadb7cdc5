use super::user::User;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Stored form of a group: membership is kept as an ordered list of
/// user IDs, append-only.
#[derive(Clone, Debug)]
pub struct GroupRecord {
    pub id: i64,
    pub name: String,
    pub member_ids: Vec<i64>,
}

impl GroupRecord {
    pub fn is_member(&self, user_id: i64) -> bool {
        self.member_ids.contains(&user_id)
    }
}

/// Wire form of a group with hydrated members. `total_expenses` is
/// derived from the expense ledger on single-group reads and left at
/// zero in list responses; it is never stored.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct Group {
    pub id: i64,
    pub name: String,
    pub members: Vec<User>,
    pub total_expenses: f64,
}
