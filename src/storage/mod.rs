use crate::error::DivvyError;
use crate::models::{Expense, GroupRecord, NewExpense, User};
use async_trait::async_trait;

/// Repository seam between the service layer and the store. Callers
/// get plain value objects back; relationship traversal is expressed
/// as explicit queries (`list_groups_for_user`,
/// `list_expenses_by_group`) rather than navigated object graphs.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn create_user(&self, name: String, email: String) -> Result<User, DivvyError>;
    async fn get_user(&self, user_id: i64) -> Result<Option<User>, DivvyError>;
    async fn list_users(&self, skip: usize, limit: usize) -> Result<Vec<User>, DivvyError>;

    async fn create_group(
        &self,
        name: String,
        member_ids: Vec<i64>,
    ) -> Result<GroupRecord, DivvyError>;
    async fn get_group(&self, group_id: i64) -> Result<Option<GroupRecord>, DivvyError>;
    async fn list_groups(&self, skip: usize, limit: usize) -> Result<Vec<GroupRecord>, DivvyError>;
    async fn list_groups_for_user(&self, user_id: i64) -> Result<Vec<GroupRecord>, DivvyError>;

    /// Persists the expense together with all of its splits. Either
    /// everything from the request lands in the store or nothing does.
    async fn create_expense(&self, new: NewExpense) -> Result<Expense, DivvyError>;
    async fn list_expenses_by_group(&self, group_id: i64) -> Result<Vec<Expense>, DivvyError>;
}

pub mod in_memory;
