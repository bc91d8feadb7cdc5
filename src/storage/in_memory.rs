use crate::error::DivvyError;
use crate::models::{Expense, ExpenseSplit, GroupRecord, NewExpense, User};
use crate::storage::Storage;
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::Mutex;

struct Table<T> {
    rows: HashMap<i64, T>,
    next_id: i64,
}

impl<T> Table<T> {
    fn new() -> Self {
        Table {
            rows: HashMap::new(),
            next_id: 1,
        }
    }

    fn allocate_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

struct ExpenseTable {
    rows: HashMap<i64, Expense>,
    next_id: i64,
    next_split_id: i64,
}

impl ExpenseTable {
    fn new() -> Self {
        ExpenseTable {
            rows: HashMap::new(),
            next_id: 1,
            next_split_id: 1,
        }
    }
}

pub struct InMemoryStorage {
    users: Mutex<Table<User>>,
    groups: Mutex<Table<GroupRecord>>,
    expenses: Mutex<ExpenseTable>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        InMemoryStorage {
            users: Mutex::new(Table::new()),
            groups: Mutex::new(Table::new()),
            expenses: Mutex::new(ExpenseTable::new()),
        }
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn create_user(&self, name: String, email: String) -> Result<User, DivvyError> {
        let mut users = self.users.lock().await;
        let id = users.allocate_id();
        let user = User { id, name, email };
        users.rows.insert(id, user.clone());
        Ok(user)
    }

    async fn get_user(&self, user_id: i64) -> Result<Option<User>, DivvyError> {
        Ok(self.users.lock().await.rows.get(&user_id).cloned())
    }

    async fn list_users(&self, skip: usize, limit: usize) -> Result<Vec<User>, DivvyError> {
        let users = self.users.lock().await;
        let mut all: Vec<User> = users.rows.values().cloned().collect();
        // Stable order for pagination
        all.sort_by_key(|u| u.id);
        Ok(all.into_iter().skip(skip).take(limit).collect())
    }

    async fn create_group(
        &self,
        name: String,
        member_ids: Vec<i64>,
    ) -> Result<GroupRecord, DivvyError> {
        let mut groups = self.groups.lock().await;
        let id = groups.allocate_id();
        let group = GroupRecord {
            id,
            name,
            member_ids,
        };
        groups.rows.insert(id, group.clone());
        Ok(group)
    }

    async fn get_group(&self, group_id: i64) -> Result<Option<GroupRecord>, DivvyError> {
        Ok(self.groups.lock().await.rows.get(&group_id).cloned())
    }

    async fn list_groups(
        &self,
        skip: usize,
        limit: usize,
    ) -> Result<Vec<GroupRecord>, DivvyError> {
        let groups = self.groups.lock().await;
        let mut all: Vec<GroupRecord> = groups.rows.values().cloned().collect();
        all.sort_by_key(|g| g.id);
        Ok(all.into_iter().skip(skip).take(limit).collect())
    }

    async fn list_groups_for_user(&self, user_id: i64) -> Result<Vec<GroupRecord>, DivvyError> {
        // For production: use a join over the membership table
        let groups = self.groups.lock().await;
        let mut found: Vec<GroupRecord> = groups
            .rows
            .values()
            .filter(|g| g.is_member(user_id))
            .cloned()
            .collect();
        found.sort_by_key(|g| g.id);
        Ok(found)
    }

    async fn create_expense(&self, new: NewExpense) -> Result<Expense, DivvyError> {
        // The table lock is held across the expense insert and every
        // split insert, so a request persists all of its rows or none.
        let mut expenses = self.expenses.lock().await;
        let expense_id = expenses.next_id;
        expenses.next_id += 1;

        let splits: Vec<ExpenseSplit> = new
            .splits
            .into_iter()
            .map(|s| {
                let id = expenses.next_split_id;
                expenses.next_split_id += 1;
                ExpenseSplit {
                    id,
                    expense_id,
                    user_id: s.user_id,
                    amount: s.amount,
                    percentage: s.percentage,
                }
            })
            .collect();

        let expense = Expense {
            id: expense_id,
            group_id: new.group_id,
            description: new.description,
            amount: new.amount,
            split_type: new.split_type,
            paid_by: new.paid_by,
            splits,
            created_at: Utc::now(),
        };
        expenses.rows.insert(expense_id, expense.clone());
        Ok(expense)
    }

    async fn list_expenses_by_group(&self, group_id: i64) -> Result<Vec<Expense>, DivvyError> {
        // For production: use a database query with an index on group_id
        let expenses = self.expenses.lock().await;
        let mut found: Vec<Expense> = expenses
            .rows
            .values()
            .filter(|e| e.group_id == group_id)
            .cloned()
            .collect();
        found.sort_by_key(|e| e.id);
        Ok(found)
    }
}
