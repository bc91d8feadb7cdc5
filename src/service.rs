use crate::balance;
use crate::error::DivvyError;
use crate::models::{Balance, Expense, Group, GroupBalance, GroupRecord, NewExpense, User, UserBalance};
use crate::storage::Storage;
use log::{debug, info, warn};

pub struct DivvyService<S: Storage> {
    storage: S,
}

impl<S: Storage> DivvyService<S> {
    pub fn new(storage: S) -> Self {
        info!("Initializing DivvyService");
        Self { storage }
    }

    async fn require_user(&self, user_id: i64) -> Result<User, DivvyError> {
        self.storage
            .get_user(user_id)
            .await?
            .ok_or(DivvyError::UserNotFound(user_id))
    }

    async fn require_group(&self, group_id: i64) -> Result<GroupRecord, DivvyError> {
        self.storage
            .get_group(group_id)
            .await?
            .ok_or(DivvyError::GroupNotFound(group_id))
    }

    /// Hydrates a group's member list. Membership is append-only and
    /// users are never deleted, so a dangling member ID means the
    /// store itself is inconsistent.
    async fn member_users(&self, group: &GroupRecord) -> Result<Vec<User>, DivvyError> {
        let lookups = group.member_ids.iter().map(|&id| async move {
            self.storage.get_user(id).await?.ok_or_else(|| {
                DivvyError::StorageError(format!("group {} references missing user {}", group.id, id))
            })
        });
        futures::future::try_join_all(lookups).await
    }

    // USER MANAGEMENT

    pub async fn create_user(&self, name: String, email: String) -> Result<User, DivvyError> {
        info!("Creating user with email: {}", email);
        let user = self.storage.create_user(name, email).await?;
        debug!("User created with ID: {}", user.id);
        Ok(user)
    }

    pub async fn get_user(&self, user_id: i64) -> Result<User, DivvyError> {
        self.require_user(user_id).await
    }

    pub async fn list_users(&self, skip: usize, limit: usize) -> Result<Vec<User>, DivvyError> {
        self.storage.list_users(skip, limit).await
    }

    // GROUP MANAGEMENT

    pub async fn create_group(&self, name: String, user_ids: Vec<i64>) -> Result<Group, DivvyError> {
        info!("Creating group '{}' with {} members", name, user_ids.len());
        let mut members = Vec::with_capacity(user_ids.len());
        for &user_id in &user_ids {
            match self.storage.get_user(user_id).await? {
                Some(user) => members.push(user),
                None => {
                    warn!("Group creation references missing user {}", user_id);
                    return Err(DivvyError::UsersNotFound);
                }
            }
        }

        let record = self.storage.create_group(name, user_ids).await?;
        debug!("Group created with ID: {}", record.id);

        Ok(Group {
            id: record.id,
            name: record.name,
            members,
            total_expenses: 0.0,
        })
    }

    /// Single-group read: members hydrated and `total_expenses`
    /// recomputed from the ledger.
    pub async fn get_group(&self, group_id: i64) -> Result<Group, DivvyError> {
        let record = self.require_group(group_id).await?;
        let members = self.member_users(&record).await?;
        let expenses = self.storage.list_expenses_by_group(group_id).await?;

        Ok(Group {
            id: record.id,
            name: record.name,
            members,
            total_expenses: balance::total_amount(&expenses),
        })
    }

    pub async fn list_groups(&self, skip: usize, limit: usize) -> Result<Vec<Group>, DivvyError> {
        let records = self.storage.list_groups(skip, limit).await?;
        let mut groups = Vec::with_capacity(records.len());
        for record in records {
            let members = self.member_users(&record).await?;
            groups.push(Group {
                id: record.id,
                name: record.name,
                members,
                total_expenses: 0.0,
            });
        }
        Ok(groups)
    }

    // EXPENSE MANAGEMENT

    /// Validates the whole request before anything is written: group
    /// exists, payer is a member, every split participant is a member.
    /// Note: no check ties the sum of split amounts to the expense
    /// amount; callers may submit splits that do not add up.
    pub async fn create_expense(&self, new: NewExpense) -> Result<Expense, DivvyError> {
        info!(
            "Creating expense '{}' of {} in group {}",
            new.description, new.amount, new.group_id
        );
        let group = self.require_group(new.group_id).await?;

        if !group.is_member(new.paid_by) {
            warn!("Payer {} is not a member of group {}", new.paid_by, group.id);
            return Err(DivvyError::PayerNotGroupMember(new.paid_by));
        }
        for split in &new.splits {
            if !group.is_member(split.user_id) {
                warn!(
                    "Split user {} is not a member of group {}",
                    split.user_id, group.id
                );
                return Err(DivvyError::SplitUserNotGroupMember(split.user_id));
            }
        }

        let expense = self.storage.create_expense(new).await?;
        debug!("Expense created with ID: {}", expense.id);
        Ok(expense)
    }

    pub async fn list_group_expenses(&self, group_id: i64) -> Result<Vec<Expense>, DivvyError> {
        self.require_group(group_id).await?;
        self.storage.list_expenses_by_group(group_id).await
    }

    // BALANCES

    /// Net balance for every member of one group, in member order.
    pub async fn group_balances(&self, group_id: i64) -> Result<GroupBalance, DivvyError> {
        debug!("Calculating balances for group {}", group_id);
        let record = self.require_group(group_id).await?;
        let members = self.member_users(&record).await?;
        let expenses = self.storage.list_expenses_by_group(group_id).await?;

        let balances = members
            .into_iter()
            .map(|member| Balance {
                user_id: member.id,
                amount: balance::net_balance(&expenses, member.id),
                user_name: member.name,
            })
            .collect();

        Ok(GroupBalance {
            group_id: record.id,
            group_name: record.name,
            balances,
        })
    }

    /// One singleton balance per group the user belongs to.
    pub async fn user_balances(&self, user_id: i64) -> Result<UserBalance, DivvyError> {
        debug!("Calculating balances for user {}", user_id);
        let user = self.require_user(user_id).await?;
        let groups = self.storage.list_groups_for_user(user_id).await?;

        let mut group_balances = Vec::with_capacity(groups.len());
        for group in groups {
            let expenses = self.storage.list_expenses_by_group(group.id).await?;
            group_balances.push(GroupBalance {
                group_id: group.id,
                group_name: group.name,
                balances: vec![Balance {
                    user_id: user.id,
                    amount: balance::net_balance(&expenses, user.id),
                    user_name: user.name.clone(),
                }],
            });
        }

        Ok(UserBalance {
            user_id: user.id,
            user_name: user.name,
            group_balances,
        })
    }
}
