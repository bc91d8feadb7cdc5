use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Serialize)]
pub enum DivvyError {
    /// User with given ID not found
    #[error("User {0} not found")]
    UserNotFound(i64),

    /// Group with given ID not found
    #[error("Group {0} not found")]
    GroupNotFound(i64),

    /// One or more user IDs in a group creation request do not exist
    #[error("One or more users not found")]
    UsersNotFound,

    /// Expense payer is not a member of the target group
    #[error("Payer is not a member of the group")]
    PayerNotGroupMember(i64),

    /// A split participant is not a member of the expense's group
    #[error("User {0} is not a member of the group")]
    SplitUserNotGroupMember(i64),

    /// The completion API call failed (transport, status, or shape)
    #[error("Chat service error: {0}")]
    ChatUpstream(String),

    /// Storage operation failed
    #[error("Storage error: {0}")]
    StorageError(String),
}
