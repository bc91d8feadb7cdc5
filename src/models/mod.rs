pub mod balance;
pub mod expense;
pub mod group;
pub mod user;

pub use balance::{Balance, GroupBalance, UserBalance};
pub use expense::{Expense, ExpenseSplit, NewExpense, NewExpenseSplit, SplitType};
pub use group::{Group, GroupRecord};
pub use user::User;
