//! Balance engine: pure arithmetic over expense records.
//!
//! Balances are `f64` sums with no rounding applied; results are
//! recomputed from the ledger on every call.

use crate::models::Expense;

/// Sum of expense amounts paid by `user_id`.
pub fn total_paid(expenses: &[Expense], user_id: i64) -> f64 {
    expenses
        .iter()
        .filter(|e| e.paid_by == user_id)
        .map(|e| e.amount)
        .sum()
}

/// Sum of split amounts owed by `user_id` across the given expenses.
pub fn total_owed(expenses: &[Expense], user_id: i64) -> f64 {
    expenses
        .iter()
        .flat_map(|e| e.splits.iter())
        .filter(|s| s.user_id == user_id)
        .map(|s| s.amount)
        .sum()
}

/// Net position: what the user fronted minus what they owe.
pub fn net_balance(expenses: &[Expense], user_id: i64) -> f64 {
    total_paid(expenses, user_id) - total_owed(expenses, user_id)
}

/// Sum of all expense amounts; backs the group `total_expenses` field.
pub fn total_amount(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|e| e.amount).sum()
}
