use crate::balance;
use crate::error::DivvyError;
use crate::models::{Expense, ExpenseSplit, NewExpense, NewExpenseSplit, SplitType, User};
use crate::service::DivvyService;
use crate::storage::in_memory::InMemoryStorage;
use crate::tests::create_test_service;
use chrono::Utc;

async fn seed_group(
    service: &DivvyService<InMemoryStorage>,
    name: &str,
    members: &[&User],
) -> i64 {
    service
        .create_group(name.to_string(), members.iter().map(|u| u.id).collect())
        .await
        .unwrap()
        .id
}

async fn add_expense(
    service: &DivvyService<InMemoryStorage>,
    group_id: i64,
    amount: f64,
    paid_by: i64,
    splits: &[(i64, f64)],
) {
    service
        .create_expense(NewExpense {
            group_id,
            description: "Dinner".to_string(),
            amount,
            split_type: SplitType::Exact,
            paid_by,
            splits: splits
                .iter()
                .map(|&(user_id, amount)| NewExpenseSplit {
                    user_id,
                    amount,
                    percentage: None,
                })
                .collect(),
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn test_group_balances_dinner_scenario() {
    let _ = env_logger::try_init();
    let service = create_test_service();

    let alice = service
        .create_user("Alice".to_string(), "alice@example.com".to_string())
        .await
        .unwrap();
    let bob = service
        .create_user("Bob".to_string(), "bob@example.com".to_string())
        .await
        .unwrap();
    let group_id = seed_group(&service, "Trip", &[&alice, &bob]).await;

    add_expense(
        &service,
        group_id,
        100.0,
        alice.id,
        &[(alice.id, 50.0), (bob.id, 50.0)],
    )
    .await;

    let result = service.group_balances(group_id).await.unwrap();
    assert_eq!(result.group_id, group_id);
    assert_eq!(result.group_name, "Trip");
    assert_eq!(result.balances.len(), 2);

    // Member iteration order: Alice paid 100 and owes 50, Bob owes 50.
    assert_eq!(result.balances[0].user_id, alice.id);
    assert_eq!(result.balances[0].user_name, "Alice");
    assert_eq!(result.balances[0].amount, 50.0);
    assert_eq!(result.balances[1].user_id, bob.id);
    assert_eq!(result.balances[1].amount, -50.0);
}

#[tokio::test]
async fn test_group_balances_missing_group() {
    let _ = env_logger::try_init();
    let service = create_test_service();

    let result = service.group_balances(9).await;
    assert!(matches!(result, Err(DivvyError::GroupNotFound(9))));
}

#[tokio::test]
async fn test_member_with_no_activity_has_zero_balance() {
    let _ = env_logger::try_init();
    let service = create_test_service();

    let alice = service
        .create_user("Alice".to_string(), "alice@example.com".to_string())
        .await
        .unwrap();
    let bob = service
        .create_user("Bob".to_string(), "bob@example.com".to_string())
        .await
        .unwrap();
    let group_id = seed_group(&service, "Trip", &[&alice, &bob]).await;

    add_expense(&service, group_id, 40.0, alice.id, &[(alice.id, 40.0)]).await;

    let result = service.group_balances(group_id).await.unwrap();
    assert_eq!(result.balances[1].user_id, bob.id);
    assert_eq!(result.balances[1].amount, 0.0);
}

#[tokio::test]
async fn test_user_balances_across_groups() {
    let _ = env_logger::try_init();
    let service = create_test_service();

    let alice = service
        .create_user("Alice".to_string(), "alice@example.com".to_string())
        .await
        .unwrap();
    let bob = service
        .create_user("Bob".to_string(), "bob@example.com".to_string())
        .await
        .unwrap();

    let trip = seed_group(&service, "Trip", &[&alice, &bob]).await;
    let flat = seed_group(&service, "Flat", &[&alice, &bob]).await;
    // A group without Alice must not appear in her view
    let solo = seed_group(&service, "Solo", &[&bob]).await;

    add_expense(
        &service,
        trip,
        100.0,
        alice.id,
        &[(alice.id, 50.0), (bob.id, 50.0)],
    )
    .await;
    add_expense(
        &service,
        flat,
        60.0,
        bob.id,
        &[(alice.id, 30.0), (bob.id, 30.0)],
    )
    .await;
    add_expense(&service, solo, 20.0, bob.id, &[(bob.id, 20.0)]).await;

    let result = service.user_balances(alice.id).await.unwrap();
    assert_eq!(result.user_id, alice.id);
    assert_eq!(result.user_name, "Alice");
    assert_eq!(result.group_balances.len(), 2);

    // Each entry carries exactly one balance, Alice's own.
    for gb in &result.group_balances {
        assert_eq!(gb.balances.len(), 1);
        assert_eq!(gb.balances[0].user_id, alice.id);
    }
    assert_eq!(result.group_balances[0].group_id, trip);
    assert_eq!(result.group_balances[0].balances[0].amount, 50.0);
    assert_eq!(result.group_balances[1].group_id, flat);
    assert_eq!(result.group_balances[1].balances[0].amount, -30.0);

    // Per-group and cross-group views agree: the sum of Alice's group
    // balances equals her overall paid-minus-owed position.
    let total: f64 = result
        .group_balances
        .iter()
        .map(|gb| gb.balances[0].amount)
        .sum();
    assert_eq!(total, 100.0 - 50.0 - 30.0);
}

#[tokio::test]
async fn test_user_balances_missing_user() {
    let _ = env_logger::try_init();
    let service = create_test_service();

    let result = service.user_balances(11).await;
    assert!(matches!(result, Err(DivvyError::UserNotFound(11))));
}

#[test]
fn test_balance_engine_arithmetic() {
    let expenses = vec![
        Expense {
            id: 1,
            group_id: 1,
            description: "Dinner".to_string(),
            amount: 100.0,
            split_type: SplitType::Exact,
            paid_by: 1,
            splits: vec![
                ExpenseSplit {
                    id: 1,
                    expense_id: 1,
                    user_id: 1,
                    amount: 50.0,
                    percentage: None,
                },
                ExpenseSplit {
                    id: 2,
                    expense_id: 1,
                    user_id: 2,
                    amount: 50.0,
                    percentage: None,
                },
            ],
            created_at: Utc::now(),
        },
        Expense {
            id: 2,
            group_id: 1,
            description: "Taxi".to_string(),
            amount: 30.0,
            split_type: SplitType::Equal,
            paid_by: 2,
            splits: vec![ExpenseSplit {
                id: 3,
                expense_id: 2,
                user_id: 1,
                amount: 30.0,
                percentage: None,
            }],
            created_at: Utc::now(),
        },
    ];

    assert_eq!(balance::total_paid(&expenses, 1), 100.0);
    assert_eq!(balance::total_owed(&expenses, 1), 80.0);
    assert_eq!(balance::net_balance(&expenses, 1), 20.0);
    assert_eq!(balance::net_balance(&expenses, 2), -20.0);
    // A user with no rows nets to zero
    assert_eq!(balance::net_balance(&expenses, 3), 0.0);
    assert_eq!(balance::total_amount(&expenses), 130.0);
    assert_eq!(balance::total_amount(&[]), 0.0);
}
