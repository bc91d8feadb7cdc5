use crate::error::DivvyError;
use crate::tests::create_test_service;

#[tokio::test]
async fn test_create_and_get_user() {
    let _ = env_logger::try_init();
    let service = create_test_service();

    let user = service
        .create_user("Alice".to_string(), "alice@example.com".to_string())
        .await
        .unwrap();
    assert_eq!(user.name, "Alice");
    assert_eq!(user.email, "alice@example.com");

    let fetched = service.get_user(user.id).await.unwrap();
    assert_eq!(fetched.id, user.id);
    assert_eq!(fetched.email, user.email);
}

#[tokio::test]
async fn test_user_ids_are_sequential() {
    let _ = env_logger::try_init();
    let service = create_test_service();

    let first = service
        .create_user("Alice".to_string(), "alice@example.com".to_string())
        .await
        .unwrap();
    let second = service
        .create_user("Bob".to_string(), "bob@example.com".to_string())
        .await
        .unwrap();
    assert_eq!(second.id, first.id + 1);
}

#[tokio::test]
async fn test_get_missing_user() {
    let _ = env_logger::try_init();
    let service = create_test_service();

    let result = service.get_user(42).await;
    assert!(matches!(result, Err(DivvyError::UserNotFound(42))));
}

#[tokio::test]
async fn test_list_users_pagination() {
    let _ = env_logger::try_init();
    let service = create_test_service();

    for i in 0..5 {
        service
            .create_user(format!("User {}", i), format!("user{}@example.com", i))
            .await
            .unwrap();
    }

    let page = service.list_users(1, 2).await.unwrap();
    assert_eq!(page.len(), 2);
    assert_eq!(page[0].name, "User 1");
    assert_eq!(page[1].name, "User 2");

    let rest = service.list_users(4, 100).await.unwrap();
    assert_eq!(rest.len(), 1);
}
