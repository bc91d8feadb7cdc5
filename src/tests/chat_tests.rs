use crate::chat::{self, ChatClient};
use crate::error::DivvyError;

#[test]
fn test_prompt_wraps_message_with_fixed_prefix() {
    let prompt = chat::build_prompt("How much does Bob owe me?");
    assert_eq!(
        prompt,
        "You are a friendly expense assistant. How much does Bob owe me?"
    );
    assert_eq!(
        chat::SYSTEM_PROMPT,
        "You are a helpful assistant for expense tracking."
    );
}

#[tokio::test]
async fn test_missing_api_key_is_an_upstream_error() {
    let client = ChatClient::new(
        "https://api.openai.com/v1".to_string(),
        String::new(),
        "gpt-3.5-turbo".to_string(),
    );
    let result = client.complete("hello").await;
    assert!(matches!(result, Err(DivvyError::ChatUpstream(_))));
}
