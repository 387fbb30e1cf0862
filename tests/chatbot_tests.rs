mod common;

use common::RecordingProvider;
use nopickles_mvp::message::{ChatResponse, Message, Role};
use nopickles_mvp::services::chatbot::{ChatForwarder, MAX_TOKENS, MODEL, TEMPERATURE};
use nopickles_mvp::services::menu::MenuCatalog;
use std::sync::Arc;

fn menu() -> Arc<MenuCatalog> {
    Arc::new(MenuCatalog::nopickles())
}
use nopickles_mvp::services::prompt::build_system_prompt;

#[tokio::test]
async fn first_turn_gets_system_prompt() {
    let provider = RecordingProvider::replying("Sure! A medium latte is $2.40.");
    let forwarder = ChatForwarder::new(menu(), provider.clone());

    let response = forwarder
        .handle_chat(vec![Message::user("I'd like a medium latte")])
        .await
        .unwrap();

    assert_eq!(
        response,
        ChatResponse { message: "Sure! A medium latte is $2.40.".to_string(), total: None }
    );

    let requests = provider.recorded();
    assert_eq!(requests.len(), 1);
    let sent = &requests[0];
    assert_eq!(sent.messages.len(), 2);
    assert_eq!(sent.messages[0].role, Role::System);
    assert_eq!(sent.messages[0].content, build_system_prompt(&MenuCatalog::nopickles()));
    assert_eq!(sent.messages[1], Message::user("I'd like a medium latte"));
    assert_eq!(sent.model, MODEL);
    assert_eq!(sent.temperature, TEMPERATURE);
    assert_eq!(sent.max_tokens, MAX_TOKENS);
}

#[tokio::test]
async fn history_is_forwarded_untouched() {
    let provider = RecordingProvider::replying("Anything else?");
    let forwarder = ChatForwarder::new(menu(), provider.clone());

    let conversation = vec![
        Message::user("A coffee please"),
        Message::assistant("One coffee, that's $1.50."),
        Message::user("And a donut"),
    ];
    forwarder.handle_chat(conversation.clone()).await.unwrap();

    let sent = &provider.recorded()[0];
    assert_eq!(sent.messages, conversation);
    assert!(sent.messages.iter().all(|m| m.role != Role::System));
}

#[tokio::test]
async fn single_message_always_gets_fresh_prompt() {
    let provider = RecordingProvider::replying("ok");
    let forwarder = ChatForwarder::new(menu(), provider.clone());

    // A lone system message still trips the count-of-one rule.
    forwarder.handle_chat(vec![Message::system("be brief")]).await.unwrap();
    forwarder.handle_chat(vec![Message::user("hi")]).await.unwrap();

    let requests = provider.recorded();
    for sent in &requests {
        assert_eq!(sent.messages.len(), 2);
        assert_eq!(sent.messages[0].content, build_system_prompt(&MenuCatalog::nopickles()));
    }
}

#[tokio::test]
async fn total_is_always_null() {
    let provider = RecordingProvider::replying("Your total is $4.50.");
    let forwarder = ChatForwarder::new(menu(), provider);

    let response = forwarder
        .handle_chat(vec![
            Message::user("Two coffees"),
            Message::assistant("Two coffees, $3.00."),
            Message::user("and a donut, what's my total?"),
        ])
        .await
        .unwrap();

    assert_eq!(response.total, None);
}

#[tokio::test]
async fn upstream_failure_is_returned_not_retried() {
    let provider = RecordingProvider::failing();
    let forwarder = ChatForwarder::new(menu(), provider.clone());

    let err = forwarder.handle_chat(vec![Message::user("hello")]).await.unwrap_err();

    assert!(err.to_string().contains("connection refused"));
    assert_eq!(provider.recorded().len(), 1);
}
