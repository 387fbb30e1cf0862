// src/services/chatbot.rs
use std::sync::Arc;

use super::{
    menu::MenuCatalog,
    prompt::build_system_prompt,
    provider::{CompletionProvider, CompletionRequest, UpstreamError},
};
use crate::message::{ChatResponse, Message};

pub const MODEL: &str = "gpt-3.5-turbo";
pub const TEMPERATURE: f32 = 0.7;
pub const MAX_TOKENS: u32 = 500;

/// Forwards a conversation to the completion provider.
#[derive(Clone)]
pub struct ChatForwarder {
    catalog: Arc<MenuCatalog>,
    provider: Arc<dyn CompletionProvider>,
}

impl ChatForwarder {
    pub fn new(catalog: Arc<MenuCatalog>, provider: Arc<dyn CompletionProvider>) -> Self {
        Self { catalog, provider }
    }

    /// Builds the upstream message list. The system prompt goes in front only
    /// when the conversation holds exactly one message.
    pub fn prepare_messages(&self, conversation: Vec<Message>) -> Vec<Message> {
        if conversation.len() != 1 {
            return conversation;
        }
        let mut messages = Vec::with_capacity(2);
        messages.push(Message::system(build_system_prompt(&self.catalog)));
        messages.extend(conversation);
        messages
    }

    pub async fn handle_chat(&self, conversation: Vec<Message>) -> Result<ChatResponse, UpstreamError> {
        let first_turn = conversation.len() == 1;
        let messages = self.prepare_messages(conversation);
        tracing::debug!(count = messages.len(), first_turn, "forwarding conversation");

        let request = CompletionRequest {
            model: MODEL.to_string(),
            messages,
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let reply = self.provider.complete(&request).await?;

        Ok(ChatResponse { message: reply, total: None })
    }
}
