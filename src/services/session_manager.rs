// src/services/session_manager.rs
use std::{collections::HashMap, fmt::Debug, sync::Arc};

use tokio::sync::RwLock;

use crate::message::Message;

/// Session id to conversation turns.
///
/// Created at startup and dropped at shutdown. No endpoint writes to it:
/// clients replay the full conversation on every `/api/chat` request.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<String, Vec<Message>>>>,
}

impl Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore").finish_non_exhaustive()
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get_history(&self, session_id: &str) -> Option<Vec<Message>> {
        let guard = self.inner.read().await;
        guard.get(session_id).cloned()
    }

    /// Number of sessions
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}
