// src/state.rs
use std::sync::Arc;

use crate::services::{
    chatbot::ChatForwarder, menu::MenuCatalog, provider::CompletionProvider,
    session_manager::SessionStore,
};

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub menu: Arc<MenuCatalog>,
    pub chat: ChatForwarder,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(menu: Arc<MenuCatalog>, provider: Arc<dyn CompletionProvider>) -> Self {
        Self {
            chat: ChatForwarder::new(menu.clone(), provider),
            menu,
            sessions: SessionStore::new(),
        }
    }

    /// The catalog built at startup. Every call hands back the same allocation.
    pub fn get_menu(&self) -> Arc<MenuCatalog> {
        self.menu.clone()
    }
}
