// src/services/mod.rs
pub mod chatbot;
pub mod menu;
pub mod prompt;
pub mod provider;
pub mod session_manager;
