//! Noteapp Frontend
//!
//! Single-page note list backed by a REST API:
//! - models / error / config: plain data shared by every layer
//! - services: one HTTP call per operation
//! - state + actions: view state and the intents that change it
//! - app / components: Leptos view

pub mod actions;
pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod state;
pub mod storage;

pub use app::App;
