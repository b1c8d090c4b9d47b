//! Chat Bot Module
//!
//! This module contains the command layer of the assistant, including:
//! - Input normalization (Input)
//! - Command handlers, one per recognized intent
//! - The first-match dispatcher
//! - Sessions pairing a user with their own domain store

pub mod dispatch;
pub mod handlers;
pub mod input;
pub mod models;
pub mod session;
pub mod state;

// Re-export commonly used types and functions
pub use dispatch::dispatch;
pub use handlers::Handler;
pub use input::Input;
pub use models::Reply;
pub use session::Session;
pub use state::{AppState, SharedState};
