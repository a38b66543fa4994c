//! State Management
//!
//! Global application state and the chat transcript state machine.

pub mod chat;
pub mod global;

pub use chat::{Transcript, CHAT_HISTORY_TURNS};
pub use global::{provide_global_state, GlobalState};
