//! Bot Models and Constants

use chrono::{DateTime, Local};

// =============================================================================
// Constants
// =============================================================================

/// Name used when a session is opened without one
pub const DEFAULT_USER_NAME: &str = "Alice";

/// Reply to `exit`
pub const GOODBYE: &str = "Goodbye!";

/// Reply to `help`, also printed when a terminal session starts
pub const HELP_TEXT: &str =
    "You can ask me about your symptoms, our doctors, or the pharmacy. For example:\n\
- Type 'list' to see a list of doctors, or 'recommend' for a suggestion.\n\
- Ask about symptoms like 'headache' or 'fever' to get advice on how to deal with them.\n\
- Pick a doctor with 'select <number>' or 'select doctor <id>', then rate them with 'rate <1-5>'.\n\
- Book with 'book <doctorId> <time>' (e.g., 'book D3 2PM') and check 'view appointments'.\n\
- Type 'pharmacy' to see medications. Use 'buy <medication> [quantity]' or 'add <medication> <quantity>' to fill your cart and 'remove [quantity] <medication>' to take items out.\n\
- Type 'view cart' to see items in your cart or 'checkout' to complete your purchase.\n\
- Type 'exit' to leave.";

/// Catch-all reply for unrecognized input
pub const DEFAULT_REPLY: &str =
    "I don't understand that. Type 'help' for instructions, or try 'list', 'pharmacy' or 'view cart'.";

// =============================================================================
// Conversation Records
// =============================================================================

/// One message received from the user
#[derive(Debug, Clone)]
pub struct Query {
    pub user_id: String,
    pub content: String,
    pub timestamp: DateTime<Local>,
}

/// The bot's answer to a single query
#[derive(Debug, Clone)]
pub struct Reply {
    pub content: String,
    pub time: DateTime<Local>,
}

impl Reply {
    pub fn now(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            time: Local::now(),
        }
    }

    /// `[HH:MM:SS] Bot: <content>`
    pub fn render(&self) -> String {
        format!("[{}] Bot: {}", self.time.format("%H:%M:%S"), self.content)
    }
}
