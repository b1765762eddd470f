//! Unified messaging system for session and command output

use crate::environment::Environment;

// ANSI Color Codes for session messages
pub const COLOR_INFO: &str = "\x1b[1;36m"; // Bold Cyan
pub const COLOR_SUCCESS: &str = "\x1b[1;32m"; // Bold Green
pub const COLOR_WARN: &str = "\x1b[1;33m"; // Bold Yellow
pub const COLOR_RESET: &str = "\x1b[0m";

/// Session-specific message types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionMessage {
    /// Normal session start/shutdown messages
    Info(String),
    /// Success messages for completed operations
    Success(String),
    /// Something was skipped or ignored
    Warn(String),
}

impl SessionMessage {
    /// Create an info message
    pub fn info(msg: impl Into<String>) -> Self {
        Self::Info(msg.into())
    }

    /// Create a success message
    pub fn success(msg: impl Into<String>) -> Self {
        Self::Success(msg.into())
    }

    pub fn warn(msg: impl Into<String>) -> Self {
        Self::Warn(msg.into())
    }

    /// The message with its colored tag.
    pub fn formatted(&self) -> String {
        let (color, tag, msg) = match self {
            Self::Info(msg) => (COLOR_INFO, "INFO", msg),
            Self::Success(msg) => (COLOR_SUCCESS, "SUCCESS", msg),
            Self::Warn(msg) => (COLOR_WARN, "WARN", msg),
        };
        format!("{}[{}]{} {}", color, tag, COLOR_RESET, msg)
    }

    /// Print the message with appropriate formatting
    pub fn print(&self) {
        println!("{}", self.formatted());
    }
}

/// Print session startup message
pub fn print_session_starting(mode: &str, environment: &Environment) {
    SessionMessage::info(format!(
        "Starting {} mode against {}",
        mode,
        environment.api_url()
    ))
    .print();
}

/// Print where the "Log out" action leads
pub fn print_logout_redirect(redirect_to: &str) {
    SessionMessage::info(format!("Logged out. Redirecting to {}", redirect_to)).print();
}

/// Print session exit message
pub fn print_session_exit_success() {
    SessionMessage::success("Gradebook dashboard exited successfully").print();
}
