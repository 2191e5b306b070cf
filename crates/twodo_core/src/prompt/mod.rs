//! Host-interaction capabilities.
//!
//! # Responsibility
//! - Define the text-prompt and delete-confirmation seams so service logic
//!   never depends on which dialog flavor the host renders.
//! - Provide a console flavor for the CLI and a host-provided flavor for
//!   FFI callers whose native dialog already ran.
//!
//! # Invariants
//! - A cancelled prompt or declined confirmation must leave state untouched;
//!   the service relies on that.

use std::io::{self, BufRead, Write};

/// Capability for collecting replacement text for an item.
///
/// Implementations are interchangeable; the service only sees the outcome.
pub trait TextPrompt {
    /// Asks for new text, seeded with the current text.
    ///
    /// Returns `None` when the user cancelled.
    fn request_text(&self, initial: &str) -> Option<String>;
}

/// Capability for the two-choice confirmation that gates deletion.
pub trait DeleteConfirm {
    /// Returns whether the user confirmed deleting the named item.
    fn confirm_delete(&self, text: &str) -> bool;
}

/// Line-based prompt for console hosts.
///
/// An empty input line is a cancel, so plain Enter backs out of the edit.
#[derive(Debug, Default)]
pub struct ConsolePrompt;

impl TextPrompt for ConsolePrompt {
    fn request_text(&self, initial: &str) -> Option<String> {
        print!("new text (was `{initial}`, empty cancels): ");
        io::stdout().flush().ok()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line).ok()?;
        let trimmed = line.trim_end_matches(['\n', '\r']);
        if trimmed.is_empty() {
            return None;
        }
        Some(trimmed.to_string())
    }
}

/// y/N confirmation for console hosts. Anything but `y`/`yes` declines.
#[derive(Debug, Default)]
pub struct ConsoleConfirm;

impl DeleteConfirm for ConsoleConfirm {
    fn confirm_delete(&self, text: &str) -> bool {
        print!("delete `{text}`? [y/N]: ");
        if io::stdout().flush().is_err() {
            return false;
        }

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line).is_err() {
            return false;
        }
        matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }
}

/// Prompt outcome collected by a native host dialog before the call.
///
/// FFI callers run the platform prompt on their side and pass the result
/// through; `None` carries a cancelled dialog into the same code path a
/// console cancel takes.
#[derive(Debug, Clone)]
pub struct HostProvidedText(pub Option<String>);

impl TextPrompt for HostProvidedText {
    fn request_text(&self, _initial: &str) -> Option<String> {
        self.0.clone()
    }
}

/// Confirmation verdict collected by a native host alert before the call.
#[derive(Debug, Clone, Copy)]
pub struct HostConfirmed(pub bool);

impl DeleteConfirm for HostConfirmed {
    fn confirm_delete(&self, _text: &str) -> bool {
        self.0
    }
}
