use std::io::{self, BufRead, Write};
use std::sync::Mutex;

use tracing::warn;

use crate::messages::Message;

/// Asks the operator to approve an action before it runs
pub trait Confirmation: Send + Sync {
    fn confirm(&self, prompt: Message) -> bool;
}

/// Tells the operator that something went wrong
pub trait Notification: Send + Sync {
    fn alert(&self, message: Message);
}

/// Blocking prompt and alert on the controlling terminal
#[derive(Clone, Copy, Debug, Default)]
pub struct TerminalDialog {
    assume_yes: bool,
}

impl TerminalDialog {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Confirmation for TerminalDialog {
    fn confirm(&self, prompt: Message) -> bool {
        if self.assume_yes {
            return true;
        }

        let mut stdout = io::stdout().lock();
        if write!(stdout, "{} [y/N] ", prompt.text())
            .and_then(|_| stdout.flush())
            .is_err()
        {
            return false;
        }

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(_) => is_affirmative(&line),
            Err(e) => {
                warn!("Failed to read confirmation: {}", e);
                false
            }
        }
    }
}

impl Notification for TerminalDialog {
    fn alert(&self, message: Message) {
        eprintln!("{}", message.text());
    }
}

/// Accepts English and Bulgarian yes; anything else declines
fn is_affirmative(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes" | "д" | "да"
    )
}

/// The answer the operator already gave in a page's inline confirmation
#[derive(Clone, Copy, Debug)]
pub struct FormAnswer(pub bool);

impl Confirmation for FormAnswer {
    fn confirm(&self, _prompt: Message) -> bool {
        self.0
    }
}

/// Non-blocking notifications kept as UI state until the next render
#[derive(Debug, Default)]
pub struct Toasts {
    messages: Mutex<Vec<Message>>,
}

impl Toasts {
    pub fn messages(&self) -> Vec<Message> {
        self.messages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn latest(&self) -> Option<Message> {
        self.messages().last().copied()
    }
}

impl Notification for Toasts {
    fn alert(&self, message: Message) {
        self.messages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(message);
    }
}
