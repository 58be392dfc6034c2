//! Raw-mode terminal input backed by `console`

use super::io::{Key, PromptIo};
use console::{Key as TermKey, Term};
use std::io;

/// Arrow-key navigation on an interactive terminal
pub struct TerminalIo {
    term: Term,
}

impl TerminalIo {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }

    /// Whether stdout is an attended terminal that can read raw keys
    pub fn is_available() -> bool {
        Term::stdout().is_term() && console::user_attended()
    }
}

impl Default for TerminalIo {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptIo for TerminalIo {
    fn show(&mut self, text: &str) -> io::Result<()> {
        self.term.write_str(text)?;
        self.term.flush()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.term.read_line().map(Some)
    }

    fn read_key(&mut self) -> io::Result<Key> {
        self.term.hide_cursor()?;
        let key = self.term.read_key();
        self.term.show_cursor()?;

        Ok(match key? {
            TermKey::ArrowUp => Key::Up,
            TermKey::ArrowDown => Key::Down,
            TermKey::Char(' ') => Key::Toggle,
            TermKey::Enter => Key::Confirm,
            _ => Key::Other,
        })
    }

    fn clear_lines(&mut self, count: usize) -> io::Result<()> {
        self.term.clear_last_lines(count)
    }

    fn checklist_hint(&self) -> &'static str {
        "Use Up/Down arrows to navigate, Space to select/deselect, Enter to confirm"
    }
}
