//! Terminal-independent checklist navigation state

use super::io::Key;
use crate::model::PromptOption;

/// Cursor position and checked flags for a checklist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistState {
    cursor: usize,
    checked: Vec<bool>,
}

impl ChecklistState {
    pub fn new(len: usize) -> Self {
        Self {
            cursor: 0,
            checked: vec![false; len],
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_checked(&self, index: usize) -> bool {
        self.checked.get(index).copied().unwrap_or(false)
    }

    /// Apply a key; returns `true` once the selection is confirmed
    pub fn apply(&mut self, key: Key) -> bool {
        match key {
            Key::Up => self.cursor = self.cursor.saturating_sub(1),
            Key::Down => {
                if self.cursor + 1 < self.checked.len() {
                    self.cursor += 1;
                }
            }
            Key::Toggle => {
                if let Some(flag) = self.checked.get_mut(self.cursor) {
                    *flag = !*flag;
                }
            }
            Key::Confirm => return true,
            Key::Other => {}
        }
        false
    }

    /// One display line per option
    pub fn render(&self, options: &[PromptOption]) -> Vec<String> {
        options
            .iter()
            .enumerate()
            .map(|(i, option)| {
                let pointer = if i == self.cursor { ">" } else { " " };
                let mark = if self.is_checked(i) { "X" } else { " " };
                format!("{} [ {} ] {}", pointer, mark, option.name)
            })
            .collect()
    }

    /// Values of the checked options in declaration order, joined with CRLF
    pub fn selected_values(&self, options: &[PromptOption]) -> String {
        options
            .iter()
            .zip(&self.checked)
            .filter(|(_, checked)| **checked)
            .map(|(option, _)| option.value.as_str())
            .collect::<Vec<_>>()
            .join("\r\n")
    }
}
