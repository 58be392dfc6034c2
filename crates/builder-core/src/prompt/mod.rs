//! Prompt collection
//!
//! A [`PromptCollector`] asks every input of a prompt in declaration order,
//! stores each answer in the input's variable, then renders the prompt's
//! result template through [`expand`](crate::expand::expand).

pub mod checklist;
pub mod io;
#[cfg(feature = "tui")]
pub mod terminal;

use crate::error::PromptError;
use crate::expand::expand;
use crate::model::{InputKind, Prompt, PromptInput, Variable, VariableId};

pub use checklist::ChecklistState;
pub use io::{Key, LineIo, PromptIo};
#[cfg(feature = "tui")]
pub use terminal::TerminalIo;

/// Gathers prompt answers from an interactive input source
pub struct PromptCollector<I> {
    io: I,
}

impl<I: PromptIo> PromptCollector<I> {
    pub fn new(io: I) -> Self {
        Self { io }
    }

    pub fn into_inner(self) -> I {
        self.io
    }

    /// Ask every input of `prompt`, then render its result template
    ///
    /// An absent prompt yields the empty string without asking anything.
    pub fn collect(
        &mut self,
        prompt: Option<&Prompt>,
        variables: &mut [Variable],
    ) -> Result<String, PromptError> {
        let Some(prompt) = prompt else {
            return Ok(String::new());
        };

        for input in &prompt.inputs {
            let target = bound_variable(input, variables)?;
            let value = match input.kind {
                InputKind::InputString => self.read_input_string(input)?,
                InputKind::Checklist => self.read_checklist(input)?,
                InputKind::ArrayList => self.read_array_list(input)?,
            };
            if let Some(variable) = variables.get_mut(target.index()) {
                variable.set_value(value);
            }
        }

        Ok(expand(&prompt.result_template, variables)?)
    }

    fn read_input_string(&mut self, input: &PromptInput) -> Result<String, PromptError> {
        self.io.show(&input.text)?;
        Ok(self.io.read_line()?.unwrap_or_default())
    }

    fn read_checklist(&mut self, input: &PromptInput) -> Result<String, PromptError> {
        if input.options.is_empty() {
            return Err(PromptError::EmptyOptions(input.text.trim().to_string()));
        }

        self.io.show(&format!("\n{}\n\n", input.text))?;

        let mut state = ChecklistState::new(input.options.len());
        loop {
            let mut frame = state.render(&input.options);
            frame.push(self.io.checklist_hint().to_string());
            self.io.show(&format!("{}\n", frame.join("\n")))?;

            let key = self.io.read_key()?;
            self.io.clear_lines(frame.len())?;
            if state.apply(key) {
                break;
            }
        }

        self.io
            .show(&format!("{}\n\n", state.render(&input.options).join("\n")))?;
        Ok(state.selected_values(&input.options))
    }

    fn read_array_list(&mut self, input: &PromptInput) -> Result<String, PromptError> {
        self.io.show(&format!(
            "\n{}\nEnter each option and press Enter. Leave empty and press Enter to finish:\n\n",
            input.text
        ))?;

        let mut lines = Vec::new();
        loop {
            self.io.show("> ")?;
            let Some(line) = self.io.read_line()? else {
                break;
            };
            let entry = line.trim();
            if entry.is_empty() {
                break;
            }
            lines.push(entry.to_string());
        }

        self.io.show("\n")?;
        Ok(lines.join("\r\n"))
    }
}

fn bound_variable(input: &PromptInput, variables: &[Variable]) -> Result<VariableId, PromptError> {
    input
        .variable
        .filter(|id| id.index() < variables.len())
        .ok_or_else(|| PromptError::MissingVariable(input.text.trim().to_string()))
}
