//! Interactive prompt definitions

use super::variable::VariableId;

/// How a prompt input gathers its value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputKind {
    /// A single line, stored verbatim
    #[default]
    InputString,
    /// A multi-select list of options
    Checklist,
    /// Repeated lines until an empty one
    ArrayList,
}

impl InputKind {
    /// Parse a declared input type (case-insensitive)
    pub fn parse(type_name: &str) -> Option<Self> {
        match type_name.to_ascii_lowercase().as_str() {
            "inputstring" => Some(InputKind::InputString),
            "checklist" => Some(InputKind::Checklist),
            "arraylist" => Some(InputKind::ArrayList),
            _ => None,
        }
    }
}

/// One selectable entry of a checklist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptOption {
    /// Label shown to the user
    pub name: String,
    /// Text emitted when the option is checked
    pub value: String,
}

impl PromptOption {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A single question inside a prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptInput {
    /// Text shown to the user, trailing whitespace included
    pub text: String,
    pub kind: InputKind,
    /// Variable receiving the collected value
    pub variable: Option<VariableId>,
    pub options: Vec<PromptOption>,
}

impl PromptInput {
    pub fn new(text: impl Into<String>, kind: InputKind, variable: VariableId) -> Self {
        Self {
            text: text.into(),
            kind,
            variable: Some(variable),
            options: Vec::new(),
        }
    }

    /// An input with no variable attached; collecting it fails
    pub fn unbound(text: impl Into<String>, kind: InputKind) -> Self {
        Self {
            text: text.into(),
            kind,
            variable: None,
            options: Vec::new(),
        }
    }

    pub fn with_option(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.push(PromptOption::new(name, value));
        self
    }
}

/// Stable handle to a prompt inside a template's prompt registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PromptId(usize);

impl PromptId {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }
}

/// A named sequence of inputs plus the template rendered once they are answered
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Prompt {
    pub name: String,
    pub result_template: String,
    pub inputs: Vec<PromptInput>,
}

impl Prompt {
    pub fn new(name: impl Into<String>, result_template: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            result_template: result_template.into(),
            inputs: Vec::new(),
        }
    }

    pub fn with_input(mut self, input: PromptInput) -> Self {
        self.inputs.push(input);
        self
    }
}

/// Find a prompt by name, ignoring ASCII case
pub fn find_prompt(prompts: &[Prompt], name: &str) -> Option<PromptId> {
    prompts
        .iter()
        .position(|p| p.name.eq_ignore_ascii_case(name))
        .map(PromptId)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input_kind() {
        assert_eq!(InputKind::parse("InputString"), Some(InputKind::InputString));
        assert_eq!(InputKind::parse("CHECKLIST"), Some(InputKind::Checklist));
        assert_eq!(InputKind::parse("arraylist"), Some(InputKind::ArrayList));
        assert_eq!(InputKind::parse("radio"), None);
    }

    #[test]
    fn test_options_keep_declaration_order() {
        let input = PromptInput::new("Pick", InputKind::Checklist, VariableId::new(0))
            .with_option("A", "a")
            .with_option("B", "b");

        let names: Vec<&str> = input.options.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn test_find_prompt_ignores_case() {
        let prompts = vec![Prompt::new("License", ""), Prompt::new("deps", "")];
        assert_eq!(find_prompt(&prompts, "LICENSE"), Some(PromptId::new(0)));
        assert_eq!(find_prompt(&prompts, "other"), None);
    }
}
