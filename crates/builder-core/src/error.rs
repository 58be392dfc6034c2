//! Error types for expansion, prompt collection and template loading

use thiserror::Error;

/// Failures raised while expanding a template string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpandError {
    #[error("Unknown function: {0}")]
    UnknownFunction(String),

    #[error("Function '{function}' expects {expected} argument{}, got {actual}", plural(.expected))]
    ArgumentCount {
        function: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid function expression at offset {offset}: {reason}")]
    MalformedExpression { offset: usize, reason: String },
}

fn plural(count: &usize) -> &'static str {
    if *count == 1 {
        ""
    } else {
        "s"
    }
}

/// Failures raised while collecting prompt answers
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Prompt input '{0}' has no variable attached")]
    MissingVariable(String),

    #[error("No options available for checklist input '{0}'")]
    EmptyOptions(String),

    #[error(transparent)]
    Expand(#[from] ExpandError),

    #[error("Prompt I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures raised while turning a YAML document into a template
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Required field \"version\" not found in YAML.")]
    MissingVersion,

    #[error("Template version not supported: {found}. Supported versions: {supported}")]
    UnsupportedVersion { found: String, supported: String },

    #[error("Variable \"{variable}\" not found for input at index {input} in prompt at index {prompt}.")]
    UnknownVariable {
        variable: String,
        prompt: usize,
        input: usize,
    },

    #[error("Unknown variable type: {0}")]
    UnknownVariableType(String),

    #[error("Unknown prompt input type: {0}")]
    UnknownInputType(String),

    #[error("Failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Failed to read template {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_count_message() {
        let single = ExpandError::ArgumentCount {
            function: "upper",
            expected: 1,
            actual: 0,
        };
        assert_eq!(single.to_string(), "Function 'upper' expects 1 argument, got 0");

        let many = ExpandError::ArgumentCount {
            function: "replace",
            expected: 3,
            actual: 2,
        };
        assert_eq!(many.to_string(), "Function 'replace' expects 3 arguments, got 2");
    }

    #[test]
    fn test_prompt_error_wraps_expand_error() {
        let err: PromptError = ExpandError::UnknownFunction("title".to_string()).into();
        assert_eq!(err.to_string(), "Unknown function: title");
    }
}
