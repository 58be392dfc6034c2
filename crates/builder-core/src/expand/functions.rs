//! Built-in string functions available inside `{{func(...)}}`

use crate::error::ExpandError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    Upper,
    Lower,
    Replace,
}

impl Function {
    /// Resolve a function name, ignoring ASCII case
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "upper" => Some(Function::Upper),
            "lower" => Some(Function::Lower),
            "replace" => Some(Function::Replace),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Function::Upper => "upper",
            Function::Lower => "lower",
            Function::Replace => "replace",
        }
    }

    pub fn arity(self) -> usize {
        match self {
            Function::Upper | Function::Lower => 1,
            Function::Replace => 3,
        }
    }

    /// Apply the function to already-resolved arguments
    pub fn apply(self, args: &[String]) -> Result<String, ExpandError> {
        match (self, args) {
            (Function::Upper, [text]) => Ok(text.to_uppercase()),
            (Function::Lower, [text]) => Ok(text.to_lowercase()),
            (Function::Replace, [search, replacement, subject]) => {
                Ok(replace_all(subject, search, replacement))
            }
            _ => Err(ExpandError::ArgumentCount {
                function: self.name(),
                expected: self.arity(),
                actual: args.len(),
            }),
        }
    }
}

/// Left-to-right, non-overlapping replacement. An empty search leaves the subject as is.
fn replace_all(subject: &str, search: &str, replacement: &str) -> String {
    if search.is_empty() {
        return subject.to_string();
    }
    subject.replace(search, replacement)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_from_name_ignores_case() {
        assert_eq!(Function::from_name("UPPER"), Some(Function::Upper));
        assert_eq!(Function::from_name("Lower"), Some(Function::Lower));
        assert_eq!(Function::from_name("rePlace"), Some(Function::Replace));
        assert_eq!(Function::from_name("title"), None);
    }

    #[test]
    fn test_upper_and_lower() {
        assert_eq!(Function::Upper.apply(&args(&["Hello"])).unwrap(), "HELLO");
        assert_eq!(Function::Lower.apply(&args(&["World"])).unwrap(), "world");
    }

    #[test]
    fn test_replace_does_not_rescan_replacement() {
        let result = Function::Replace
            .apply(&args(&["a", "aa", "banana"]))
            .unwrap();
        assert_eq!(result, "baanaanaa");
    }

    #[test]
    fn test_replace_with_empty_search_is_identity() {
        let result = Function::Replace.apply(&args(&["", "x", "abc"])).unwrap();
        assert_eq!(result, "abc");
    }

    #[test]
    fn test_wrong_argument_count() {
        let err = Function::Replace.apply(&args(&["a", "b"])).unwrap_err();
        assert_eq!(
            err,
            ExpandError::ArgumentCount {
                function: "replace",
                expected: 3,
                actual: 2,
            }
        );

        let err = Function::Upper.apply(&[]).unwrap_err();
        assert!(matches!(err, ExpandError::ArgumentCount { actual: 0, .. }));
    }
}
