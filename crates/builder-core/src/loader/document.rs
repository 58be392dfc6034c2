//! Raw YAML document shape

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_yaml::Value;

/// Top-level template document, before names are resolved
#[derive(Debug, Deserialize)]
pub(crate) struct TemplateDocument {
    pub version: Option<ScalarText>,

    #[serde(default)]
    pub variables: Vec<VariableDoc>,

    #[serde(default)]
    pub prompts: Vec<PromptDoc>,

    #[serde(default)]
    pub files: Vec<FileDoc>,

    #[serde(default)]
    pub folders: Vec<FolderDoc>,

    #[serde(default)]
    pub remote: Vec<RemoteDoc>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct VariableDoc {
    pub name: ScalarText,
    #[serde(rename = "type")]
    pub kind: ScalarText,
    pub value: Option<ScalarText>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PromptDoc {
    pub name: ScalarText,
    pub result: Option<ScalarText>,
    #[serde(default)]
    pub inputs: Vec<InputDoc>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct InputDoc {
    pub input: ScalarText,
    pub variable: ScalarText,
    #[serde(rename = "type")]
    pub kind: ScalarText,
    #[serde(default)]
    pub options: Vec<OptionDoc>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OptionDoc {
    pub name: ScalarText,
    pub value: ScalarText,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FileDoc {
    pub path: ScalarText,
    pub content: Option<ScalarText>,
    pub prompt: Option<ScalarText>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FolderDoc {
    pub path: ScalarText,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RemoteDoc {
    pub uri: ScalarText,
    pub path: ScalarText,
}

/// A YAML scalar read as text, whatever type YAML inferred for it
///
/// `version: 1.0` and `value: 42` are as valid as their quoted forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScalarText(pub String);

impl ScalarText {
    pub fn into_string(self) -> String {
        self.0
    }
}

impl<'de> Deserialize<'de> for ScalarText {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        match value {
            Value::String(text) => Ok(ScalarText(text)),
            Value::Number(number) => Ok(ScalarText(number.to_string())),
            Value::Bool(flag) => Ok(ScalarText(flag.to_string())),
            other => Err(D::Error::custom(format!(
                "expected a scalar value, found {:?}",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalars_of_any_type_read_as_text() {
        let doc: FolderDoc = serde_yaml::from_str("path: 2024").unwrap();
        assert_eq!(doc.path.into_string(), "2024");

        let doc: FolderDoc = serde_yaml::from_str("path: true").unwrap();
        assert_eq!(doc.path.into_string(), "true");
    }

    #[test]
    fn test_sequences_are_not_scalars() {
        let result: Result<FolderDoc, _> = serde_yaml::from_str("path: [a, b]");
        assert!(result.is_err());
    }

    #[test]
    fn test_quoted_trailing_whitespace_preserved() {
        let doc: OptionDoc = serde_yaml::from_str("name: \"Name: \"\nvalue: v").unwrap();
        assert_eq!(doc.name.into_string(), "Name: ");
    }
}
