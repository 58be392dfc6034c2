//! Template loading from YAML
//!
//! Parses the document, checks its format version, then resolves every
//! name reference (prompt input → variable, file → prompt) into a stable
//! handle so the rest of the run never looks names up again.

mod document;
pub mod version;

use crate::error::LoadError;
use crate::model::{
    find_prompt, find_variable, FileEntry, FolderEntry, InputKind, Prompt, PromptInput,
    PromptOption, RemoteFileEntry, Template, Variable, VariableKind,
};
use document::{FileDoc, PromptDoc, TemplateDocument, VariableDoc};
use std::path::Path;

pub use version::{validate_version, SUPPORTED_VERSIONS};

impl Template {
    /// Load a template from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&text)
    }

    /// Load a template from YAML text
    pub fn from_yaml_str(text: &str) -> Result<Self, LoadError> {
        let document: TemplateDocument = serde_yaml::from_str(text)?;

        let version = document
            .version
            .ok_or(LoadError::MissingVersion)?
            .into_string();
        validate_version(&version)?;

        let variables = load_variables(document.variables)?;
        let prompts = load_prompts(document.prompts, &variables)?;
        let files = load_files(document.files, &prompts);

        let folders = document
            .folders
            .into_iter()
            .map(|folder| FolderEntry::new(folder.path.into_string()))
            .collect();

        let remote_files = document
            .remote
            .into_iter()
            .map(|remote| RemoteFileEntry::new(remote.uri.into_string(), remote.path.into_string()))
            .collect();

        Ok(Template {
            version,
            variables,
            prompts,
            files,
            folders,
            remote_files,
        })
    }
}

fn load_variables(docs: Vec<VariableDoc>) -> Result<Vec<Variable>, LoadError> {
    docs.into_iter()
        .map(|doc| {
            let type_name = doc.kind.into_string();
            let kind = VariableKind::parse(&type_name)
                .ok_or(LoadError::UnknownVariableType(type_name))?;

            let variable = match doc.value {
                Some(value) => Variable::with_value(doc.name.into_string(), value.into_string()),
                None => Variable::new(doc.name.into_string()),
            };
            Ok(variable.with_kind(kind))
        })
        .collect()
}

fn load_prompts(docs: Vec<PromptDoc>, variables: &[Variable]) -> Result<Vec<Prompt>, LoadError> {
    let mut prompts = Vec::with_capacity(docs.len());

    for (prompt_index, doc) in docs.into_iter().enumerate() {
        let mut prompt = Prompt::new(
            doc.name.into_string(),
            doc.result.map(|r| r.into_string()).unwrap_or_default(),
        );

        for (input_index, input) in doc.inputs.into_iter().enumerate() {
            let variable_name = input.variable.into_string();
            let variable = find_variable(variables, &variable_name).ok_or_else(|| {
                LoadError::UnknownVariable {
                    variable: variable_name.clone(),
                    prompt: prompt_index,
                    input: input_index,
                }
            })?;

            let type_name = input.kind.into_string();
            let kind =
                InputKind::parse(&type_name).ok_or(LoadError::UnknownInputType(type_name))?;

            let mut prompt_input = PromptInput::new(input.input.into_string(), kind, variable);
            prompt_input.options = input
                .options
                .into_iter()
                .map(|option| PromptOption::new(option.name.into_string(), option.value.into_string()))
                .collect();

            prompt.inputs.push(prompt_input);
        }

        prompts.push(prompt);
    }

    Ok(prompts)
}

/// Unknown prompt names leave the file with its static content
fn load_files(docs: Vec<FileDoc>, prompts: &[Prompt]) -> Vec<FileEntry> {
    docs.into_iter()
        .map(|doc| FileEntry {
            path: doc.path.into_string(),
            content: doc.content.map(|c| c.into_string()).unwrap_or_default(),
            prompt: doc
                .prompt
                .and_then(|name| find_prompt(prompts, &name.into_string())),
        })
        .collect()
}
