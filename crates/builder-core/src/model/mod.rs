//! In-memory template model
//!
//! A [`Template`] owns every variable and prompt for the whole run. Prompt
//! inputs and files refer to them through [`VariableId`] and [`PromptId`]
//! handles resolved once at load time.

pub mod entry;
pub mod prompt;
pub mod variable;

pub use entry::{FileEntry, FolderEntry, RemoteFileEntry};
pub use prompt::{find_prompt, InputKind, Prompt, PromptId, PromptInput, PromptOption};
pub use variable::{find_variable, Variable, VariableId, VariableKind};

/// A fully loaded template
#[derive(Debug, Clone, Default)]
pub struct Template {
    pub version: String,
    pub variables: Vec<Variable>,
    pub prompts: Vec<Prompt>,
    pub files: Vec<FileEntry>,
    pub folders: Vec<FolderEntry>,
    pub remote_files: Vec<RemoteFileEntry>,
}
