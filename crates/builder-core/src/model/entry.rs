//! Filesystem entries declared by a template

use super::prompt::PromptId;

/// A text file to write
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FileEntry {
    /// Path relative to the output directory
    pub path: String,
    /// Static content, expanded against the template variables
    pub content: String,
    /// When set, the prompt's result replaces `content`
    pub prompt: Option<PromptId>,
}

impl FileEntry {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            prompt: None,
        }
    }

    pub fn with_prompt(mut self, prompt: PromptId) -> Self {
        self.prompt = Some(prompt);
        self
    }
}

/// A directory to create
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FolderEntry {
    pub path: String,
}

impl FolderEntry {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

/// A file downloaded over HTTP
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RemoteFileEntry {
    pub uri: String,
    pub path: String,
}

impl RemoteFileEntry {
    pub fn new(uri: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            path: path.into(),
        }
    }
}
