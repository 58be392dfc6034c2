//! Template variables and the registry handle used to reference them

/// Data type of a template variable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VariableKind {
    #[default]
    String,
}

impl VariableKind {
    /// Parse a declared type name (case-insensitive)
    pub fn parse(type_name: &str) -> Option<Self> {
        if type_name.eq_ignore_ascii_case("string") {
            Some(VariableKind::String)
        } else {
            None
        }
    }
}

/// Stable handle to a variable inside a template's variable registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VariableId(usize);

impl VariableId {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }
}

/// A named template variable
///
/// An unset variable (`value() == None`) is distinct from one holding the
/// empty string, even though both render as nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    name: String,
    kind: VariableKind,
    value: Option<String>,
}

impl Variable {
    /// Create an unset string variable
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: VariableKind::String,
            value: None,
        }
    }

    /// Create a string variable holding `value`
    pub fn with_value(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: VariableKind::String,
            value: Some(value.into()),
        }
    }

    pub fn with_kind(mut self, kind: VariableKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> VariableKind {
        self.kind
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// The value as rendered into templates (empty when unset)
    pub fn rendered_value(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }

    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = Some(value.into());
    }
}

/// Find a variable by name, ignoring ASCII case
pub fn find_variable(variables: &[Variable], name: &str) -> Option<VariableId> {
    variables
        .iter()
        .position(|v| v.name.eq_ignore_ascii_case(name))
        .map(VariableId)
}
