//! Template expansion engine
//!
//! [`expand`] resolves three kinds of placeholder, in this order:
//!
//! 1. `{{"prefix" | name}}` (or `'prefix'`): every non-blank line of the
//!    variable's value, trimmed, prefixed and joined with `\r\n`
//! 2. `{{func(args)}}`: the built-in functions `upper`, `lower` and
//!    `replace`, with quoted literals, variable names or nested calls as
//!    arguments
//! 3. `{{name}}`: the variable's value
//!
//! Each pass works on the output of the previous one. A `{{name}}` that
//! matches no variable is left untouched.

pub mod call;
pub mod functions;
mod prefix;

use crate::error::ExpandError;
use crate::model::Variable;

pub use call::{Call, Expr};
pub use functions::Function;

/// Expand all placeholders in `content`
///
/// With an empty variable list the content is returned unchanged, even if
/// it contains placeholder syntax.
pub fn expand(content: &str, variables: &[Variable]) -> Result<String, ExpandError> {
    if variables.is_empty() {
        return Ok(content.to_string());
    }

    let piped = prefix::apply_prefix_pipes(content, variables);
    let called = call::apply_function_calls(&piped, variables)?;
    Ok(replace_placeholders(&called, variables))
}

/// Value of the first variable named exactly `name` that holds a value
pub(crate) fn lookup<'a>(variables: &'a [Variable], name: &str) -> &'a str {
    variables
        .iter()
        .filter(|v| v.name() == name)
        .find_map(Variable::value)
        .unwrap_or("")
}

fn replace_placeholders(content: &str, variables: &[Variable]) -> String {
    variables.iter().fold(content.to_string(), |text, variable| {
        let placeholder = format!("{{{{{}}}}}", variable.name());
        if text.contains(&placeholder) {
            text.replace(&placeholder, variable.rendered_value())
        } else {
            text
        }
    })
}
