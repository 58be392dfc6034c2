//! `{{"prefix" | name}}` per-line prefixing

use super::lookup;
use crate::model::Variable;
use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

static PREFIX_PIPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\{\{(?:"([^"]+)"|'([^']+)')\s*\|\s*(\w+)\}\}"#)
        .expect("prefix-pipe pattern is valid")
});

const LINE_WHITESPACE: &[char] = &[' ', '\t', '\n', '\r'];

/// Replace every prefix-pipe expression in `content`
pub(crate) fn apply_prefix_pipes(content: &str, variables: &[Variable]) -> String {
    let matches: Vec<(Range<usize>, String)> = PREFIX_PIPE
        .captures_iter(content)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let prefix = caps.get(1).or_else(|| caps.get(2))?;
            let name = caps.get(3)?;
            let value = lookup(variables, name.as_str());
            Some((whole.range(), prefix_lines(prefix.as_str(), value)))
        })
        .collect();

    // Back to front so earlier offsets stay valid
    let mut result = content.to_string();
    for (range, replacement) in matches.into_iter().rev() {
        result.replace_range(range, &replacement);
    }
    result
}

/// Prefix each non-blank line of `value`, joining with CRLF
pub(crate) fn prefix_lines(prefix: &str, value: &str) -> String {
    value
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .map(|line| line.trim_matches(LINE_WHITESPACE))
        .filter(|line| !line.is_empty())
        .map(|line| format!("{}{}", prefix, line))
        .collect::<Vec<_>>()
        .join("\r\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_lines_trims_and_drops_blank_lines() {
        let value = "  first  \n\n\tsecond\r\n   \r\nthird";
        assert_eq!(
            prefix_lines("- ", value),
            "- first\r\n- second\r\n- third"
        );
    }

    #[test]
    fn test_prefix_lines_of_empty_value() {
        assert_eq!(prefix_lines("# ", ""), "");
    }

    #[test]
    fn test_single_quoted_prefix() {
        let vars = vec![Variable::with_value("items", "a\nb")];
        let result = apply_prefix_pipes("{{'* '|items}}", &vars);
        assert_eq!(result, "* a\r\n* b");
    }

    #[test]
    fn test_multiple_pipes_replaced_in_place() {
        let vars = vec![
            Variable::with_value("one", "x\ny"),
            Variable::with_value("two", "z"),
        ];
        let result = apply_prefix_pipes("A{{\"1:\" | one}}B{{\"2:\"|two}}C", &vars);
        assert_eq!(result, "A1:x\r\n1:yB2:zC");
    }

    #[test]
    fn test_unknown_variable_resolves_to_empty() {
        let vars = vec![Variable::with_value("known", "v")];
        let result = apply_prefix_pipes("[{{\"> \" | unknown}}]", &vars);
        assert_eq!(result, "[]");
    }

    #[test]
    fn test_empty_prefix_is_not_a_pipe() {
        let vars = vec![Variable::with_value("known", "v")];
        let content = "{{\"\" | known}}";
        assert_eq!(apply_prefix_pipes(content, &vars), content);
    }
}
