//! `{{func(args)}}` parsing and evaluation
//!
//! Parsing produces an [`Expr`] tree that is evaluated afterwards, so nested
//! calls always resolve before the call that encloses them.

use super::functions::Function;
use super::lookup;
use crate::error::ExpandError;
use crate::model::Variable;

/// A function argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A quoted string with doubled quotes already unescaped
    Literal(String),
    /// A bare variable name
    Variable(String),
    Call(Call),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub name: String,
    pub args: Vec<Expr>,
}

/// Replace every complete `{{func(...)}}` in `content` with its result
///
/// Results are inserted as-is and never scanned again.
pub(crate) fn apply_function_calls(
    content: &str,
    variables: &[Variable],
) -> Result<String, ExpandError> {
    let mut output = String::with_capacity(content.len());
    let mut cursor = 0;

    while let Some(found) = content[cursor..].find("{{") {
        let open = cursor + found;
        match parse_call_site(content, open)? {
            Some((call, end)) => {
                output.push_str(&content[cursor..open]);
                output.push_str(&evaluate_call(&call, variables)?);
                cursor = end;
            }
            None => {
                // Step over a single brace so "{{{f(x)}}" still finds the call
                output.push_str(&content[cursor..open + 1]);
                cursor = open + 1;
            }
        }
    }

    output.push_str(&content[cursor..]);
    Ok(output)
}

/// Try to parse a call starting at the `{{` found at `open`
///
/// Returns `Ok(None)` when the text is not a complete `{{func(...)}}`, and
/// the call plus the offset just past its closing `}}` otherwise. Argument
/// lists that do not parse are only an error when their parentheses never
/// balance or the call is closed by `}}`.
pub fn parse_call_site(content: &str, open: usize) -> Result<Option<(Call, usize)>, ExpandError> {
    let mut parser = Parser::new(content, open + 2);

    parser.skip_whitespace();
    let name = parser.word();
    if name.is_empty() {
        return Ok(None);
    }
    parser.skip_whitespace();
    if !parser.eat('(') {
        return Ok(None);
    }

    let args_start = parser.pos;
    let args = match parser.arguments() {
        Ok(args) => args,
        Err(err) => {
            return match closing_paren(content, args_start) {
                Some(close) if !content[close + 1..].starts_with("}}") => Ok(None),
                _ => Err(err),
            };
        }
    };

    if parser.eat_str("}}") {
        Ok(Some((Call { name, args }, parser.pos)))
    } else {
        Ok(None)
    }
}

/// Evaluate a parsed call against the variable list
pub fn evaluate_call(call: &Call, variables: &[Variable]) -> Result<String, ExpandError> {
    let function = Function::from_name(&call.name)
        .ok_or_else(|| ExpandError::UnknownFunction(call.name.clone()))?;

    let args = call
        .args
        .iter()
        .map(|arg| evaluate(arg, variables))
        .collect::<Result<Vec<_>, _>>()?;

    function.apply(&args)
}

fn evaluate(expr: &Expr, variables: &[Variable]) -> Result<String, ExpandError> {
    match expr {
        Expr::Literal(text) => Ok(text.clone()),
        Expr::Variable(name) => Ok(lookup(variables, name).to_string()),
        Expr::Call(call) => evaluate_call(call, variables),
    }
}

/// Offset of the `)` balancing the `(` just before `start`, skipping quoted text
fn closing_paren(content: &str, start: usize) -> Option<usize> {
    let mut depth = 1usize;
    let mut quote = None;

    for (i, c) in content[start..].char_indices() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '(') => depth += 1,
            (None, ')') => {
                depth -= 1;
                if depth == 0 {
                    return Some(start + i);
                }
            }
            (None, _) => {}
        }
    }
    None
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str, pos: usize) -> Self {
        Self { src, pos }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn eat_str(&mut self, expected: &str) -> bool {
        if self.src[self.pos..].starts_with(expected) {
            self.pos += expected.len();
            true
        } else {
            false
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn word(&mut self) -> String {
        let start = self.pos;
        while self.peek().is_some_and(is_word_char) {
            self.bump();
        }
        self.src[start..self.pos].to_string()
    }

    fn malformed(&self, offset: usize, reason: impl Into<String>) -> ExpandError {
        ExpandError::MalformedExpression {
            offset,
            reason: reason.into(),
        }
    }

    /// Parse arguments after an opening parenthesis, consuming the closing one
    ///
    /// Empty arguments are dropped, so `f(a,)` has a single argument.
    fn arguments(&mut self) -> Result<Vec<Expr>, ExpandError> {
        let open = self.pos.saturating_sub(1);
        let mut args = Vec::new();

        loop {
            if let Some(arg) = self.argument(open)? {
                args.push(arg);
            }
            self.skip_whitespace();
            let at = self.pos;
            match self.bump() {
                Some(',') => continue,
                Some(')') => return Ok(args),
                Some(other) => {
                    return Err(self.malformed(at, format!("unexpected '{}' in argument list", other)))
                }
                None => return Err(self.malformed(open, "missing closing parenthesis")),
            }
        }
    }

    fn argument(&mut self, open: usize) -> Result<Option<Expr>, ExpandError> {
        self.skip_whitespace();
        let start = self.pos;
        match self.peek() {
            Some(quote @ ('"' | '\'')) => self.quoted(quote).map(|text| Some(Expr::Literal(text))),
            Some(c) if is_word_char(c) => {
                let name = self.word();
                self.skip_whitespace();
                if self.eat('(') {
                    let args = self.arguments()?;
                    Ok(Some(Expr::Call(Call { name, args })))
                } else {
                    self.pos = start;
                    self.bare_name(open)
                }
            }
            Some(_) => self.bare_name(open),
            None => Err(self.malformed(open, "missing closing parenthesis")),
        }
    }

    /// A variable name running up to the next `,` or `)` outside parentheses
    fn bare_name(&mut self, open: usize) -> Result<Option<Expr>, ExpandError> {
        let start = self.pos;
        let mut depth = 0usize;

        loop {
            match self.peek() {
                Some(',' | ')') if depth == 0 => break,
                Some('(') => depth += 1,
                Some(')') => depth -= 1,
                Some(_) => {}
                None => return Err(self.malformed(open, "missing closing parenthesis")),
            }
            self.bump();
        }

        let name = self.src[start..self.pos].trim();
        Ok((!name.is_empty()).then(|| Expr::Variable(name.to_string())))
    }

    /// A quoted literal where a doubled quote stands for one quote character
    fn quoted(&mut self, quote: char) -> Result<String, ExpandError> {
        let start = self.pos;
        self.bump();

        let mut text = String::new();
        loop {
            match self.bump() {
                Some(c) if c == quote => {
                    if self.eat(quote) {
                        text.push(quote);
                    } else {
                        return Ok(text);
                    }
                }
                Some(c) => text.push(c),
                None => return Err(self.malformed(start, "unterminated string literal")),
            }
        }
    }
}
