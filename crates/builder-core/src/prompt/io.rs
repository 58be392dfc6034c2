//! Interactive input sources for the prompt collector

use std::io::{self, BufRead, Write};

/// A navigation key understood by the checklist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Toggle,
    Confirm,
    Other,
}

impl Key {
    /// Interpret one line of line-buffered input as a key
    pub fn from_line(line: &str) -> Key {
        if line == " " {
            return Key::Toggle;
        }
        match line.trim().to_ascii_lowercase().as_str() {
            "" => Key::Confirm,
            "u" | "up" | "k" => Key::Up,
            "d" | "down" | "j" => Key::Down,
            "x" | "space" => Key::Toggle,
            _ => Key::Other,
        }
    }
}

/// Line-oriented interactive input and output
pub trait PromptIo {
    /// Present text as-is, without adding a newline
    fn show(&mut self, text: &str) -> io::Result<()>;

    /// Read one line without its terminator; `None` at end of input
    fn read_line(&mut self) -> io::Result<Option<String>>;

    fn read_key(&mut self) -> io::Result<Key>;

    /// Erase the last `count` presented lines, where the medium allows it
    fn clear_lines(&mut self, count: usize) -> io::Result<()> {
        let _ = count;
        Ok(())
    }

    /// Usage line shown under a checklist
    fn checklist_hint(&self) -> &'static str;
}

/// Line-buffered input, used when no raw terminal is available
///
/// Each checklist key is typed as its own line: `u`/`d` move, `x` or a
/// single space toggles, an empty line confirms.
pub struct LineIo<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LineIo<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl LineIo<io::StdinLock<'static>, io::Stdout> {
    /// Line-buffered prompts over the process's stdin and stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> PromptIo for LineIo<R, W> {
    fn show(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    fn read_key(&mut self) -> io::Result<Key> {
        Ok(self
            .read_line()?
            .map_or(Key::Confirm, |line| Key::from_line(&line)))
    }

    fn checklist_hint(&self) -> &'static str {
        "Type u/d and Enter to navigate, x to select/deselect, an empty line to confirm"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_key_from_line() {
        assert_eq!(Key::from_line(""), Key::Confirm);
        assert_eq!(Key::from_line(" "), Key::Toggle);
        assert_eq!(Key::from_line("X"), Key::Toggle);
        assert_eq!(Key::from_line("up"), Key::Up);
        assert_eq!(Key::from_line("j"), Key::Down);
        assert_eq!(Key::from_line("what"), Key::Other);
    }

    #[test]
    fn test_read_line_strips_terminators() {
        let mut io = LineIo::new(Cursor::new("first\r\nsecond  \nlast"), Vec::new());

        assert_eq!(io.read_line().unwrap().as_deref(), Some("first"));
        assert_eq!(io.read_line().unwrap().as_deref(), Some("second  "));
        assert_eq!(io.read_line().unwrap().as_deref(), Some("last"));
        assert_eq!(io.read_line().unwrap(), None);
    }

    #[test]
    fn test_end_of_input_confirms() {
        let mut io = LineIo::new(Cursor::new(""), Vec::new());
        assert_eq!(io.read_key().unwrap(), Key::Confirm);
    }

    #[test]
    fn test_show_writes_verbatim() {
        let mut io = LineIo::new(Cursor::new(""), Vec::new());
        io.show("Name: ").unwrap();
        let (_, out) = io.into_parts();
        assert_eq!(out, b"Name: ");
    }
}
