//! Token sources backed by line input.
//!
//! Any `IntoIterator` of token-like items already drives the order loop;
//! [`LineTokens`] adapts interactive or file input to that shape.

use std::io::{self, BufRead, Write};

use pizzeria_products::TypeToken;

/// Lazily reads one token per line.
///
/// Each line is trimmed of surrounding whitespace (case is kept as typed).
/// Bytes that are not valid UTF-8 are replaced rather than rejected, so a
/// garbled line still becomes a token (and fails as an unknown one).
/// End of input or an I/O error ends the sequence.
pub struct LineTokens<R, W> {
    reader: R,
    prompt: Option<(W, String)>,
    done: bool,
}

impl<R> LineTokens<R, io::Sink>
where
    R: BufRead,
{
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            prompt: None,
            done: false,
        }
    }
}

impl<R, W> LineTokens<R, W>
where
    R: BufRead,
    W: Write,
{
    /// Write `prompt` to `writer` before every read.
    pub fn with_prompt(reader: R, writer: W, prompt: impl Into<String>) -> Self {
        Self {
            reader,
            prompt: Some((writer, prompt.into())),
            done: false,
        }
    }

    fn write_prompt(&mut self) {
        if let Some((writer, prompt)) = self.prompt.as_mut() {
            let written = writer
                .write_all(prompt.as_bytes())
                .and_then(|()| writer.flush());
            if let Err(err) = written {
                tracing::warn!(error = %err, "failed to write prompt");
            }
        }
    }
}

impl<R, W> Iterator for LineTokens<R, W>
where
    R: BufRead,
    W: Write,
{
    type Item = TypeToken;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        self.write_prompt();

        let mut line = Vec::new();
        match self.reader.read_until(b'\n', &mut line) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) => Some(TypeToken::new(String::from_utf8_lossy(&line).trim())),
            Err(err) => {
                tracing::warn!(error = %err, "failed to read token, ending input");
                self.done = true;
                None
            }
        }
    }
}
