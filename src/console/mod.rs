//! Console session with stream-extraction semantics
//!
//! Values are whitespace-delimited tokens that may be spread over lines in any
//! way: `1 2 3` on one line reads the same as three separate lines.

pub mod format;

use std::io::{self, BufRead, Write};
use std::str::FromStr;
use tracing::debug;

use crate::error::{LessonError, LessonResult};

pub use format::{fmt_bool, fmt_f64};

/// A prompt/response session over borrowed input and output streams
pub struct Console<'io> {
    input: &'io mut dyn BufRead,
    output: &'io mut dyn Write,
    line: String,
    raw: Vec<u8>,
    pos: usize,
}

impl<'io> Console<'io> {
    pub fn new(input: &'io mut dyn BufRead, output: &'io mut dyn Write) -> Self {
        Self {
            input,
            output,
            line: String::new(),
            raw: Vec::new(),
            pos: 0,
        }
    }

    /// Write `text` without a newline and flush so it shows before blocking
    pub fn prompt(&mut self, text: &str) -> LessonResult<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    /// Write `text` followed by a newline
    pub fn line(&mut self, text: &str) -> LessonResult<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.write_all(b"\n")?;
        Ok(())
    }

    /// Read the next token and parse it as `T`
    pub fn read<T: FromStr>(&mut self, expected: &'static str) -> LessonResult<T> {
        let token = self.next_token()?.ok_or(LessonError::UnexpectedEof)?;
        debug!(token = %token, expected, "read value");
        token
            .parse()
            .map_err(|_| LessonError::invalid_input(&token, expected))
    }

    /// Read an `i32`
    pub fn read_int(&mut self) -> LessonResult<i32> {
        self.read("an integer")
    }

    /// Read a `u32`
    pub fn read_unsigned(&mut self) -> LessonResult<u32> {
        self.read("a non-negative integer")
    }

    /// Read a finite `f64`
    ///
    /// `nan`, `inf` and out-of-range literals such as `1e400` are rejected.
    pub fn read_double(&mut self) -> LessonResult<f64> {
        let token = self.next_token()?.ok_or(LessonError::UnexpectedEof)?;
        debug!(token = %token, "read double");
        match token.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(LessonError::invalid_input(&token, "a number")),
        }
    }

    /// Read a boolean typed as `0` or `1`
    pub fn read_bool(&mut self) -> LessonResult<bool> {
        let token = self.next_token()?.ok_or(LessonError::UnexpectedEof)?;
        debug!(token = %token, "read bool");
        match token.as_str() {
            "0" => Ok(false),
            "1" => Ok(true),
            _ => Err(LessonError::invalid_input(&token, "0 or 1")),
        }
    }

    /// Read a single non-whitespace character
    ///
    /// Only the character itself is consumed, so `+5` yields `'+'` and leaves
    /// `5` for the next read.
    pub fn read_char(&mut self) -> LessonResult<char> {
        self.try_read_char()?.ok_or(LessonError::UnexpectedEof)
    }

    /// Like [`Console::read_char`], but end of input yields `None`
    pub fn try_read_char(&mut self) -> LessonResult<Option<char>> {
        if !self.skip_whitespace()? {
            return Ok(None);
        }
        let c = self.line[self.pos..].chars().next();
        if let Some(c) = c {
            self.pos += c.len_utf8();
            debug!(%c, "read char");
        }
        Ok(c)
    }

    /// Move past whitespace, pulling new lines as needed
    ///
    /// Returns `false` once input is exhausted. Bytes that are not UTF-8 become
    /// U+FFFD, which then fails to parse like any other bad token.
    fn skip_whitespace(&mut self) -> LessonResult<bool> {
        loop {
            let rest = &self.line[self.pos..];
            let trimmed = rest.trim_start();
            self.pos += rest.len() - trimmed.len();
            if !trimmed.is_empty() {
                return Ok(true);
            }

            self.raw.clear();
            self.pos = 0;
            if self.input.read_until(b'\n', &mut self.raw)? == 0 {
                self.line.clear();
                return Ok(false);
            }
            self.line = String::from_utf8_lossy(&self.raw).into_owned();
        }
    }

    fn next_token(&mut self) -> LessonResult<Option<String>> {
        if !self.skip_whitespace()? {
            return Ok(None);
        }
        let rest = &self.line[self.pos..];
        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        let token = rest[..end].to_string();
        self.pos += end;
        Ok(Some(token))
    }
}

impl Write for Console<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.output.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.output.flush()
    }
}
