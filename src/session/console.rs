//! Line-oriented console abstraction
//!
//! The menu loop talks to a [`Console`] rather than to stdin/stdout so it can
//! be driven by scripted input in tests.

use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

use crate::error::VendingResult;

/// Source of input lines and sink for output text
pub trait Console {
    /// Read one line without its line ending; `None` once input is exhausted
    fn read_line(&mut self) -> VendingResult<Option<String>>;

    /// Write text as-is and flush it
    fn write(&mut self, text: &str) -> VendingResult<()>;

    fn write_line(&mut self, text: &str) -> VendingResult<()> {
        self.write(text)?;
        self.write("\n")
    }

    /// Show a prompt on the current line and read the answer
    fn prompt(&mut self, text: &str) -> VendingResult<Option<String>> {
        self.write(text)?;
        self.read_line()
    }
}

/// [`Console`] over any buffered reader and writer
pub struct LineConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the writer, e.g. to inspect captured output
    pub fn into_output(self) -> W {
        self.output
    }
}

impl LineConsole<BufReader<Stdin>, Stdout> {
    /// Console attached to the process's standard input and output
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn read_line(&mut self) -> VendingResult<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    fn write(&mut self, text: &str) -> VendingResult<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }
}
