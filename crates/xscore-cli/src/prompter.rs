//! Line-oriented input for the interactive scoring loop

use std::io::{self, BufRead, Write};

use anyhow::Result;

pub struct Prompter<R> {
    input: R,
}

impl<R: BufRead> Prompter<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }

    /// Print `prompt` and read one trimmed line; `None` at end of input
    pub fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        print!("{}", prompt);
        io::stdout().flush().ok();

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
