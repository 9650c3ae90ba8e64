use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

use super::InputError;

/// Where the input averager gets its line of text from.
pub trait InputSource {
    /// Show `prompt` and return the next line, without its line terminator.
    fn read_line(&mut self, prompt: &str) -> Result<String>;
}

/// Interactive source: prompt on stdout, answer from stdin.
pub struct StdinSource;

impl InputSource for StdinSource {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{prompt}").context("writing prompt")?;
        stdout.flush().context("flushing prompt")?;

        let mut line = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut line)
            .context("reading from stdin")?;
        if read == 0 {
            return Err(InputError::EndOfInput.into());
        }

        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(line)
    }
}
