mod source;

pub use source::{InputSource, StdinSource};

use std::fmt;
use std::num::ParseFloatError;

use anyhow::Result;
use log::{debug, info};
use thiserror::Error;

use crate::data::model::{Mean, SampleSet};

/// Prompt shown before reading the values.
pub const PROMPT: &str = "Enter values separated by commas: ";

/// Separator between entered values.
pub const SEPARATOR: char = ',';

#[derive(Debug, Error)]
pub enum InputError {
    #[error("value {position} ('{token}') is not a number")]
    InvalidNumber {
        position: usize,
        token: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("no input line was provided")]
    EndOfInput,
}

/// Outcome of one input averaging run. Both variants are normal results.
#[derive(Debug, Clone, PartialEq)]
pub enum InputReport {
    Average { mean: f64, count: usize },
    Invalid,
}

impl fmt::Display for InputReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputReport::Average { mean, count } => {
                write!(
                    f,
                    "The average of the entered values is: {}",
                    Mean::new(*mean, *count)
                )
            }
            InputReport::Invalid => write!(f, "Please enter valid numbers separated by commas."),
        }
    }
}

/// Split `line` on commas and parse every trimmed token as `f64`.
///
/// A blank line is zero samples. Any other token that fails to parse,
/// including an empty one between two commas, rejects the whole line.
pub fn parse_values(line: &str) -> Result<SampleSet, InputError> {
    if line.trim().is_empty() {
        return Ok(SampleSet::new());
    }

    line.split(SEPARATOR)
        .enumerate()
        .map(|(position, token)| {
            let token = token.trim();
            token
                .parse::<f64>()
                .map_err(|source| InputError::InvalidNumber {
                    position: position + 1,
                    token: token.to_string(),
                    source,
                })
        })
        .collect()
}

/// Prompt once, parse the answer and average it.
///
/// A parse failure becomes [`InputReport::Invalid`]; failing to read the
/// line at all is returned as an error.
pub fn average_input<S: InputSource + ?Sized>(source: &mut S) -> Result<InputReport> {
    let line = source.read_line(PROMPT)?;

    match parse_values(&line) {
        Ok(samples) => {
            info!("averaged {} entered values", samples.len());
            Ok(InputReport::Average {
                mean: samples.mean(),
                count: samples.len(),
            })
        }
        Err(err) => {
            debug!("rejected input: {err}");
            Ok(InputReport::Invalid)
        }
    }
}
