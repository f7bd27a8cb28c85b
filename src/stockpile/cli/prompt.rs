//! Validating prompts.
//!
//! Every numeric prompt loops until it gets a strictly positive value; there is
//! no way to cancel other than closing the input, which is reported as an error.
//! The same checks back the clap value parsers so flags and prompts agree.

use std::fmt;
use std::io::{BufRead, Write};

use stockpile::error::{Result, StockError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputProblem {
    NotNumeric,
    NotPositive,
    TooLarge,
}

impl fmt::Display for InputProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputProblem::NotNumeric => write!(f, "Please enter a numeric value only"),
            InputProblem::NotPositive => write!(f, "Please enter a positive value"),
            InputProblem::TooLarge => write!(f, "Please enter a smaller value"),
        }
    }
}

pub fn positive_float(input: &str) -> std::result::Result<f64, InputProblem> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| InputProblem::NotNumeric)?;
    if !value.is_finite() {
        return Err(InputProblem::NotNumeric);
    }
    if value <= 0.0 {
        return Err(InputProblem::NotPositive);
    }
    Ok(value)
}

pub fn positive_int(input: &str) -> std::result::Result<u32, InputProblem> {
    let value: i64 = input
        .trim()
        .parse()
        .map_err(|_| InputProblem::NotNumeric)?;
    if value <= 0 {
        return Err(InputProblem::NotPositive);
    }
    u32::try_from(value).map_err(|_| InputProblem::TooLarge)
}

/// clap value parser for prices.
pub fn parse_positive_float(input: &str) -> std::result::Result<f64, String> {
    positive_float(input).map_err(|e| e.to_string())
}

/// clap value parser for ids, quantities and thresholds.
pub fn parse_positive_int(input: &str) -> std::result::Result<u32, String> {
    positive_int(input).map_err(|e| e.to_string())
}

/// Line-oriented prompt over any reader/writer pair.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn say(&mut self, text: impl fmt::Display) -> Result<()> {
        writeln!(self.output, "{}", text).map_err(StockError::Io)
    }

    /// Show `message` and return the next line, trimmed.
    pub fn line(&mut self, message: &str) -> Result<String> {
        write!(self.output, "{}", message).map_err(StockError::Io)?;
        self.output.flush().map_err(StockError::Io)?;

        let mut buf = String::new();
        let read = self.input.read_line(&mut buf).map_err(StockError::Io)?;
        if read == 0 {
            return Err(StockError::Input("unexpected end of input".into()));
        }
        Ok(buf.trim().to_string())
    }

    pub fn positive_float(&mut self, message: &str) -> Result<f64> {
        self.until_valid(message, positive_float)
    }

    pub fn positive_int(&mut self, message: &str) -> Result<u32> {
        self.until_valid(message, positive_int)
    }

    /// Non-empty text, re-asked while blank.
    pub fn text(&mut self, message: &str) -> Result<String> {
        loop {
            let line = self.line(message)?;
            if !line.is_empty() {
                return Ok(line);
            }
            self.say("Please enter a value")?;
        }
    }

    /// One of `choices`, re-asked with `retry` until it matches.
    pub fn choice(&mut self, message: &str, retry: &str, choices: &[&str]) -> Result<String> {
        let mut line = self.line(message)?;
        while !choices.contains(&line.as_str()) {
            line = self.line(retry)?;
        }
        Ok(line)
    }

    fn until_valid<T>(
        &mut self,
        message: &str,
        check: impl Fn(&str) -> std::result::Result<T, InputProblem>,
    ) -> Result<T> {
        loop {
            let line = self.line(message)?;
            match check(&line) {
                Ok(value) => return Ok(value),
                Err(problem) => self.say(problem)?,
            }
        }
    }
}
