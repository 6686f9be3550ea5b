//! Interactive shell driving the parse and compute cycle.
//!
//! MIT License
//!
//! Copyright (c) 2026 66f94eae
//!
//! Permission is hereby granted, free of charge, to any person obtaining a copy
//! of this software and associated documentation files (the "Software"), to deal
//! in the Software without restriction, including without limitation the rights
//! to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
//! copies of the Software, and to permit persons to whom the Software is
//! furnished to do so, subject to the following conditions:
//!
//! The above copyright notice and this permission notice shall be included in all
//! copies or substantial portions of the Software.
//!
//! THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
//! IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
//! FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
//! AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
//! LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
//! OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
//! SOFTWARE.

use std::io::{BufRead, Write};

use thiserror::Error;

use crate::cli::Cli;
use crate::date::Date;
use crate::zeller;

/// Errors produced by the interactive shell.
///
/// Parse errors are handled inside the reprompt loop and never escape;
/// only exhaustion of the attempt bound or an I/O failure does.
#[derive(Error, Debug)]
pub enum ShellError {
    /// Every allowed input attempt was invalid
    #[error("no valid date after {attempts} attempt(s)")]
    AttemptsExhausted {
        /// Number of attempts that were made
        attempts: u32,
    },
    /// Standard input closed before a valid date was read
    #[error("standard input closed before a valid date was entered")]
    InputClosed,
    /// Reading from or writing to the terminal failed
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Shell state for a single invocation.
///
/// All state is explicit and owned here; the core functions stay pure
/// and hold no globals.
pub struct Shell {
    /// Date supplied on the command line, bypassing the prompt loop
    date: Option<Date>,
    /// Prompt printed before each interactive read
    prompt: String,
    /// Upper bound on interactive input attempts
    max_attempts: u32,
}

impl Shell {
    /// Creates a shell from parsed command-line arguments
    ///
    /// # Arguments
    /// * `cli` - Parsed command-line arguments containing config and date
    pub fn new(cli: &Cli) -> Self {
        let conf = cli.conf();
        Self {
            date: cli.date(),
            prompt: conf.prompt().to_string(),
            max_attempts: conf.max_attempts(),
        }
    }

    /// Produces the formatted result line for this invocation
    ///
    /// With a command-line date the computation is immediate. Otherwise
    /// dates are read from standard input, reprompting on invalid input
    /// up to the configured bound. The loop is explicit and bounded, so
    /// a stream of garbage input terminates with an error rather than
    /// recursing.
    ///
    /// # Returns
    /// * `Ok(String)` - The formatted result line
    /// * `Err(ShellError)` - Attempts exhausted, input closed, or I/O failure
    pub fn run(&self) -> Result<String, ShellError> {
        if let Some(date) = self.date {
            return Ok(compute_line(&date));
        }

        let stdin = std::io::stdin();
        let mut input = stdin.lock();
        let mut output = std::io::stderr().lock();
        self.run_with(&mut input, &mut output)
    }

    /// Runs the prompt loop over explicit reader and writer handles
    ///
    /// Split from [`run`](Self::run) so tests can drive the loop with
    /// in-memory streams.
    fn run_with<R, W>(&self, input: &mut R, output: &mut W) -> Result<String, ShellError>
    where
        R: BufRead,
        W: Write,
    {
        for attempt in 1..=self.max_attempts {
            write!(output, "{}", self.prompt)?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                return Err(ShellError::InputClosed);
            }

            match Date::parse(&line) {
                Ok(date) => return Ok(compute_line(&date)),
                Err(e) => {
                    tracing::warn!(attempt, error = %e, "rejected input");
                    writeln!(output, "{}", e)?;
                },
            }
        }

        Err(ShellError::AttemptsExhausted {
            attempts: self.max_attempts,
        })
    }
}

/// Computes the weekday for a date and renders the result line
fn compute_line(date: &Date) -> String {
    let weekday = zeller::day_of_week(date);
    tracing::debug!(
        day = date.day(),
        month = date.month(),
        year = date.year(),
        %weekday,
        "computed weekday"
    );
    zeller::format_result(date, weekday)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shell(max_attempts: u32) -> Shell {
        Shell {
            date: None,
            prompt: "Enter date (dd/mm/yyyy): ".to_string(),
            max_attempts,
        }
    }

    fn run(shell: &Shell, input: &str) -> (Result<String, ShellError>, String) {
        let mut reader = input.as_bytes();
        let mut written = Vec::new();
        let result = shell.run_with(&mut reader, &mut written);
        (result, String::from_utf8(written).unwrap())
    }

    #[test]
    fn valid_input_on_first_attempt() {
        let (result, output) = run(&shell(3), "05/03/2023\n");
        assert_eq!(result.unwrap(), "05/03/2023 was on a Sunday");
        assert_eq!(output, "Enter date (dd/mm/yyyy): ");
    }

    #[test]
    fn reprompts_after_invalid_input() {
        let (result, output) = run(&shell(3), "32/01/2023\nhello\n01/01/2000\n");
        assert_eq!(result.unwrap(), "01/01/2000 was on a Saturday");
        assert!(output.contains("invalid day"));
        assert!(output.contains("invalid format"));
    }

    #[test]
    fn error_message_names_the_invalid_field() {
        let (_, output) = run(&shell(1), "05/13/2023\n");
        assert!(output.contains("invalid month"));
    }

    #[test]
    fn attempts_are_bounded() {
        let (result, _) = run(&shell(2), "bad\nworse\n01/01/2000\n");
        assert!(matches!(
            result,
            Err(ShellError::AttemptsExhausted { attempts: 2 })
        ));
    }

    #[test]
    fn closed_input_is_reported() {
        let (result, _) = run(&shell(3), "");
        assert!(matches!(result, Err(ShellError::InputClosed)));
    }

    #[test]
    fn command_line_date_skips_the_prompt() {
        let date = Date::parse("29/02/2024").unwrap();
        let shell = Shell {
            date: Some(date),
            prompt: String::new(),
            max_attempts: 1,
        };
        assert_eq!(shell.run().unwrap(), "29/02/2024 was on a Thursday");
    }
}
