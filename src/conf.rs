//! Configuration module for the interactive shell.
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

use serde::{Deserialize, de::Error};

/// Prompt shown before each interactive read when none is configured
const DEFAULT_PROMPT: &str = "Enter date (dd/mm/yyyy): ";
/// Reprompt bound used when none is configured
const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Main configuration structure for the application.
///
/// All settings are optional; a missing file or section falls back to
/// built-in defaults.
#[derive(Deserialize, Clone, Default)]
pub struct Conf {
    /// Interactive shell settings
    shell: Option<Shell>,
}

/// Interactive shell settings.
#[derive(Deserialize, Clone)]
struct Shell {
    /// Prompt text printed before reading a date from standard input
    prompt: Option<String>,
    /// Upper bound on reprompts after invalid input (at least 1)
    #[serde(default, deserialize_with = "deserialize_max_attempts")]
    max_attempts: Option<u32>,
}

impl Conf {
    /// Returns the configured prompt text, or the default prompt.
    ///
    /// # Returns
    /// - `&str`: Prompt to print before each interactive read
    pub fn prompt(&self) -> &str {
        self.shell
            .as_ref()
            .and_then(|s| s.prompt.as_deref())
            .unwrap_or(DEFAULT_PROMPT)
    }

    /// Returns the configured reprompt bound, or the default.
    ///
    /// # Returns
    /// - `u32`: Maximum number of input attempts, always at least 1
    pub fn max_attempts(&self) -> u32 {
        self.shell
            .as_ref()
            .and_then(|s| s.max_attempts)
            .unwrap_or(DEFAULT_MAX_ATTEMPTS)
    }
}

/// Error message for out-of-range attempt bounds.
const ERR_FMT: &str = "a positive attempt count (1 or greater)";

/// Deserializes and validates the `max_attempts` setting.
///
/// # Arguments
/// * `deserializer` - Serde deserializer instance
///
/// # Returns
/// * `Result<Option<u32>, D::Error>` - Validated bound or deserialization error
///
/// A bound of zero would make the interactive loop unable to read any
/// input at all, so it is rejected at load time.
fn deserialize_max_attempts<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<u32>::deserialize(deserializer)?;
    match value {
        Some(0) => Err(Error::invalid_value(
            serde::de::Unexpected::Unsigned(0),
            &ERR_FMT,
        )),
        _ => Ok(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_empty() {
        let conf: Conf = toml::from_str("").unwrap();
        assert_eq!(conf.prompt(), DEFAULT_PROMPT);
        assert_eq!(conf.max_attempts(), DEFAULT_MAX_ATTEMPTS);
    }

    #[test]
    fn reads_shell_section() {
        let conf: Conf = toml::from_str(
            "[shell]\nprompt = \"Date? \"\nmax_attempts = 5\n",
        )
        .unwrap();
        assert_eq!(conf.prompt(), "Date? ");
        assert_eq!(conf.max_attempts(), 5);
    }

    #[test]
    fn partial_shell_section_keeps_other_default() {
        let conf: Conf = toml::from_str("[shell]\nmax_attempts = 1\n").unwrap();
        assert_eq!(conf.prompt(), DEFAULT_PROMPT);
        assert_eq!(conf.max_attempts(), 1);
    }

    #[test]
    fn zero_attempts_rejected() {
        let result: Result<Conf, _> = toml::from_str("[shell]\nmax_attempts = 0\n");
        assert!(result.is_err());
    }
}
