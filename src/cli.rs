//! Command-line interface parser for the day of week calculator.
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

use std::{fs::File, io::Read};

use chrono::{Datelike, Local};
use clap::{Parser, builder::TypedValueParser};

use crate::conf::Conf;
use crate::date::Date;

/// Help message for date format specification
const HELP_MSG: &str = "Date format must be \"dd/mm/yyyy\" (e.g. 05/03/2023) or \"today\"\nLeave empty to read the date from standard input";

/// Literal accepted in place of an explicit date
const TODAY_VALUE: &str = "today";

/// Command-line interface structure
#[derive(Parser)]
#[command(
    version(env!("CARGO_PKG_VERSION")),
    author(env!("CARGO_PKG_AUTHORS")),
    about(env!("CARGO_PKG_DESCRIPTION")),
    long_about = "Computes the day of the week for a calendar date using \
                 Zeller's congruence. Reads the date from the command line \
                 or interactively from standard input."
)]
pub struct Cli {
    /// Target date for the weekday computation
    ///
    /// Supported values:
    /// - "dd/mm/yyyy": Specific date (e.g. 05/03/2023)
    /// - "today": The current local date
    ///
    /// When omitted, the date is prompted for on standard input.
    #[arg(
        long,
        short,
        required = false,
        value_parser = DateParser,
        help = HELP_MSG
    )]
    date: Option<Date>,

    /// Configuration file path
    ///
    /// TOML configuration file with interactive shell settings
    /// (prompt text, reprompt bound).
    #[arg(
        long,
        short,
        required = false,
        value_parser = ConfParser,
        help = "Path to TOML configuration file"
    )]
    conf: Option<Conf>,

    /// Enables debug-level diagnostics
    #[arg(long, short, help = "Enable verbose logging")]
    verbose: bool,
}

impl Cli {
    /// Returns the parsed configuration, defaulted when no file was given
    pub fn conf(&self) -> Conf {
        self.conf.clone().unwrap_or_default()
    }

    /// Returns the target date, if one was given on the command line
    pub fn date(&self) -> Option<Date> {
        self.date
    }

    /// Returns whether verbose logging was requested
    pub fn verbose(&self) -> bool {
        self.verbose
    }
}

/// Custom parser for date values
#[derive(Clone)]
struct DateParser;

impl TypedValueParser for DateParser {
    type Value = Date;

    /// Parses date strings from command-line arguments
    ///
    /// # Arguments
    /// * `value` - String value from command line
    ///
    /// # Returns
    /// * `Result<Date, clap::Error>` - Parsed date or error
    ///
    /// # Supported Formats
    /// * "today": The current local date
    /// * "dd/mm/yyyy": Specific date (e.g. 05/03/2023)
    fn parse_ref(
        &self,
        _cmd: &clap::Command,
        _arg: Option<&clap::Arg>,
        value: &std::ffi::OsStr,
    ) -> Result<Self::Value, clap::Error> {
        let Some(value_str) = value.to_str() else {
            return Err(clap::Error::new(clap::error::ErrorKind::DisplayHelp));
        };

        match value_str {
            TODAY_VALUE => {
                let today = Local::now().date_naive();
                Date::new(today.day(), today.month(), today.year()).map_err(|e| {
                    clap::Error::raw(
                        clap::error::ErrorKind::InvalidValue,
                        format!("Today's date is outside the accepted range: {}", e),
                    )
                })
            },
            _ => Date::parse(value_str).map_err(|e| {
                clap::Error::raw(
                    clap::error::ErrorKind::InvalidValue,
                    format!("{}\n{}", e, HELP_MSG),
                )
            }),
        }
    }
}

/// Custom parser for configuration file loading
#[derive(Clone)]
struct ConfParser;

impl TypedValueParser for ConfParser {
    type Value = Conf;

    /// Parses configuration file path and loads the configuration
    ///
    /// # Arguments
    /// * `value` - Path to configuration file
    ///
    /// # Returns
    /// * `Result<Conf, clap::Error>` - Parsed configuration or error
    ///
    /// # Errors
    /// * File not found or permission denied
    /// * Invalid TOML format
    /// * Configuration validation failures
    fn parse_ref(
        &self,
        _cmd: &clap::Command,
        _arg: Option<&clap::Arg>,
        value: &std::ffi::OsStr,
    ) -> Result<Self::Value, clap::Error> {
        let Some(file_path) = value.to_str() else {
            return Err(clap::Error::new(clap::error::ErrorKind::DisplayHelp));
        };

        // Open configuration file
        let mut file = File::open(file_path).map_err(|e| {
            let error_msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("Configuration file '{}' not found", file_path),
                std::io::ErrorKind::PermissionDenied => format!("Permission denied for '{}'", file_path),
                _ => format!("Cannot access configuration file '{}': {}", file_path, e),
            };
            clap::Error::raw(clap::error::ErrorKind::InvalidValue, error_msg)
        })?;

        // Read file contents
        let mut config_content = String::new();
        file.read_to_string(&mut config_content).map_err(|e| {
            clap::Error::raw(
                clap::error::ErrorKind::InvalidValue,
                format!("Failed to read configuration file '{}': {}", file_path, e)
            )
        })?;

        // Parse TOML configuration
        toml::from_str(&config_content).map_err(|e| {
            clap::Error::raw(
                clap::error::ErrorKind::InvalidValue,
                format!("Invalid configuration in '{}': {}", file_path, e)
            )
        })
    }
}
