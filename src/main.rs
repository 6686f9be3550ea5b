//! Day of week calculator based on Zeller's congruence.
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

use clap::Parser;
use shell::Shell;

mod cli;
mod conf;
mod date;
mod logger;
mod shell;
mod weekday;
mod zeller;

/// Main entry point for the day of week calculator
///
/// # Usage Examples
/// ```bash
/// # Compute the weekday for a specific date
/// zellerday -d 05/03/2023
///
/// # Compute the weekday for today
/// zellerday -d today
///
/// # Prompt for the date on standard input, with a custom config
/// zellerday -c config.toml
/// ```
fn main() {
    // Parse command-line arguments
    let cli = cli::Cli::parse();

    logger::init(cli.verbose());

    // Build the shell with explicit state, then run one request
    let shell = Shell::new(&cli);

    match shell.run() {
        Ok(line) => {
            println!("{}", line);
            std::process::exit(0);  // Success exit code for scripting use
        },
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("{}", e);
            std::process::exit(1);  // Non-zero exit code on failure
        },
    }
}
