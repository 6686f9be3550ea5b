//! Calendar date parsing and validation.
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

use thiserror::Error;

/// Field separator in textual dates (dd/mm/yyyy)
const SEPARATOR: u8 = b'/';
/// Byte offsets of the two separators in a well-formed input
const SEPARATOR_POSITIONS: [usize; 2] = [2, 5];
/// Exact length of a well-formed input, terminator excluded
const INPUT_LEN: usize = 10;

/// Errors produced while validating a date.
///
/// Only the parser and the `Date` constructor produce errors;
/// the weekday computation itself is infallible.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateError {
    /// Wrong length, malformed separators or a non-digit character
    #[error("invalid format: expected dd/mm/yyyy, e.g. 05/03/2023")]
    InvalidFormat,
    /// Day outside [1, 31]
    #[error("invalid day: must be between 1 and 31")]
    InvalidDay,
    /// Month outside [1, 12]
    #[error("invalid month: must be between 1 and 12")]
    InvalidMonth,
    /// Negative year
    #[error("invalid year: must not be negative")]
    InvalidYear,
}

/// A validated proleptic Gregorian calendar date.
///
/// Field ranges are checked on construction but day/month combinations
/// are not cross-checked against the calendar: 31/02/2023 is accepted
/// and yields a mathematically defined, calendrically meaningless
/// weekday. This looseness is part of the contract, not a defect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Date {
    /// Day of month (1-31)
    day: u32,
    /// Month of year (1-12)
    month: u32,
    /// Year (non-negative, proleptic Gregorian)
    year: i32,
}

impl Date {
    /// Creates a date from its components, validating each field range
    ///
    /// # Arguments
    /// * `day` - Day of month, accepted in [1, 31]
    /// * `month` - Month of year, accepted in [1, 12]
    /// * `year` - Year, accepted when non-negative
    ///
    /// # Returns
    /// * `Result<Date, DateError>` - The date, or the first field violation
    ///   in day, month, year order
    pub fn new(day: u32, month: u32, year: i32) -> Result<Date, DateError> {
        if !(1..=31).contains(&day) {
            return Err(DateError::InvalidDay);
        }
        if !(1..=12).contains(&month) {
            return Err(DateError::InvalidMonth);
        }
        if year < 0 {
            return Err(DateError::InvalidYear);
        }
        Ok(Date { day, month, year })
    }

    /// Parses a date from raw `dd/mm/yyyy` input text
    ///
    /// # Arguments
    /// * `raw` - Input line, optionally carrying a trailing line terminator
    ///
    /// # Returns
    /// * `Result<Date, DateError>` - Parsed date or the first violation found
    ///
    /// # Validation Order
    /// 1. Length must be exactly 10 characters once the terminator is dropped
    /// 2. `/` at positions 3 and 6, ASCII digits everywhere else
    /// 3. Day in [1, 31], month in [1, 12], year non-negative
    ///
    /// Leading zeros parse as decimal, so `05` is day 5.
    pub fn parse(raw: &str) -> Result<Date, DateError> {
        let raw = raw.strip_suffix('\n').unwrap_or(raw);
        let raw = raw.strip_suffix('\r').unwrap_or(raw);

        let bytes = raw.as_bytes();
        if bytes.len() != INPUT_LEN {
            return Err(DateError::InvalidFormat);
        }
        for (pos, byte) in bytes.iter().enumerate() {
            if SEPARATOR_POSITIONS.contains(&pos) {
                if *byte != SEPARATOR {
                    return Err(DateError::InvalidFormat);
                }
            } else if !byte.is_ascii_digit() {
                return Err(DateError::InvalidFormat);
            }
        }

        Date::new(
            digits_to_u32(&bytes[0..2]),
            digits_to_u32(&bytes[3..5]),
            digits_to_u32(&bytes[6..10]) as i32,
        )
    }

    /// Returns the day of month (1-31)
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Returns the month of year (1-12)
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Returns the year
    pub fn year(&self) -> i32 {
        self.year
    }
}

/// Converts a run of ASCII digit bytes to its decimal value.
///
/// Callers must have verified every byte is a digit; the parser's
/// format pass guarantees this before any field is extracted.
fn digits_to_u32(digits: &[u8]) -> u32 {
    digits
        .iter()
        .fold(0u32, |acc, d| acc * 10 + u32::from(d - b'0'))
}
