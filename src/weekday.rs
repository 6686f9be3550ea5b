//! Weekday value type.
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

use std::fmt;

/// Day of the week.
///
/// Ordered the way Zeller's congruence numbers the days, Saturday first.
/// `Unknown` is a defensive fallback for an out-of-range congruence index;
/// with a Euclidean modulo it can never actually be produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weekday {
    Saturday,
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Unknown,
}

impl Weekday {
    /// Maps a Zeller congruence index to its weekday
    ///
    /// # Arguments
    /// * `h` - Congruence result, expected in [0, 6]
    ///
    /// # Returns
    /// * `Weekday` - 0 is Saturday through 6 is Friday; anything else
    ///   falls back to `Unknown`
    pub fn from_zeller(h: i64) -> Weekday {
        match h {
            0 => Weekday::Saturday,
            1 => Weekday::Sunday,
            2 => Weekday::Monday,
            3 => Weekday::Tuesday,
            4 => Weekday::Wednesday,
            5 => Weekday::Thursday,
            6 => Weekday::Friday,
            _ => Weekday::Unknown,
        }
    }

    /// Returns the English name of the day
    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeller_index_table() {
        assert_eq!(Weekday::from_zeller(0), Weekday::Saturday);
        assert_eq!(Weekday::from_zeller(1), Weekday::Sunday);
        assert_eq!(Weekday::from_zeller(2), Weekday::Monday);
        assert_eq!(Weekday::from_zeller(3), Weekday::Tuesday);
        assert_eq!(Weekday::from_zeller(4), Weekday::Wednesday);
        assert_eq!(Weekday::from_zeller(5), Weekday::Thursday);
        assert_eq!(Weekday::from_zeller(6), Weekday::Friday);
    }

    #[test]
    fn out_of_range_index_is_unknown() {
        assert_eq!(Weekday::from_zeller(7), Weekday::Unknown);
        assert_eq!(Weekday::from_zeller(-1), Weekday::Unknown);
    }

    #[test]
    fn displays_english_name() {
        assert_eq!(Weekday::Saturday.to_string(), "Saturday");
        assert_eq!(Weekday::Unknown.to_string(), "Unknown");
    }
}
