//! Day of week computation via Zeller's congruence, plus result formatting.
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

use crate::date::Date;
use crate::weekday::Weekday;

/// Computes the day of the week for a date using Zeller's congruence.
///
/// January and February are treated as months 13 and 14 of the preceding
/// year; the shift is internal and never leaks into the caller's `Date`.
/// The year-in-century split and the final reduction both use Euclidean
/// arithmetic so the congruence index always lands in [0, 6], even when
/// the raw sum goes negative for large centuries.
///
/// Infallible: every validated `Date` maps to a weekday.
pub fn day_of_week(date: &Date) -> Weekday {
    let q = i64::from(date.day());
    let (m, y) = if date.month() < 3 {
        (i64::from(date.month()) + 12, i64::from(date.year()) - 1)
    } else {
        (i64::from(date.month()), i64::from(date.year()))
    };

    // century and year-in-century of the (possibly shifted) year
    let k = y.rem_euclid(100);
    let j = y.div_euclid(100);

    let h = (q + (13 * (m + 1)) / 5 + k + k / 4 + j.div_euclid(4) - 2 * j).rem_euclid(7);

    Weekday::from_zeller(h)
}

/// Renders the result line for a computed weekday.
///
/// Formats the date exactly as parsed, zero-padded, so the original
/// input digits are reproduced verbatim. The month shift applied inside
/// [`day_of_week`] is a computational device and never shows up here.
pub fn format_result(date: &Date, weekday: Weekday) -> String {
    format!(
        "{:02}/{:02}/{:04} was on a {}",
        date.day(),
        date.month(),
        date.year(),
        weekday
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate};

    fn date(day: u32, month: u32, year: i32) -> Date {
        Date::new(day, month, year).unwrap()
    }

    /// chrono's weekday for the same calendar date, as an independent oracle
    fn oracle(d: NaiveDate) -> Weekday {
        match d.weekday() {
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
        }
    }

    #[test]
    fn known_historical_dates() {
        assert_eq!(day_of_week(&date(1, 1, 2000)), Weekday::Saturday);
        assert_eq!(day_of_week(&date(5, 3, 2023)), Weekday::Sunday);
        assert_eq!(day_of_week(&date(20, 7, 1969)), Weekday::Sunday);
        assert_eq!(day_of_week(&date(9, 11, 1989)), Weekday::Thursday);
        assert_eq!(day_of_week(&date(1, 1, 1970)), Weekday::Thursday);
        assert_eq!(day_of_week(&date(19, 1, 2038)), Weekday::Tuesday);
        assert_eq!(day_of_week(&date(31, 12, 1999)), Weekday::Friday);
    }

    #[test]
    fn january_and_february_use_preceding_year() {
        // months 1-2 run through the 13/14 shift
        assert_eq!(day_of_week(&date(1, 1, 2000)), Weekday::Saturday);
        assert_eq!(day_of_week(&date(14, 2, 2023)), Weekday::Tuesday);
        assert_eq!(day_of_week(&date(29, 2, 2024)), Weekday::Thursday);
        assert_eq!(day_of_week(&date(29, 2, 2000)), Weekday::Tuesday);
        assert_eq!(day_of_week(&date(28, 2, 1900)), Weekday::Wednesday);
    }

    #[test]
    fn matches_chrono_over_several_decades() {
        let mut d = NaiveDate::from_ymd_opt(1890, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2110, 1, 1).unwrap();
        while d < end {
            let ours = day_of_week(&date(d.day(), d.month(), d.year()));
            assert_eq!(ours, oracle(d), "mismatch on {}", d);
            d = d.succ_opt().unwrap();
        }
    }

    #[test]
    fn negative_congruence_sum_still_maps_into_range() {
        // year 9900, March 1st: j = 99, k = 0, so the raw sum
        // 1 + 10 + 0 + 0 + 24 - 198 = -163 is negative before reduction
        let d = date(1, 3, 9900);
        let weekday = day_of_week(&d);
        assert_ne!(weekday, Weekday::Unknown);
        assert_eq!(
            weekday,
            oracle(NaiveDate::from_ymd_opt(9900, 3, 1).unwrap())
        );
    }

    #[test]
    fn january_of_year_zero() {
        // the shift drives the internal year to -1; Euclidean division
        // keeps the century split consistent
        assert_ne!(day_of_week(&date(1, 1, 0)), Weekday::Unknown);
    }

    #[test]
    fn compute_is_idempotent() {
        let d = date(5, 3, 2023);
        assert_eq!(day_of_week(&d), day_of_week(&d));
    }

    #[test]
    fn calendrically_loose_date_still_computes() {
        // 31/02 is accepted by the parser contract and yields a defined,
        // calendrically meaningless weekday
        assert_ne!(day_of_week(&date(31, 2, 2023)), Weekday::Unknown);
    }

    #[test]
    fn result_line_uses_unshifted_fields() {
        let d = date(1, 1, 2000);
        assert_eq!(
            format_result(&d, day_of_week(&d)),
            "01/01/2000 was on a Saturday"
        );
    }

    #[test]
    fn parse_then_format_round_trips_digits() {
        for raw in ["05/03/2023", "29/02/2024", "31/12/0001", "01/01/0000"] {
            let d = Date::parse(raw).unwrap();
            let line = format_result(&d, day_of_week(&d));
            assert!(line.starts_with(raw), "{} does not start with {}", line, raw);
        }
    }
}
