// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Human-readable formatting of millisecond durations.
//!
//! Race and lap times are carried through the system as integer
//! milliseconds; this module renders them for display only and carries no
//! state of its own.

/// Converts a number of milliseconds into a human-readable string,
/// following the format `hh:mm:ss.sss` when the number of hours is greater
/// than zero or `mm:ss.sss` otherwise, zero-padded with three decimal
/// places on the seconds.
///
/// # Examples
///
/// ```rust
/// # use pitwall_core::time::milliseconds_to_display_time;
///
/// assert_eq!(milliseconds_to_display_time(58_915), "00:58.915");
/// assert_eq!(milliseconds_to_display_time(3_601_123), "01:00:01.123");
/// ```
pub fn milliseconds_to_display_time(ms: i64) -> String {
    let hours = ms / 3_600_000;
    let minutes = (ms % 3_600_000) / 60_000;
    let seconds = (ms % 60_000) as f64 / 1000.0;

    if hours > 0 {
        format!("{:02}:{:02}:{:06.3}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:06.3}", minutes, seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_less_than_a_second() {
        assert_eq!(milliseconds_to_display_time(123), "00:00.123");
    }

    #[test]
    fn test_less_than_a_minute() {
        assert_eq!(milliseconds_to_display_time(58_915), "00:58.915");
    }

    #[test]
    fn test_less_than_an_hour() {
        assert_eq!(milliseconds_to_display_time(621_912), "10:21.912");
    }

    #[test]
    fn test_over_zero_hours() {
        assert_eq!(milliseconds_to_display_time(3_601_123), "01:00:01.123");
    }

    #[test]
    fn test_zero() {
        assert_eq!(milliseconds_to_display_time(0), "00:00.000");
    }

    #[test]
    fn test_exact_minute_boundary() {
        assert_eq!(milliseconds_to_display_time(60_000), "01:00.000");
    }
}
