extern crate termcolor;

use std::io::Write;
use termcolor::{Color, StandardStream};
use uva::error::Result;

/// Reports a finished step, returning the error for the caller to stop on.
#[allow(unused_must_use)]
pub fn write_result<T>(stdout: &mut StandardStream, result: Result<T>, success: &str) -> Result<T> {
    if result.is_ok() {
        write_ok!(stdout, "Success", "{}", success);
    }
    result
}

/// `humanize`-style short count: 950, 12.3 k, 1.2 M.
pub fn short_count(n: u64) -> String {
    const UNITS: [&str; 3] = ["k", "M", "G"];
    if n < 1000 {
        return n.to_string();
    }
    let mut value = n as f64;
    let mut unit = "";
    for u in UNITS.iter() {
        if value < 1000.0 {
            break;
        }
        value /= 1000.0;
        unit = u;
    }
    if value < 10.0 {
        format!("{:.1} {}", value, unit)
    } else {
        format!("{:.0} {}", value, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::short_count;

    #[test]
    fn counts_are_shortened() {
        assert_eq!(short_count(950), "950");
        assert_eq!(short_count(1234), "1.2 k");
        assert_eq!(short_count(56_789), "57 k");
        assert_eq!(short_count(2_500_000), "2.5 M");
    }
}
