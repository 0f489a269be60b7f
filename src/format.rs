//! Display formatting for conversion results and history lines.

use crate::convert::unit_symbol;

/// Fraction digits used for displayed conversion outputs.
pub const DEFAULT_DECIMAL_PLACES: usize = 2;

/// Fixed-point formatting with exactly `decimal_places` fraction digits,
/// rounding half away from zero. No thousands separators.
pub fn format_number(value: f64, decimal_places: usize) -> String {
    // f64::round rounds halfway cases away from zero, which is the
    // rounding this display contract wants; `{:.n}` alone rounds to even.
    let factor = 10f64.powi(decimal_places as i32);
    let rounded = (value * factor).round() / factor;
    format!("{rounded:.decimal_places$}")
}

/// One-line summary of a completed conversion, e.g. `"72.5°F → 22.50°C"`.
///
/// Scale names resolve through [`unit_symbol`], so an unknown name renders
/// with a bare degree sign instead of failing.
pub fn format_conversion_result(input: f64, output: f64, from_unit: &str, to_unit: &str) -> String {
    format!(
        "{}{} → {}{}",
        format_number(input, 1),
        unit_symbol(from_unit),
        format_number(output, DEFAULT_DECIMAL_PLACES),
        unit_symbol(to_unit)
    )
}

/// Compact history line, e.g. `"F to C: 72.5 => 22.50"`.
///
/// Input is shown at one decimal place and output at two; the asymmetry
/// is part of the display contract.
pub fn format_history_entry(from_unit: &str, to_unit: &str, input: f64, output: f64) -> String {
    format!(
        "{} to {}: {} => {}",
        initial(from_unit),
        initial(to_unit),
        format_number(input, 1),
        format_number(output, DEFAULT_DECIMAL_PLACES)
    )
}

fn initial(unit: &str) -> char {
    unit.chars().next().unwrap_or('?')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_point_always_shows_requested_digits() {
        assert_eq!(format_number(22.5, 2), "22.50");
        assert_eq!(format_number(0.0, 2), "0.00");
        assert_eq!(format_number(-40.0, 1), "-40.0");
        assert_eq!(format_number(100.0, 0), "100");
    }

    #[test]
    fn halfway_cases_round_away_from_zero() {
        assert_eq!(format_number(0.125, 2), "0.13");
        assert_eq!(format_number(-0.125, 2), "-0.13");
        assert_eq!(format_number(2.5, 0), "3");
        assert_eq!(format_number(-2.5, 0), "-3");
    }

    #[test]
    fn conversion_result_line() {
        assert_eq!(
            format_conversion_result(72.5, 22.5, "Fahrenheit", "Celsius"),
            "72.5°F → 22.50°C"
        );
        assert_eq!(
            format_conversion_result(0.0, 32.0, "Celsius", "Fahrenheit"),
            "0.0°C → 32.00°F"
        );
    }

    #[test]
    fn history_line_uses_initials_and_asymmetric_precision() {
        assert_eq!(
            format_history_entry("Fahrenheit", "Celsius", 72.5, 22.5),
            "F to C: 72.5 => 22.50"
        );
        assert_eq!(
            format_history_entry("Celsius", "Fahrenheit", 100.0, 212.0),
            "C to F: 100.0 => 212.00"
        );
    }

    #[test]
    fn unknown_unit_names_still_format() {
        assert_eq!(
            format_conversion_result(1.0, 274.15, "Celsius", "Kelvin"),
            "1.0°C → 274.15°"
        );
        assert_eq!(format_history_entry("", "Celsius", 1.0, 1.0), "? to C: 1.0 => 1.00");
    }
}
