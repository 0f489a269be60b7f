//! Raw-input validation: a character-level filter for text fields and the
//! authoritative numeric parse behind it.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::convert::TemperatureScale;
use crate::error::Error;

static NUMERIC_INPUT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?\d*\.?\d*$").expect("Failed to compile numeric input pattern"));

/// Character-level filter applied while text is being typed.
///
/// Deliberately accepts incomplete fragments like `""`, `"-"`, and `"."`
/// so a text field can run it on every keystroke; completed input must
/// still pass [`is_valid_numeric_text`].
pub fn is_partial_numeric_text(text: &str) -> bool {
    NUMERIC_INPUT.is_match(text)
}

/// True iff `text` is a complete, finite decimal number.
///
/// The numeric parse is the authoritative check; the pattern only keeps
/// out characters the filter would have rejected (exponents, spaces,
/// `nan`/`inf` spellings that `f64::parse` would otherwise accept).
pub fn is_valid_numeric_text(text: &str) -> bool {
    if text.is_empty() || !NUMERIC_INPUT.is_match(text) {
        return false;
    }
    match text.parse::<f64>() {
        Ok(value) => value.is_finite(),
        Err(_) => false,
    }
}

/// Parse raw text-field input, distinguishing empty input from
/// unparseable input.
pub fn parse_input(text: &str) -> Result<f64, Error> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(Error::EmptyInput);
    }
    if !is_valid_numeric_text(trimmed) {
        return Err(Error::NotANumber(trimmed.to_string()));
    }
    trimmed
        .parse::<f64>()
        .map_err(|_| Error::NotANumber(trimmed.to_string()))
}

/// Advisory physical-range check: true iff `value` lies within the
/// defined range for `scale` (absolute zero up to a practical ceiling).
///
/// Hosts typically use a failure here for a warning, not a hard rejection.
pub fn is_reasonable_temperature(value: f64, scale: TemperatureScale) -> bool {
    scale.reasonable_range().contains(&value)
}

/// [`is_reasonable_temperature`] as a result, for hosts that do want to
/// block out-of-range input.
pub fn check_reasonable(value: f64, scale: TemperatureScale) -> Result<(), Error> {
    if is_reasonable_temperature(value, scale) {
        Ok(())
    } else {
        Err(Error::UnreasonableValue { value, scale })
    }
}
