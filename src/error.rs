use thiserror::Error;

use crate::convert::TemperatureScale;

/// Errors surfaced by the conversion and history APIs.
///
/// Input problems (`EmptyInput`, `NotANumber`, `UnreasonableValue`) are
/// ordinary results for the host to inspect and present. Index and name
/// lookups failing means the caller violated a precondition; those are
/// returned loudly rather than papered over. Malformed records inside a
/// batch load are never surfaced here — they are skipped per record and
/// logged (see `ConversionHistory::deserialize`).
#[derive(Debug, Error)]
pub enum Error {
    #[error("input is empty")]
    EmptyInput,

    #[error("not a number: {0:?}")]
    NotANumber(String),

    #[error("{value} is outside the reasonable {scale} range")]
    UnreasonableValue { value: f64, scale: TemperatureScale },

    #[error("index {index} out of range for history of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("unknown conversion direction: {0:?}")]
    UnknownDirection(String),

    #[error("unknown temperature scale: {0:?}")]
    UnknownScale(String),

    #[error("invalid timestamp: {0:?}")]
    InvalidTimestamp(String),

    #[error("invalid history JSON")]
    InvalidJson(#[from] serde_json::Error),
}
