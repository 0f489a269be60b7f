//! Temperature conversion and conversion-history domain model.
//!
//! Pure, synchronous, single-threaded: the hosting application collects
//! raw text, validates it ([`validate`]), converts it ([`convert`]),
//! stores the result in a bounded newest-first [`ConversionHistory`], and
//! renders formatted strings ([`format`]). The history provides no
//! internal locking; it is owned by one logical session.
//!
//! Nothing here touches storage or the network. [`ConversionHistory`]
//! serializes to a JSON-compatible record shape and back, and the host
//! owns where those records actually live.

pub mod convert;
pub mod error;
pub mod format;
pub mod history;
pub mod models;
pub mod validate;

pub use convert::{
    celsius_to_fahrenheit, fahrenheit_to_celsius, unit_symbol, ConversionDirection,
    TemperatureScale,
};
pub use error::Error;
pub use format::{
    format_conversion_result, format_history_entry, format_number, DEFAULT_DECIMAL_PLACES,
};
pub use history::{ConversionHistory, EntryRecord, HistoryConfig, HistoryStats};
pub use models::ConversionEntry;
pub use validate::{
    check_reasonable, is_partial_numeric_text, is_reasonable_temperature, is_valid_numeric_text,
    parse_input,
};
