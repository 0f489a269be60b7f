//! Bounded, newest-first conversion history.
//!
//! The only stateful component in the crate: an ordered sequence of
//! [`ConversionEntry`] values capped at a configured size, with filter,
//! statistics, and serialization operations on top. Single logical
//! caller, no internal locking (see crate docs).

use chrono::{DateTime, Duration, Utc};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::convert::ConversionDirection;
use crate::error::Error;
use crate::models::ConversionEntry;

/// Tunable history limits, held as one immutable value per history.
#[derive(Debug, Clone)]
pub struct HistoryConfig {
    /// Maximum number of entries kept; the oldest are evicted beyond this.
    pub max_entries: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self { max_entries: 20 }
    }
}

/// Aggregate view over a history, zero-valued when the history is empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryStats {
    pub total_conversions: usize,
    pub fahrenheit_to_celsius_count: usize,
    pub celsius_to_fahrenheit_count: usize,
    pub average_input_value: f64,
    pub average_output_value: f64,
    pub oldest_entry: Option<DateTime<Utc>>,
    pub newest_entry: Option<DateTime<Utc>>,
}

impl Default for HistoryStats {
    fn default() -> Self {
        Self {
            total_conversions: 0,
            fahrenheit_to_celsius_count: 0,
            celsius_to_fahrenheit_count: 0,
            average_input_value: 0.0,
            average_output_value: 0.0,
            oldest_entry: None,
            newest_entry: None,
        }
    }
}

/// The JSON-compatible persisted shape of one entry. Directions travel as
/// display names and timestamps as RFC 3339 strings; the host owns where
/// these records actually go.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryRecord {
    pub direction: String,
    pub input_value: f64,
    pub output_value: f64,
    pub timestamp: String,
}

impl EntryRecord {
    fn from_entry(entry: &ConversionEntry) -> Self {
        Self {
            direction: entry.direction.as_str().to_string(),
            input_value: entry.input_value,
            output_value: entry.output_value,
            timestamp: entry.timestamp.to_rfc3339(),
        }
    }

    fn to_entry(&self) -> Result<ConversionEntry, Error> {
        let direction = ConversionDirection::from_name(&self.direction)?;
        let timestamp = DateTime::parse_from_rfc3339(&self.timestamp)
            .map_err(|_| Error::InvalidTimestamp(self.timestamp.clone()))?
            .with_timezone(&Utc);
        Ok(ConversionEntry::from_parts(
            direction,
            self.input_value,
            self.output_value,
            timestamp,
        ))
    }
}

/// Bounded, ordered collection of conversions, newest first (index 0 is
/// the most recent). Insertion order is authoritative for ordering, not
/// timestamp values.
#[derive(Debug, Clone, Default)]
pub struct ConversionHistory {
    config: HistoryConfig,
    entries: Vec<ConversionEntry>,
}

impl ConversionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: HistoryConfig) -> Self {
        Self {
            config,
            entries: Vec::new(),
        }
    }

    /// Newest-first read view for display.
    pub fn entries(&self) -> &[ConversionEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_entries(&self) -> usize {
        self.config.max_entries
    }

    /// Prepend an entry, evicting from the tail if the cap is exceeded.
    /// Existing entries are never modified, only dropped from the end.
    pub fn add_entry(&mut self, entry: ConversionEntry) {
        self.entries.insert(0, entry);
        if self.entries.len() > self.config.max_entries {
            let evicted = self.entries.len() - self.config.max_entries;
            self.entries.truncate(self.config.max_entries);
            debug!("history at capacity, evicted {evicted} oldest entry(ies)");
        }
    }

    /// Convert and store in one step, stamping the entry with a timestamp
    /// that never goes backwards within this history even if the wall
    /// clock does.
    pub fn record(&mut self, direction: ConversionDirection, input_value: f64) -> &ConversionEntry {
        let mut timestamp = Utc::now();
        if let Some(newest) = self.entries.first() {
            if timestamp < newest.timestamp {
                timestamp = newest.timestamp;
            }
        }
        self.add_entry(ConversionEntry::new(direction, input_value, timestamp));
        &self.entries[0]
    }

    /// Remove the first entry structurally equal to `entry` (direction and
    /// values; timestamps don't participate). Returns false if none match.
    pub fn remove_entry(&mut self, entry: &ConversionEntry) -> bool {
        match self.entries.iter().position(|e| e == entry) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove and return the entry at `index`. An out-of-range index is a
    /// caller bug and comes back as a loud error.
    pub fn remove_at(&mut self, index: usize) -> Result<ConversionEntry, Error> {
        if index >= self.entries.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        Ok(self.entries.remove(index))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// All entries for one direction, relative order preserved.
    pub fn filter_by_direction(&self, direction: ConversionDirection) -> Vec<&ConversionEntry> {
        self.entries
            .iter()
            .filter(|e| e.direction == direction)
            .collect()
    }

    /// Entries whose timestamp falls within `[start - 1ms, end + 1 day]`.
    /// The widened bounds are part of the contract: a range given as whole
    /// days captures entries from anywhere on the end date.
    pub fn filter_by_date_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Vec<&ConversionEntry> {
        let lo = start - Duration::milliseconds(1);
        let hi = end + Duration::days(1);
        self.entries
            .iter()
            .filter(|e| e.timestamp >= lo && e.timestamp <= hi)
            .collect()
    }

    /// Aggregate counts, means, and the timestamp span. With newest-first
    /// ordering the newest entry is the first element and the oldest the
    /// last.
    pub fn statistics(&self) -> HistoryStats {
        if self.entries.is_empty() {
            return HistoryStats::default();
        }

        let total = self.entries.len();
        let f_to_c = self
            .entries
            .iter()
            .filter(|e| e.direction == ConversionDirection::FahrenheitToCelsius)
            .count();
        let input_sum: f64 = self.entries.iter().map(|e| e.input_value).sum();
        let output_sum: f64 = self.entries.iter().map(|e| e.output_value).sum();

        HistoryStats {
            total_conversions: total,
            fahrenheit_to_celsius_count: f_to_c,
            celsius_to_fahrenheit_count: total - f_to_c,
            average_input_value: input_sum / total as f64,
            average_output_value: output_sum / total as f64,
            oldest_entry: self.entries.last().map(|e| e.timestamp),
            newest_entry: self.entries.first().map(|e| e.timestamp),
        }
    }

    /// Map every entry to its persisted record shape, newest first.
    pub fn serialize(&self) -> Vec<EntryRecord> {
        self.entries.iter().map(EntryRecord::from_entry).collect()
    }

    /// Load entries from persisted records. Each record is reconstructed
    /// independently; a malformed one (unknown direction name, bad
    /// timestamp) is skipped with a warning so one bad record never blocks
    /// the rest. Afterwards the whole history is re-sorted newest-first by
    /// timestamp and truncated to the cap. Returns how many records loaded.
    pub fn deserialize(&mut self, records: &[EntryRecord], clear_existing: bool) -> usize {
        if clear_existing {
            self.entries.clear();
        }
        let mut loaded = 0;
        for (index, record) in records.iter().enumerate() {
            match record.to_entry() {
                Ok(entry) => {
                    self.entries.push(entry);
                    loaded += 1;
                }
                Err(err) => warn!("skipping malformed history record {index}: {err}"),
            }
        }
        self.restore_order();
        loaded
    }

    /// Serialize the whole history to a JSON array string.
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(&self.serialize())?)
    }

    /// Load history from a JSON array string. Fails only if the top level
    /// is not an array; individual elements that don't decode to a record
    /// (missing field, wrong type) hit the same skip-and-warn path as
    /// malformed records.
    pub fn load_json(&mut self, json: &str, clear_existing: bool) -> Result<usize, Error> {
        let values: Vec<serde_json::Value> = serde_json::from_str(json)?;
        if clear_existing {
            self.entries.clear();
        }
        let mut loaded = 0;
        for (index, value) in values.into_iter().enumerate() {
            let entry = serde_json::from_value::<EntryRecord>(value)
                .map_err(Error::from)
                .and_then(|record| record.to_entry());
            match entry {
                Ok(entry) => {
                    self.entries.push(entry);
                    loaded += 1;
                }
                Err(err) => warn!("skipping malformed history record {index}: {err}"),
            }
        }
        self.restore_order();
        Ok(loaded)
    }

    // Deserialized batches arrive in arbitrary order; sort is stable so
    // equal timestamps keep their relative order.
    fn restore_order(&mut self) {
        self.entries
            .sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        self.entries.truncate(self.config.max_entries);
    }
}
