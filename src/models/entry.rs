//! Conversion entry data model.
//!
//! Represents one completed conversion as an immutable record: once
//! constructed it is only ever moved in and out of a history, never
//! mutated in place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::convert::ConversionDirection;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionEntry {
    pub direction: ConversionDirection,
    pub input_value: f64,
    pub output_value: f64,
    pub timestamp: DateTime<Utc>,
}

impl ConversionEntry {
    /// Build an entry from an input value, computing the output through
    /// the direction's own formula. An entry constructed this way can
    /// never hold an output inconsistent with its direction.
    pub fn new(direction: ConversionDirection, input_value: f64, timestamp: DateTime<Utc>) -> Self {
        Self {
            direction,
            input_value,
            output_value: direction.convert(input_value),
            timestamp,
        }
    }

    /// Reassemble an entry from previously stored values. The output is
    /// taken as stored rather than re-derived, preserving whatever the
    /// record said at serialization time.
    pub fn from_parts(
        direction: ConversionDirection,
        input_value: f64,
        output_value: f64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            direction,
            input_value,
            output_value,
            timestamp,
        }
    }
}

/// Structural equality: direction plus both values. Timestamps are
/// deliberately excluded so an entry survives serialization round trips
/// (and their sub-second precision loss) as "the same conversion".
impl PartialEq for ConversionEntry {
    fn eq(&self, other: &Self) -> bool {
        self.direction == other.direction
            && self.input_value == other.input_value
            && self.output_value == other.output_value
    }
}
