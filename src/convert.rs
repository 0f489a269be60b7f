//! Temperature scales, conversion directions, and the conversion math.

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Convert a Fahrenheit reading to Celsius.
///
/// Total over finite inputs; values outside physically meaningful ranges
/// are converted like any other.
pub fn fahrenheit_to_celsius(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0
}

/// Convert a Celsius reading to Fahrenheit.
pub fn celsius_to_fahrenheit(c: f64) -> f64 {
    c * 9.0 / 5.0 + 32.0
}

/// Resolve a scale display name to its unit symbol.
///
/// Unknown names get a bare degree sign rather than an error, so display
/// code never has to handle a failure here.
pub fn unit_symbol(scale_name: &str) -> &'static str {
    match scale_name {
        "Celsius" => "°C",
        "Fahrenheit" => "°F",
        _ => "°",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TemperatureScale {
    Celsius,
    Fahrenheit,
}

impl TemperatureScale {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemperatureScale::Celsius => "Celsius",
            TemperatureScale::Fahrenheit => "Fahrenheit",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            TemperatureScale::Celsius => "°C",
            TemperatureScale::Fahrenheit => "°F",
        }
    }

    /// Look up a scale by its display name, as stored in persisted records.
    pub fn from_name(name: &str) -> Result<Self, Error> {
        match name {
            "Celsius" => Ok(TemperatureScale::Celsius),
            "Fahrenheit" => Ok(TemperatureScale::Fahrenheit),
            other => Err(Error::UnknownScale(other.to_string())),
        }
    }

    /// Physically defined range for this scale, from absolute zero up to a
    /// generous practical ceiling.
    pub fn reasonable_range(&self) -> RangeInclusive<f64> {
        match self {
            TemperatureScale::Celsius => -273.15..=1000.0,
            TemperatureScale::Fahrenheit => -459.67..=1832.0,
        }
    }
}

impl fmt::Display for TemperatureScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConversionDirection {
    FahrenheitToCelsius,
    CelsiusToFahrenheit,
}

impl ConversionDirection {
    pub const ALL: [ConversionDirection; 2] = [
        ConversionDirection::FahrenheitToCelsius,
        ConversionDirection::CelsiusToFahrenheit,
    ];

    pub fn source(&self) -> TemperatureScale {
        match self {
            ConversionDirection::FahrenheitToCelsius => TemperatureScale::Fahrenheit,
            ConversionDirection::CelsiusToFahrenheit => TemperatureScale::Celsius,
        }
    }

    pub fn target(&self) -> TemperatureScale {
        match self {
            ConversionDirection::FahrenheitToCelsius => TemperatureScale::Celsius,
            ConversionDirection::CelsiusToFahrenheit => TemperatureScale::Fahrenheit,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConversionDirection::FahrenheitToCelsius => "Fahrenheit to Celsius",
            ConversionDirection::CelsiusToFahrenheit => "Celsius to Fahrenheit",
        }
    }

    /// Apply this direction's conversion formula.
    pub fn convert(&self, value: f64) -> f64 {
        match self {
            ConversionDirection::FahrenheitToCelsius => fahrenheit_to_celsius(value),
            ConversionDirection::CelsiusToFahrenheit => celsius_to_fahrenheit(value),
        }
    }

    /// Look up a direction by its display name, as stored in persisted
    /// records.
    pub fn from_name(name: &str) -> Result<Self, Error> {
        match name {
            "Fahrenheit to Celsius" => Ok(ConversionDirection::FahrenheitToCelsius),
            "Celsius to Fahrenheit" => Ok(ConversionDirection::CelsiusToFahrenheit),
            other => Err(Error::UnknownDirection(other.to_string())),
        }
    }
}

impl fmt::Display for ConversionDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
