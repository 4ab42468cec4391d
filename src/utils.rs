//! Numeric and string helpers for validating and presenting sensor data

use time::macros::format_description;
use time::OffsetDateTime;

use crate::constants::{
    HUMIDITY_MAX, HUMIDITY_MIN, RSSI_EXCELLENT, RSSI_UNUSABLE, TEMP_MAX, TEMP_MIN,
};
use crate::models::TemperatureUnit;

/// Format a timestamp for human-readable output
///
/// Converts an OffsetDateTime to DD.MM.YYYY - HH:MM:SS format
/// Falls back to default string representation if formatting fails.
pub fn format_datetime(dt: &OffsetDateTime) -> String {
    // Checked and built at compile time
    let format = format_description!("[day].[month].[year] - [hour]:[minute]:[second]");
    dt.format(&format).unwrap_or_else(|_| dt.to_string())
}

/// Round to two decimal places, halves away from zero
pub fn round_to_2_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    round_to_2_decimals(celsius * 9.0 / 5.0 + 32.0)
}

/// Express a Celsius value in the requested unit
///
/// Celsius values are passed through untouched (no rounding); Fahrenheit
/// values are converted and rounded to two decimals.
pub fn convert_temperature(celsius: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Fahrenheit => celsius_to_fahrenheit(celsius),
        TemperatureUnit::Celsius => celsius,
    }
}

/// Check decoded values against the sensor's plausible operating range
///
/// Both bounds are inclusive and both values must be in range.
pub fn validate_sensor_data(temperature: f64, humidity: f64) -> bool {
    (TEMP_MIN..=TEMP_MAX).contains(&temperature)
        && (HUMIDITY_MIN..=HUMIDITY_MAX).contains(&humidity)
}

/// Map signal strength in dBm to a 0-100 quality score
///
/// Linear between RSSI_UNUSABLE (0%) and RSSI_EXCELLENT (100%), clamped
/// outside that range and rounded to the nearest integer.
pub fn calculate_link_quality(rssi: i16) -> u8 {
    let range = f64::from(RSSI_EXCELLENT - RSSI_UNUSABLE);
    let quality = (f64::from(rssi) - f64::from(RSSI_UNUSABLE)) * 100.0 / range;
    quality.clamp(0.0, 100.0).round() as u8
}

/// Turn "AA:BB:CC:DD:EE:FF" into "aabbccddeeff" for use in a topic
///
/// Segments are not validated as hex; missing or empty input gives "".
pub fn format_mac_for_topic(mac: Option<&str>) -> String {
    match mac {
        Some(mac) => mac.split(':').map(str::to_lowercase).collect(),
        None => String::new(),
    }
}
