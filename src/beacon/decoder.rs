//! Jaalee advertisement decoding

use crate::beacon::payload::RawPayload;
use crate::constants::{ADC_MAX_VALUE, HUMIDITY_SCALE_FACTOR, TEMP_OFFSET, TEMP_SCALE_FACTOR};
use crate::models::{FrameFormat, SensorReading};
use crate::utils::{round_to_2_decimals, validate_sensor_data};

// Jaalee long (iBeacon) frame layout
const LONG_FORMAT_LEN: usize = 24;
const IBEACON_HEADER: [u8; 2] = [0x02, 0x15];
const JAALEE_MARKER: [u8; 2] = [0xF5, 0x25];
const MARKER_SCAN_FIRST: usize = 2;
const MARKER_SCAN_LAST: usize = 16; // inclusive, marker may end on byte 17
const TEMPERATURE_OFFSET: usize = 18;
const HUMIDITY_OFFSET: usize = 20;
const BATTERY_OFFSET: usize = 23;

/// Convert a raw temperature ADC count to degrees Celsius (two decimals)
pub fn calculate_temperature(raw: u16) -> f64 {
    let celsius = TEMP_SCALE_FACTOR * f64::from(raw) / ADC_MAX_VALUE + TEMP_OFFSET;
    round_to_2_decimals(celsius)
}

/// Convert a raw humidity ADC count to relative humidity percent (two decimals)
pub fn calculate_humidity(raw: u16) -> f64 {
    let humidity = HUMIDITY_SCALE_FACTOR * f64::from(raw) / ADC_MAX_VALUE;
    round_to_2_decimals(humidity)
}

/// Look for the Jaalee marker inside the iBeacon UUID area
///
/// Scans start positions MARKER_SCAN_FIRST..=MARKER_SCAN_LAST and stops at
/// the first adjacent `F5 25` pair.
fn has_jaalee_marker(payload: &RawPayload<'_>) -> bool {
    (MARKER_SCAN_FIRST..=MARKER_SCAN_LAST).any(|i| {
        payload.at(i) == Some(JAALEE_MARKER[0]) && payload.at(i + 1) == Some(JAALEE_MARKER[1])
    })
}

/// Decode a Jaalee long format (24-byte iBeacon) advertisement
///
/// Frame layout:
/// - Bytes 0-1: iBeacon header (0x02 0x15)
/// - Bytes 2-17: UUID / major / minor area, contains the Jaalee marker (0xF5 0x25)
///   at some adjacent position
/// - Bytes 18-19: Temperature (unsigned 16-bit big-endian ADC count)
/// - Bytes 20-21: Humidity (unsigned 16-bit big-endian ADC count)
/// - Byte 22: not used here
/// - Byte 23: Battery level in percent
///
/// # Arguments
/// * `payload` - Raw advertisement bytes
///
/// # Returns
/// Some(SensorReading) if the frame matches and the values are plausible,
/// None otherwise. Foreign frames and implausible readings are not errors.
pub fn decode_long_format(payload: RawPayload<'_>) -> Option<SensorReading> {
    if payload.len() != LONG_FORMAT_LEN {
        return None;
    }

    if payload.at(0)? != IBEACON_HEADER[0] || payload.at(1)? != IBEACON_HEADER[1] {
        return None;
    }

    if !has_jaalee_marker(&payload) {
        return None;
    }

    let temperature = calculate_temperature(payload.u16_be(TEMPERATURE_OFFSET)?);
    let humidity = calculate_humidity(payload.u16_be(HUMIDITY_OFFSET)?);
    let battery = payload.at(BATTERY_OFFSET)?;

    if !validate_sensor_data(temperature, humidity) {
        return None;
    }

    Some(SensorReading {
        temperature,
        humidity,
        battery,
        format: FrameFormat::IBeacon24,
    })
}

/// Decode any supported Jaalee frame from a byte slice
pub fn decode(data: &[u8]) -> Option<SensorReading> {
    decode_long_format(RawPayload::new(data))
}
