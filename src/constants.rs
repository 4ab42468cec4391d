//! Fixed sensor and radio characteristics shared by the decoder and utilities

// Sensor ADC full scale
pub const ADC_MAX_VALUE: f64 = 65535.0;

// Temperature: celsius = TEMP_SCALE_FACTOR * raw / ADC_MAX_VALUE + TEMP_OFFSET
pub const TEMP_SCALE_FACTOR: f64 = 175.0;
pub const TEMP_OFFSET: f64 = -45.0;

// Humidity: percent = HUMIDITY_SCALE_FACTOR * raw / ADC_MAX_VALUE
pub const HUMIDITY_SCALE_FACTOR: f64 = 100.0;

// Plausible ranges, both bounds inclusive
pub const TEMP_MIN: f64 = -40.0;
pub const TEMP_MAX: f64 = 80.0;
pub const HUMIDITY_MIN: f64 = 0.0;
pub const HUMIDITY_MAX: f64 = 100.0;

// Link quality reference points in dBm
pub const RSSI_EXCELLENT: i16 = -30; // 100%
pub const RSSI_UNUSABLE: i16 = -90; // 0%
