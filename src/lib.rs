//! Decoder for Jaalee temperature/humidity BLE advertisements.
//!
//! [`beacon::decoder::decode_long_format`] turns a raw advertisement payload
//! into a validated [`SensorReading`], or `None` when the payload is not a
//! Jaalee frame or carries implausible values. The remaining modules hold the
//! small helpers used to present readings and the pieces of the offline
//! command-line decoder.

pub mod beacon;
pub mod config;
pub mod constants;
pub mod input;
pub mod models;
pub mod report;
pub mod utils;

pub use beacon::decoder::{calculate_humidity, calculate_temperature, decode, decode_long_format};
pub use beacon::payload::RawPayload;
pub use config::AppConfig;
pub use input::{is_comment_or_blank, InputError, ObservedAdvertisement};
pub use models::{FrameFormat, SensorReading, TemperatureUnit};
pub use report::SensorReport;
pub use utils::{
    calculate_link_quality, celsius_to_fahrenheit, convert_temperature, format_mac_for_topic,
    round_to_2_decimals, validate_sensor_data,
};
