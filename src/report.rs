//! Publishable view of a decoded reading

use std::fmt;
use time::OffsetDateTime;

use crate::config::AppConfig;
use crate::input::ObservedAdvertisement;
use crate::models::{FrameFormat, SensorReading, TemperatureUnit};
use crate::utils::{calculate_link_quality, convert_temperature, format_datetime, format_mac_for_topic};

#[derive(Debug, Clone, PartialEq)]
pub struct SensorReport {
    pub topic: String,
    pub name: String,
    /// Temperature in `unit`
    pub temperature: f64,
    pub unit: TemperatureUnit,
    pub humidity: f64,
    pub battery: u8,
    pub rssi: i16,
    pub link_quality: u8,
    pub format: FrameFormat,
    pub time: OffsetDateTime,
}

impl SensorReport {
    /// Combine a decoded reading with where and how it was received
    pub fn new(
        advertisement: &ObservedAdvertisement,
        reading: &SensorReading,
        config: &AppConfig,
        time: OffsetDateTime,
    ) -> Self {
        SensorReport {
            topic: format!(
                "{}/{}",
                config.topic_prefix,
                format_mac_for_topic(Some(advertisement.mac.as_str()))
            ),
            name: config
                .sensor_name(&advertisement.mac)
                .unwrap_or("Unknown")
                .to_string(),
            temperature: convert_temperature(reading.temperature, config.temperature_unit),
            unit: config.temperature_unit,
            humidity: reading.humidity,
            battery: reading.battery,
            rssi: advertisement.rssi,
            link_quality: calculate_link_quality(advertisement.rssi),
            format: reading.format,
            time,
        }
    }
}

impl fmt::Display for SensorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} name={} temperature={:.2}{} humidity={:.2}% battery={}% rssi={}dBm link_quality={}% format={} time={}",
            self.topic,
            self.name,
            self.temperature,
            self.unit.symbol(),
            self.humidity,
            self.battery,
            self.rssi,
            self.link_quality,
            self.format,
            format_datetime(&self.time)
        )
    }
}
