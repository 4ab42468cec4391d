use std::fmt;

/// Frame layout a reading was decoded from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum FrameFormat {
    /// 24-byte iBeacon-style advertisement carrying the Jaalee marker
    IBeacon24,
}

impl FrameFormat {
    pub fn tag(&self) -> &'static str {
        match self {
            FrameFormat::IBeacon24 => "iBeacon-24",
        }
    }
}

impl fmt::Display for FrameFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A validated reading decoded from one advertisement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorReading {
    /// Degrees Celsius, two decimals
    pub temperature: f64,
    /// Relative humidity in percent, two decimals
    pub humidity: f64,
    /// Battery level as reported by the sensor
    pub battery: u8,
    pub format: FrameFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
        }
    }
}

impl From<&str> for TemperatureUnit {
    /// Only the exact string `fahrenheit` selects Fahrenheit; anything else is Celsius.
    fn from(unit: &str) -> Self {
        match unit {
            "fahrenheit" => TemperatureUnit::Fahrenheit,
            _ => TemperatureUnit::Celsius,
        }
    }
}
