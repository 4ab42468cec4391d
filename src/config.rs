use log::{debug, info};
use std::collections::HashMap;
use std::env;

use crate::models::TemperatureUnit;

const DEFAULT_TOPIC_PREFIX: &str = "jaalee";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub temperature_unit: TemperatureUnit,
    pub topic_prefix: String,
    /// Upper-cased MAC address -> human readable sensor name
    pub tags: HashMap<String, String>,
}

impl AppConfig {
    /// Build the configuration from the process environment and an optional `.env` file
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        // Load environment variables
        dotenv::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Box<dyn std::error::Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let temperature_unit = lookup("TEMPERATURE_UNIT")
            .map(|unit| TemperatureUnit::from(unit.trim()))
            .unwrap_or_default();

        let topic_prefix = match lookup("TOPIC_PREFIX") {
            Some(prefix) => {
                let prefix = prefix.trim().trim_end_matches('/');
                if prefix.is_empty() {
                    return Err("TOPIC_PREFIX must not be empty".into());
                }
                prefix.to_string()
            }
            None => DEFAULT_TOPIC_PREFIX.to_string(),
        };

        let tags = match lookup("JAALEE_TAGS") {
            Some(jaalee_tags) => parse_tags(&jaalee_tags)?,
            None => {
                debug!("JAALEE_TAGS environment variable not set, sensors will be unnamed");
                HashMap::new()
            }
        };

        info!(
            "Configuration: unit={:?}, topic prefix='{}', {} named sensors",
            temperature_unit,
            topic_prefix,
            tags.len()
        );
        for (mac, name) in &tags {
            debug!("Tag: {} -> {}", mac, name);
        }

        Ok(AppConfig {
            temperature_unit,
            topic_prefix,
            tags,
        })
    }

    /// Configured name for a sensor address, if any
    pub fn sensor_name(&self, mac: &str) -> Option<&str> {
        self.tags.get(&mac.to_uppercase()).map(String::as_str)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            temperature_unit: TemperatureUnit::default(),
            topic_prefix: DEFAULT_TOPIC_PREFIX.to_string(),
            tags: HashMap::new(),
        }
    }
}

/// Parse `MAC=name,MAC=name` pairs
fn parse_tags(value: &str) -> Result<HashMap<String, String>, Box<dyn std::error::Error>> {
    let mut tags = HashMap::new();

    for pair in value.split(',') {
        let pair = pair.trim();
        if pair.is_empty() {
            continue;
        }

        let (mac, name) = pair
            .split_once('=')
            .ok_or_else(|| format!("Invalid JAALEE_TAGS entry '{}', expected MAC=name", pair))?;
        let mac = mac.trim();
        let name = name.trim();
        if mac.is_empty() || name.is_empty() {
            return Err(format!("Invalid JAALEE_TAGS entry '{}', expected MAC=name", pair).into());
        }

        tags.insert(mac.to_uppercase(), name.to_string());
    }

    Ok(tags)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.temperature_unit, TemperatureUnit::Celsius);
        assert_eq!(config.topic_prefix, "jaalee");
        assert!(config.tags.is_empty());
    }

    #[test]
    fn reads_all_variables() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("TEMPERATURE_UNIT", "fahrenheit"),
            ("TOPIC_PREFIX", "home/sensors/"),
            ("JAALEE_TAGS", "aa:bb:cc:dd:ee:ff=Kitchen, 11:22:33:44:55:66 = Garage ,"),
        ]))
        .unwrap();

        assert_eq!(config.temperature_unit, TemperatureUnit::Fahrenheit);
        assert_eq!(config.topic_prefix, "home/sensors");
        assert_eq!(config.tags.len(), 2);
        assert_eq!(config.sensor_name("AA:BB:CC:DD:EE:FF"), Some("Kitchen"));
        assert_eq!(config.sensor_name("11:22:33:44:55:66"), Some("Garage"));
        assert_eq!(config.sensor_name("00:00:00:00:00:00"), None);
    }

    #[test]
    fn unknown_unit_is_celsius() {
        let config = AppConfig::from_lookup(lookup_from(&[("TEMPERATURE_UNIT", "kelvin")])).unwrap();
        assert_eq!(config.temperature_unit, TemperatureUnit::Celsius);
    }

    #[test]
    fn empty_topic_prefix_is_an_error() {
        assert!(AppConfig::from_lookup(lookup_from(&[("TOPIC_PREFIX", " / ")])).is_err());
    }

    #[test]
    fn malformed_tags_are_an_error() {
        assert!(AppConfig::from_lookup(lookup_from(&[("JAALEE_TAGS", "AA:BB:CC:DD:EE:FF")])).is_err());
        assert!(AppConfig::from_lookup(lookup_from(&[("JAALEE_TAGS", "=Kitchen")])).is_err());
        assert!(AppConfig::from_lookup(lookup_from(&[("JAALEE_TAGS", "AA:BB:CC:DD:EE:FF=")])).is_err());
    }
}
