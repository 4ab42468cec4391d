//! Parsing of captured advertisement lines: `<MAC> <RSSI> <HEX PAYLOAD>`

use thiserror::Error;

/// One advertisement as observed by the listening side
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservedAdvertisement {
    pub mac: String,
    pub rssi: i16,
    pub payload: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("missing {0} field")]
    MissingField(&'static str),
    #[error("invalid RSSI '{0}'")]
    InvalidRssi(String),
    #[error("invalid payload hex: {0}")]
    InvalidPayload(String),
    #[error("unexpected trailing data '{0}'")]
    TrailingData(String),
}

/// True for lines the reader should skip without complaint
pub fn is_comment_or_blank(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || line.starts_with('#')
}

impl ObservedAdvertisement {
    /// Parse a line such as `AA:BB:CC:DD:EE:FF -61 0215f525...`
    ///
    /// The payload may be written with `:` or `-` between bytes.
    pub fn parse(line: &str) -> Result<Self, InputError> {
        let mut fields = line.split_whitespace();

        let mac = fields.next().ok_or(InputError::MissingField("MAC"))?;
        let rssi = fields.next().ok_or(InputError::MissingField("RSSI"))?;
        let payload = fields.next().ok_or(InputError::MissingField("payload"))?;

        let rest: Vec<&str> = fields.collect();
        if !rest.is_empty() {
            return Err(InputError::TrailingData(rest.join(" ")));
        }

        let rssi = rssi
            .parse::<i16>()
            .map_err(|_| InputError::InvalidRssi(rssi.to_string()))?;

        let cleaned: String = payload.chars().filter(|c| *c != ':' && *c != '-').collect();
        let payload = hex::decode(&cleaned).map_err(|e| InputError::InvalidPayload(e.to_string()))?;

        Ok(ObservedAdvertisement {
            mac: mac.to_string(),
            rssi,
            payload,
        })
    }
}
