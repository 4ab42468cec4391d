use jaalee_ble_decoder::{
    decode, decode_long_format, AppConfig, FrameFormat, ObservedAdvertisement, RawPayload,
    SensorReport, TemperatureUnit,
};
use time::OffsetDateTime;

// Marker at bytes 15-16, 42.5 °C / 50 % / battery 100
const CAPTURED_LINE: &str =
    "C1:D2:E3:F4:A5:B6 -45 02:15:00:00:00:00:00:00:00:00:00:00:00:00:00:f5:25:00:80:00:80:00:00:64";

#[test]
fn captured_line_decodes_to_report() {
    let advertisement = ObservedAdvertisement::parse(CAPTURED_LINE).unwrap();
    assert_eq!(advertisement.payload.len(), 24);

    let reading = decode(&advertisement.payload).expect("Jaalee frame");
    assert!((reading.temperature - 42.5).abs() < 0.1);
    assert!((reading.humidity - 50.0).abs() < 0.1);
    assert_eq!(reading.battery, 100);
    assert_eq!(reading.format, FrameFormat::IBeacon24);

    let config = AppConfig::from_lookup(|key| match key {
        "TEMPERATURE_UNIT" => Some("fahrenheit".to_string()),
        "JAALEE_TAGS" => Some("C1:D2:E3:F4:A5:B6=Greenhouse".to_string()),
        _ => None,
    })
    .unwrap();
    let report = SensorReport::new(&advertisement, &reading, &config, OffsetDateTime::UNIX_EPOCH);

    assert_eq!(report.topic, "jaalee/c1d2e3f4a5b6");
    assert_eq!(report.name, "Greenhouse");
    assert_eq!(report.unit, TemperatureUnit::Fahrenheit);
    assert!((report.temperature - 108.5).abs() < 0.01);
    assert_eq!(report.link_quality, 75);
}

#[test]
fn foreign_advertisements_yield_no_reading() {
    // Apple iBeacon with a different UUID: right header and length, no marker
    let line = "00:11:22:33:44:55 -70 0215e2c56db5dffb48d2b060d0f5a71096e000010002c5";
    let advertisement = ObservedAdvertisement::parse(line).unwrap();
    assert_eq!(advertisement.payload.len(), 23);
    assert_eq!(decode(&advertisement.payload), None);

    let mut padded = advertisement.payload.clone();
    padded.push(0x64);
    assert_eq!(decode_long_format(RawPayload::new(&padded)), None);
}
