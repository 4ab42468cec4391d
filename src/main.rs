use log::{debug, error, info, warn};
use time::OffsetDateTime;
use tokio::io::{AsyncBufReadExt, BufReader};

use jaalee_ble_decoder::{
    decode, is_comment_or_blank, AppConfig, ObservedAdvertisement, SensorReport,
};

#[derive(Debug, Default)]
struct Counters {
    decoded: u64,
    no_match: u64,
    malformed: u64,
}

/// Read captured advertisements from stdin, one per line, and print a report
/// for every frame that decodes as a Jaalee reading
async fn decode_loop(config: &AppConfig) -> Result<Counters, Box<dyn std::error::Error>> {
    info!("Reading advertisements from stdin");

    let mut counters = Counters::default();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut line_number: u64 = 0;

    while let Some(line) = lines.next_line().await? {
        line_number += 1;
        if is_comment_or_blank(&line) {
            continue;
        }

        let advertisement = match ObservedAdvertisement::parse(&line) {
            Ok(advertisement) => advertisement,
            Err(e) => {
                warn!("Line {}: {}", line_number, e);
                counters.malformed += 1;
                continue;
            }
        };

        match decode(&advertisement.payload) {
            Some(reading) => {
                let report =
                    SensorReport::new(&advertisement, &reading, config, OffsetDateTime::now_utc());
                debug!(
                    "Decoded {}: temp={:.2}°C, humidity={:.2}%, battery={}%",
                    advertisement.mac, reading.temperature, reading.humidity, reading.battery
                );
                println!("{}", report);
                counters.decoded += 1;
            }
            None => {
                debug!(
                    "Line {}: no Jaalee reading in {} byte payload from {}",
                    line_number,
                    advertisement.payload.len(),
                    advertisement.mac
                );
                counters.no_match += 1;
            }
        }
    }

    Ok(counters)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();

    // Load configuration
    let config = match AppConfig::new() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e);
        }
    };

    // Run decode loop or wait for shutdown signal
    tokio::select! {
        result = decode_loop(&config) => {
            match result {
                Ok(counters) => info!(
                    "Finished: {} decoded, {} without Jaalee reading, {} malformed lines",
                    counters.decoded, counters.no_match, counters.malformed
                ),
                Err(e) => {
                    error!("Fatal error: {}", e);
                    return Err(e);
                }
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Program terminated by user. Exiting gracefully.");
        }
    }

    Ok(())
}
