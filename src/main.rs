use std::time::Duration;

use navigate_hal::bus::i2c::{LinuxI2c, ThreadSafeI2c};
use navigate_hal::bus::BusType;
use navigate_hal::counter::{delay, MonotonicCounter};
use navigate_hal::sensors::{Accelerometer, Nunchuk};
use navigate_hal::{init_tracing, load_bus_config, ConfigError, I2c};
use tracing::{error, info};

const READERS: usize = 2;
const SAMPLES_PER_READER: usize = 10;
const SAMPLE_PERIOD: Duration = Duration::from_millis(20);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing with RUST_LOG environment variable support
    init_tracing();

    info!("[NavigateHal] starting up...");

    // Load configuration from CONFIG_PATH or default
    let config_path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config".to_string());
    let bus_config_path = format!("{}/buses.toml", config_path);
    let bus_config = load_bus_config(&bus_config_path)?;
    info!("[config] loaded {} bus(es)", bus_config.buses.len());

    let entry = bus_config
        .buses_of(BusType::I2c)
        .next()
        .ok_or_else(|| ConfigError::ValidationError("no i2c bus configured".to_string()))?;

    let settings = entry.i2c_settings();
    let mut bus = LinuxI2c::open(&entry.path, settings)?;
    bus.configure(&settings)?;

    // Single owner: drive the bus directly
    let mut nunchuk = Nunchuk::new(&mut bus);
    nunchuk.init()?;
    let sample = nunchuk.read()?;
    info!("[main] direct read: {:?}", sample.acceleration());

    // Shared: each report holds the lock across its pointer write and read
    let shared = ThreadSafeI2c::new(&mut bus);
    std::thread::scope(|s| -> Result<(), Box<dyn std::error::Error>> {
        let handles: Vec<_> = (0..READERS)
            .map(|reader| {
                let shared = &shared;
                s.spawn(move || -> Result<(), String> {
                    let mut counter = MonotonicCounter::new();
                    for _ in 0..SAMPLES_PER_READER {
                        let sample = {
                            let mut bus = shared.lock();
                            Nunchuk::new(&mut *bus).read().map_err(|e| e.to_string())?
                        };
                        info!("[reader{}] {:?}", reader, sample.acceleration());
                        delay(&mut counter, SAMPLE_PERIOD).map_err(|e| e.to_string())?;
                    }
                    Ok(())
                })
            })
            .collect();

        for (reader, handle) in handles.into_iter().enumerate() {
            match handle.join() {
                Ok(Ok(())) => info!("[reader{}] done", reader),
                Ok(Err(e)) => {
                    error!("[reader{}] failed: {}", reader, e);
                    return Err(e.into());
                }
                Err(_) => return Err(format!("reader{} panicked", reader).into()),
            }
        }
        Ok(())
    })?;

    info!("[main] all readers finished");
    Ok(())
}
