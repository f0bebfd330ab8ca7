pub mod accelerometer;
pub mod nunchuk;

pub use accelerometer::{Accelerometer, MockAccelerometer, Sample};
pub use nunchuk::Nunchuk;
