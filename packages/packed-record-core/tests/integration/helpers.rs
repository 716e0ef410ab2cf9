//! Shared fixtures for integration tests.

use rand::Rng;

/// Three-field user type used as an export target.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub sensor: i32,
    pub reading: f64,
    pub calibrated: bool,
}

impl From<(i32, f64, bool)> for Measurement {
    fn from((sensor, reading, calibrated): (i32, f64, bool)) -> Self {
        Self {
            sensor,
            reading,
            calibrated,
        }
    }
}

/// Generates `count` random (i32, f64, bool) tuples.
pub fn random_tuples(count: usize) -> Vec<(i32, f64, bool)> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| (rng.gen::<i32>(), rng.gen::<f64>(), rng.gen::<bool>()))
        .collect()
}
