// ABOUTME: Accelerometer log-magnitude readings and threshold-based step edge detection
// ABOUTME: Keeps a bounded window of recent readings for adaptive thresholds

use crate::stats::welford_stats;
use std::collections::VecDeque;

/// Number of recent readings retained by [`ReadingWindow`]
pub const READING_WINDOW_CAPACITY: usize = 100;

/// Log magnitude `ln(x² + y² + z²) / 2` of an accelerometer reading
#[must_use]
pub fn log_magnitude(x: f64, y: f64, z: f64) -> f64 {
    z.mul_add(z, x.mul_add(x, y * y)).ln() / 2.0
}

/// Indices where `magnitudes` crosses `threshold` upward
///
/// Each index marks one detected step.
#[must_use]
pub fn step_edges(magnitudes: &[f64], threshold: f64) -> Vec<usize> {
    magnitudes
        .windows(2)
        .enumerate()
        .filter(|(_, w)| w[0] <= threshold && w[1] > threshold)
        .map(|(i, _)| i + 1)
        .collect()
}

/// Bounded window of the most recent log-magnitude readings
#[derive(Debug, Clone, Default)]
pub struct ReadingWindow {
    readings: VecDeque<f64>,
}

impl ReadingWindow {
    /// Create an empty window
    #[must_use]
    pub fn new() -> Self {
        Self {
            readings: VecDeque::with_capacity(READING_WINDOW_CAPACITY),
        }
    }

    /// Append a reading, evicting the oldest when full
    pub fn push(&mut self, log_magnitude: f64) {
        if self.readings.len() == READING_WINDOW_CAPACITY {
            self.readings.pop_front();
        }
        self.readings.push_back(log_magnitude);
    }

    /// Number of retained readings
    #[must_use]
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    /// Whether no readings are retained
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Retained readings, oldest first
    #[must_use]
    pub fn to_vec(&self) -> Vec<f64> {
        self.readings.iter().copied().collect()
    }

    /// Threshold one standard deviation above the window mean
    #[must_use]
    pub fn adaptive_threshold(&self) -> f64 {
        let summary = welford_stats(&self.to_vec());
        summary.mean + summary.stdev.sqrt()
    }

    /// Step edges within the window against its adaptive threshold
    #[must_use]
    pub fn step_edges(&self) -> Vec<usize> {
        step_edges(&self.to_vec(), self.adaptive_threshold())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_magnitude_of_gravity() {
        let g = 9.81_f64;
        assert!((log_magnitude(0.0, 0.0, g) - g.ln()).abs() < 1e-12);
    }

    #[test]
    fn test_rising_edges_only() {
        let mags = [1.0, 3.0, 3.5, 1.0, 0.5, 4.0, 1.0];
        assert_eq!(step_edges(&mags, 2.0), vec![1, 5]);
        assert!(step_edges(&[], 2.0).is_empty());
    }

    #[test]
    fn test_window_is_bounded() {
        let mut window = ReadingWindow::new();
        for i in 0..250_i32 {
            window.push(f64::from(i));
        }
        assert_eq!(window.len(), READING_WINDOW_CAPACITY);
        assert_eq!(window.to_vec()[0], 150.0);
    }

    #[test]
    fn test_window_detects_alternating_steps() {
        let mut window = ReadingWindow::new();
        for i in 0..20 {
            window.push(if i % 4 == 0 { 3.0 } else { 2.0 });
        }
        assert_eq!(window.step_edges().len(), 4);
    }
}
