//! Expanding ring drawn over the chart.

/// Frames per sweep from the origin to the outer ring.
const SWEEP_FRAMES: usize = 100;

/// Sweep animation state.
#[derive(Debug, Clone)]
pub struct SweepState {
    enabled: bool,
    frame: usize,
}

impl SweepState {
    /// Create a sweep, optionally paused.
    pub fn new(enabled: bool) -> Self {
        Self { enabled, frame: 0 }
    }

    /// Whether the ring is drawn.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Pause or resume; returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }

    /// Advance one frame, wrapping back to the origin.
    pub fn tick(&mut self) {
        if self.enabled {
            self.frame = (self.frame + 1) % SWEEP_FRAMES;
        }
    }

    /// Ring radius as a fraction of the outer ring, evenly spaced from 0 to 1.
    pub fn fraction(&self) -> f64 {
        self.frame as f64 / (SWEEP_FRAMES - 1) as f64
    }
}
