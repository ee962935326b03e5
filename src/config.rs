use std::time::Duration;

use crate::constants::{AUTO_ADVANCE_INTERVAL, SETTLE_DELAY};

/// Timing and layout knobs for a controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    /// Period of the automatic advance.
    pub auto_advance: Duration,
    /// How long the transition lock stays set after a slide change.
    pub settle_delay: Duration,
    /// Fixed offset step per slide in percent. `None` spreads the track evenly
    /// (`100 / N`); `Some(25.0)` reproduces the classic four-slide layout.
    pub step_percent: Option<f32>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            auto_advance: AUTO_ADVANCE_INTERVAL,
            settle_delay: SETTLE_DELAY,
            step_percent: None,
        }
    }
}

impl Settings {
    /// Offset step for a track holding `slide_count` slides.
    pub fn step_for(&self, slide_count: usize) -> f32 {
        match self.step_percent {
            Some(step) => step,
            None if slide_count == 0 => 0.0,
            None => 100.0 / slide_count as f32,
        }
    }

    /// Whether every slide lands exactly in view. A fixed step only does when
    /// `step × N` covers the whole strip.
    pub fn step_fits(&self, slide_count: usize) -> bool {
        match self.step_percent {
            Some(step) if slide_count > 0 => (step * slide_count as f32 - 100.0).abs() < 0.01,
            _ => true,
        }
    }
}
