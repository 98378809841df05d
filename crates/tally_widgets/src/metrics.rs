//! Layout metrics
//!
//! Every dimension in the widget is derived from the window width, so the
//! counter scales uniformly across devices. The ratios match the reference
//! design: the counter pill is 43% of the window wide, the draggable circle
//! is 75% of the pill height, and the drag range leaves the circle flush
//! with the pill ends at the extremes.

use thiserror::Error;

/// Why a window width cannot produce usable metrics
#[derive(Debug, Error, PartialEq)]
pub enum MetricsError {
    #[error("window width must be finite, got {0}")]
    NonFinite(f32),
    #[error("window width must be positive, got {0}")]
    NonPositive(f32),
    #[error("window width {width} leaves no room between the extreme bands (horizontal range {range}, band {band})")]
    TooNarrow { width: f32, range: f32, band: f32 },
}

/// Size-derived layout constants for the counter and its affordances
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Metrics {
    /// Width of the counter pill
    pub counter_width: f32,
    /// Height of the counter pill
    pub counter_height: f32,
    /// Diameter of the draggable circle
    pub circle_diameter: f32,
    /// Diameter of each tap button
    pub button_diameter: f32,
    /// Horizontal distance from pill center to each button center
    pub button_offset: f32,
    /// Horizontal drag clamp (symmetric about center)
    pub max_horizontal: f32,
    /// Vertical drag clamp (downward only)
    pub max_vertical: f32,
    /// Depth of the extreme bands that trigger counting / reset
    pub count_tolerance: f32,
    /// Displacement needed to lock the drag axis
    pub axis_threshold: f32,
    /// Horizontal wiggle allowed while the axis is locked vertical
    pub vertical_wiggle: f32,
}

impl Metrics {
    /// Tick interval when acceleration begins (ms)
    pub const INITIAL_TICK_INTERVAL_MS: f32 = 1500.0;
    /// Tick interval floor (ms)
    pub const FINAL_TICK_INTERVAL_MS: f32 = 100.0;
    /// Window over which the interval decays from initial to final (ms)
    pub const ACCELERATION_RAMP_MS: f32 = 1800.0;
    /// Fail-safe: a button press held longer than this disengages
    pub const BUTTON_MAX_HOLD_MS: f32 = 10_000.0;
    /// Fail-safe: a press on the main circle held longer than this disengages
    pub const CIRCLE_MAX_HOLD_MS: f32 = 100_000.0;

    /// Derive metrics from the window width
    pub fn from_window_width(width: f32) -> Result<Self, MetricsError> {
        if !width.is_finite() {
            return Err(MetricsError::NonFinite(width));
        }
        if width <= 0.0 {
            return Err(MetricsError::NonPositive(width));
        }

        let counter_width = width * 0.43;
        let counter_height = counter_width * 0.44;
        let circle_diameter = counter_height * 0.75;
        let count_tolerance = 20.0;
        let max_horizontal = counter_width * 0.45 - circle_diameter / 2.0;

        if max_horizontal <= count_tolerance {
            return Err(MetricsError::TooNarrow {
                width,
                range: max_horizontal,
                band: count_tolerance,
            });
        }

        Ok(Self {
            counter_width,
            counter_height,
            circle_diameter,
            button_diameter: width * 0.1,
            button_offset: counter_width / 3.0,
            max_horizontal,
            max_vertical: counter_height * 0.85,
            count_tolerance,
            axis_threshold: 5.0,
            vertical_wiggle: 30.0,
        })
    }
}
