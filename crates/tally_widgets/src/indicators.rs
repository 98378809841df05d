//! Affordance opacity ramps
//!
//! The minus / plus glyphs inside the pill, the tap-button row, and the
//! reset hint fade as the circle travels. All four opacities are pure
//! functions of the circle translation, so they need no animation state of
//! their own.

use crate::Metrics;

/// Linear ramp through two stops, clamped at the ends
pub fn ramp2(t: f32, (t0, v0): (f32, f32), (t1, v1): (f32, f32)) -> f32 {
    if t <= t0 {
        v0
    } else if t >= t1 {
        v1
    } else {
        v0 + (v1 - v0) * (t - t0) / (t1 - t0)
    }
}

/// Linear ramp through three stops, clamped at the ends
pub fn ramp3(t: f32, left: (f32, f32), mid: (f32, f32), right: (f32, f32)) -> f32 {
    if t <= mid.0 {
        ramp2(t, left, mid)
    } else {
        ramp2(t, mid, right)
    }
}

/// Opacities for the counter's affordances, each in [0, 1]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Indicators {
    /// Minus glyph at the left end of the pill
    pub minus: f32,
    /// Plus glyph at the right end of the pill
    pub plus: f32,
    /// The increment / decrement button row below the pill
    pub buttons: f32,
    /// The reset hint revealed as the buttons fade
    pub reset: f32,
}

impl Indicators {
    /// Derive all four opacities from the circle translation
    pub fn derive(tx: f32, ty: f32, metrics: &Metrics) -> Self {
        let max_h = metrics.max_horizontal;
        // Dragging toward a glyph keeps it lit; the opposite glyph dims.
        let minus = ramp3(tx, (-max_h, 1.0), (0.0, 1.0), (max_h, 0.2));
        let plus = ramp3(tx, (-max_h, 0.2), (0.0, 1.0), (max_h, 1.0));
        // The button row gives way to the reset hint on the way down.
        let buttons = ramp2(ty, (0.0, 1.0), (metrics.max_vertical, 0.0));
        Self {
            minus,
            plus,
            buttons,
            reset: 1.0 - buttons,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics() -> Metrics {
        Metrics::from_window_width(390.0).unwrap()
    }

    #[test]
    fn test_at_rest_everything_but_reset_is_visible() {
        let ind = Indicators::derive(0.0, 0.0, &metrics());
        assert_eq!(ind.minus, 1.0);
        assert_eq!(ind.plus, 1.0);
        assert_eq!(ind.buttons, 1.0);
        assert_eq!(ind.reset, 0.0);
    }

    #[test]
    fn test_dragging_right_dims_minus_only() {
        let m = metrics();
        let ind = Indicators::derive(m.max_horizontal, 0.0, &m);
        assert!((ind.minus - 0.2).abs() < 1e-6);
        assert_eq!(ind.plus, 1.0);

        let halfway = Indicators::derive(m.max_horizontal / 2.0, 0.0, &m);
        assert!((halfway.minus - 0.6).abs() < 1e-6);
        assert_eq!(halfway.plus, 1.0);
    }

    #[test]
    fn test_dragging_left_mirrors() {
        let m = metrics();
        let ind = Indicators::derive(-m.max_horizontal, 0.0, &m);
        assert_eq!(ind.minus, 1.0);
        assert!((ind.plus - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_vertical_drag_swaps_buttons_for_reset() {
        let m = metrics();
        let ind = Indicators::derive(0.0, m.max_vertical, &m);
        assert_eq!(ind.buttons, 0.0);
        assert_eq!(ind.reset, 1.0);

        let halfway = Indicators::derive(0.0, m.max_vertical / 2.0, &m);
        assert!((halfway.buttons - 0.5).abs() < 1e-6);
        assert!((halfway.reset - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_ramps_clamp_out_of_range() {
        let m = metrics();
        let ind = Indicators::derive(m.max_horizontal * 2.0, -10.0, &m);
        assert!((ind.minus - 0.2).abs() < 1e-6);
        assert_eq!(ind.buttons, 1.0);
    }
}
