//! End-to-end gesture flows against the counter's public API, driven at a
//! simulated 60fps.

use std::sync::{Arc, Mutex};

use tally_animation::AnimationScheduler;
use tally_core::{Impulse, RecordingHaptics, Vec2};
use tally_widgets::{Acceleration, DragState, Metrics, TallyCounter};

const FRAME: f32 = 1.0 / 60.0;

struct Harness {
    scheduler: AnimationScheduler,
    counter: TallyCounter,
    haptics: Arc<RecordingHaptics>,
    counts: Arc<Mutex<Vec<i32>>>,
}

impl Harness {
    fn new() -> Self {
        let scheduler = AnimationScheduler::new();
        let haptics = RecordingHaptics::new();
        let counts = Arc::new(Mutex::new(Vec::new()));
        let sink = counts.clone();
        let metrics = Metrics::from_window_width(390.0).unwrap();
        let counter = TallyCounter::new(scheduler.handle(), metrics)
            .with_haptics(haptics.clone())
            .on_count(Arc::new(move |count| sink.lock().unwrap().push(count)));
        Self {
            scheduler,
            counter,
            haptics,
            counts,
        }
    }

    /// Run `frames` frames of scheduler + widget updates
    fn run(&mut self, frames: usize) {
        for _ in 0..frames {
            self.scheduler.advance(FRAME);
            self.counter.update();
        }
    }

    fn counts(&self) -> Vec<i32> {
        self.counts.lock().unwrap().clone()
    }
}

#[test]
fn tap_sequence_reports_every_value() {
    let mut h = Harness::new();

    h.counter.count_up();
    h.counter.count_up();
    h.counter.count_up();
    h.counter.count_down();
    h.run(120);

    assert_eq!(h.counter.count(), 2);
    assert_eq!(h.counts(), vec![1, 2, 3, 2]);
}

#[test]
fn accelerating_hold_ticks_faster_over_time() {
    let mut h = Harness::new();
    let max_h = h.counter.metrics().max_horizontal;

    h.counter.gesture_begin();
    h.counter.gesture_update(Vec2::new(max_h, 0.0));
    assert_eq!(h.counter.acceleration(), Acceleration::Incrementing);
    assert_eq!(h.counter.count(), 1);

    // Record the frame index of every tick over 5 simulated seconds.
    let mut tick_frames = Vec::new();
    for frame in 0..300 {
        h.scheduler.advance(FRAME);
        let before = h.counter.count();
        h.counter.update();
        if h.counter.count() != before {
            tick_frames.push(frame);
        }
    }

    assert!(tick_frames.len() > 10, "only {} ticks", tick_frames.len());
    // First tick takes the full initial interval
    assert!(tick_frames[0] >= 80, "first tick too early: {}", tick_frames[0]);
    // Gaps between consecutive ticks never grow
    let gaps: Vec<usize> = tick_frames.windows(2).map(|w| w[1] - w[0]).collect();
    for pair in gaps.windows(2) {
        assert!(pair[1] <= pair[0] + 1, "tick gaps grew: {gaps:?}");
    }
    // The floor is 100ms, i.e. six frames
    let last_gap = *gaps.last().unwrap();
    assert!((5..=7).contains(&last_gap), "final gap {last_gap} frames");

    // Every count change pulsed the haptics once
    assert_eq!(h.haptics.count_of(Impulse::Light) as i32, h.counter.count());

    h.counter.gesture_end();
    assert_eq!(h.counter.acceleration(), Acceleration::Off);
    assert_eq!(h.counter.drag_state(), DragState::Idle);
}

#[test]
fn reversing_direction_mid_hold_switches_modes() {
    let mut h = Harness::new();
    let max_h = h.counter.metrics().max_horizontal;

    h.counter.gesture_begin();
    h.counter.gesture_update(Vec2::new(max_h, 0.0));
    assert_eq!(h.counter.count(), 1);

    // Crossing straight to the other extreme flips the mode and counts once
    h.counter.gesture_update(Vec2::new(-max_h, 0.0));
    assert_eq!(h.counter.acceleration(), Acceleration::Decrementing);
    assert_eq!(h.counter.count(), 0);

    h.counter.gesture_end();
    assert_eq!(h.counter.count(), 0);
}

#[test]
fn release_snaps_everything_home() {
    let mut h = Harness::new();
    let max_h = h.counter.metrics().max_horizontal;

    h.counter.gesture_begin();
    h.counter.gesture_update(Vec2::new(max_h, 0.0));
    h.counter.gesture_end();

    // 10 simulated seconds is far past settling for every spring involved
    h.run(600);
    let frame = h.counter.frame();
    assert!(frame.tx.abs() < 0.01);
    assert!(frame.ty.abs() < 0.01);
    assert!((frame.circle_scale - 1.0).abs() < 0.01);
    assert!((frame.text_scale - 1.0).abs() < 0.01);
    assert_eq!(frame.display, "1");
    assert_eq!(frame.indicators.buttons, 1.0);
    assert_eq!(frame.indicators.reset, 0.0);
}

#[test]
fn vertical_reset_fires_once_and_restores_on_back_out() {
    let mut h = Harness::new();
    for _ in 0..7 {
        h.counter.count_up();
    }
    let max_v = h.counter.metrics().max_vertical;

    h.counter.gesture_begin();
    h.counter.gesture_update(Vec2::new(0.0, 10.0));
    assert_eq!(h.counter.drag_state(), DragState::Vertical);

    h.counter.gesture_update(Vec2::new(0.0, max_v + 50.0));
    assert_eq!(h.counter.count(), 0);
    let resets_so_far = h.haptics.count_of(Impulse::Light);
    assert_eq!(resets_so_far, 1);

    // Jitter inside the reset band must not fire again
    h.counter.gesture_update(Vec2::new(5.0, max_v - 2.0));
    h.counter.gesture_update(Vec2::new(-5.0, max_v + 10.0));
    assert_eq!(h.haptics.count_of(Impulse::Light), 1);

    // Back out, the old count comes back; dip again, it resets again
    h.counter.gesture_update(Vec2::new(0.0, 10.0));
    assert_eq!(h.counter.count(), 7);
    h.counter.gesture_update(Vec2::new(0.0, max_v));
    assert_eq!(h.counter.count(), 0);
    assert_eq!(h.haptics.count_of(Impulse::Light), 2);

    h.counter.gesture_end();
    assert_eq!(h.counter.count(), 0);
    assert_eq!(h.counts().last().copied(), Some(0));
}

#[test]
fn cancel_mid_hold_behaves_like_release() {
    let mut h = Harness::new();
    let max_h = h.counter.metrics().max_horizontal;

    h.counter.gesture_begin();
    h.counter.gesture_update(Vec2::new(max_h, 0.0));
    h.run(120);
    let at_cancel = h.counter.count();
    assert!(at_cancel >= 2);

    h.counter.gesture_cancel();
    assert_eq!(h.counter.acceleration(), Acceleration::Off);
    assert_eq!(h.counter.drag_state(), DragState::Idle);

    // No further ticks after the cancel
    h.run(300);
    assert_eq!(h.counter.count(), at_cancel);
}
