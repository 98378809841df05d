//! Headless demo: scripts a tap, an accelerated hold, and a reset against
//! the surface and prints each frame's state.
//!
//! Run with `cargo run --example counter_demo -p tally_surface`.
//! Set `RUST_LOG=debug` to watch the gesture decisions.

use std::sync::Arc;

use anyhow::Result;
use tally_core::PointerEvent;
use tally_surface::Surface;
use tracing_subscriber::EnvFilter;

const FRAME: f32 = 1.0 / 60.0;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut surface = Surface::new(390.0, 844.0)?.on_count(Arc::new(|count| {
        println!("count -> {count}");
    }));

    // Three taps on the + button
    let plus = surface.plus_center();
    for _ in 0..3 {
        surface.handle_pointer(PointerEvent::down(plus.x, plus.y));
        surface.handle_pointer(PointerEvent::up(plus.x, plus.y));
        run(&mut surface, 12);
    }

    // Hold the circle at the right extreme for three seconds
    let circle = surface.circle_center();
    let max_h = 60.0;
    surface.handle_pointer(PointerEvent::down(circle.x, circle.y));
    surface.handle_pointer(PointerEvent::moved(circle.x + max_h, circle.y));
    run(&mut surface, 180);
    surface.handle_pointer(PointerEvent::up(circle.x + max_h, circle.y));
    run(&mut surface, 60);

    // Pull straight down to reset
    surface.handle_pointer(PointerEvent::down(circle.x, circle.y));
    surface.handle_pointer(PointerEvent::moved(circle.x, circle.y + 10.0));
    surface.handle_pointer(PointerEvent::moved(circle.x, circle.y + 200.0));
    surface.handle_pointer(PointerEvent::up(circle.x, circle.y + 200.0));
    run(&mut surface, 60);

    let frame = surface.frame();
    println!(
        "final: display={} tx={:.2} ty={:.2} scale={:.2}",
        frame.counter.display, frame.counter.tx, frame.counter.ty, frame.counter.circle_scale
    );
    Ok(())
}

fn run(surface: &mut Surface, frames: usize) {
    for _ in 0..frames {
        surface.advance(FRAME);
    }
}
