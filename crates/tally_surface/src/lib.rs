//! Tally Surface
//!
//! Host integration for the tally counter: hit testing, pointer-press
//! capture, gesture synthesis, and the frame loop glue. A windowing host
//! creates a [`Surface`], forwards pointer events, calls
//! [`Surface::advance`] each frame, and draws from [`Surface::frame`].

pub mod router;
pub mod surface;

pub use router::{PointerRouter, PressTarget};
pub use surface::{Surface, SurfaceFrame};
