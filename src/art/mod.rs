//! Totsuzen frame generation.
//!
//! Downstream modules import the frame type from here while the layout
//! arithmetic lives in the private `core` module.

mod core;

pub use core::{ArtFrame, render_art};
