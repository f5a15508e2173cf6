//! Instrumented render front door.
//!
//! Downstream code imports the renderer from here while the wiring lives
//! in the private `core` module.

mod core;

pub use core::TotuzenRenderer;
