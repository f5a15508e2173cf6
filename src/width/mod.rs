//! Display-width measurement and width-budgeted truncation.
//!
//! Downstream modules import width helpers from here while the
//! implementation details live in the private `core` module.

mod core;

pub use core::{ELLIPSIS, char_width, display_width, truncate_with_ellipsis};
