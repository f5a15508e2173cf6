//! Mention sanitization for chat-bound text.
//!
//! Downstream modules import the sanitizer from here while the rule set
//! lives in the private `core` module.

mod core;

pub use core::{ZERO_WIDTH, sanitize_message};
