//! Totuzen: a display-width-aware ASCII-art layout engine.
//!
//! Converts a user-supplied message into a "totsuzen" speech-bubble frame
//! whose borders are sized to the message's monospace display width. The
//! layout functions are pure and stateless; the surrounding command
//! dispatch and transport layers hold a [`TotuzenRenderer`] when they want
//! configuration, counters, and structured logs around the pure core.

pub mod art;
pub mod config;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod render;
pub mod sanitize;
pub mod width;

pub use art::{ArtFrame, render_art};
pub use config::{DEFAULT_MAX_WIDTH, EngineConfig};
pub use error::{ArtError, Result};
pub use logging::{LogEvent, LogFields, LogLevel, LogSink, Logger, MemorySink, StderrSink};
pub use metrics::{MetricSnapshot, RenderMetrics};
pub use render::TotuzenRenderer;
pub use sanitize::sanitize_message;
pub use width::{char_width, display_width, truncate_with_ellipsis};
