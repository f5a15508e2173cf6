use serde_json::json;

use crate::art::ArtFrame;
use crate::config::EngineConfig;
use crate::error::Result;
use crate::logging::{LogFields, LogLevel, Logger};
use crate::metrics::{MetricSnapshot, RenderMetrics};

/// Configured, instrumented front door over the pure layout functions.
///
/// The surrounding dispatch layer holds one of these per process. The
/// pure functions stay directly callable for callers that want no
/// counters or logs; rendering itself never fails either way.
pub struct TotuzenRenderer {
    config: EngineConfig,
    logger: Option<Logger>,
    metrics: RenderMetrics,
}

impl TotuzenRenderer {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            logger: None,
            metrics: RenderMetrics::new(),
        }
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn metrics(&self) -> MetricSnapshot {
        self.metrics.snapshot()
    }

    /// Render `message` into a fenced frame at the configured width.
    ///
    /// Counters are updated and a debug event is emitted per call; log
    /// delivery failures never block rendering.
    pub fn render(&mut self, message: &str) -> String {
        let frame = ArtFrame::compose(message, self.config.max_width);

        self.metrics.record_render();
        if frame.truncated() {
            self.metrics.record_truncation();
        }
        self.metrics.record_mentions(message.matches('@').count());

        if let Some(logger) = &self.logger {
            let mut fields = LogFields::new();
            fields.insert("inner_width".to_string(), json!(frame.inner_width() as u64));
            fields.insert("max_width".to_string(), json!(self.config.max_width as u64));
            fields.insert("truncated".to_string(), json!(frame.truncated()));
            let _ = logger.log_with_fields(
                LogLevel::Debug,
                "totuzen.render",
                "frame_rendered",
                fields,
            );
        }

        frame.to_string()
    }

    /// Emit the current counters as a structured metrics event.
    pub fn log_metrics(&self) -> Result<()> {
        if let Some(logger) = &self.logger {
            logger.log_event(self.metrics.snapshot().to_log_event("totuzen.metrics"))?;
        }
        Ok(())
    }
}
