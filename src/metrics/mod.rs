//! Render counters for the instrumented engine front door.

use serde_json::json;

use crate::logging::{LogEvent, LogFields, LogLevel};

/// Counters accumulated by [`TotuzenRenderer`](crate::TotuzenRenderer)
/// across calls. The pure layout functions touch none of this.
#[derive(Debug, Default, Clone)]
pub struct RenderMetrics {
    renders: u64,
    truncations: u64,
    mentions_defused: u64,
}

impl RenderMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_render(&mut self) {
        self.renders = self.renders.saturating_add(1);
    }

    pub fn record_truncation(&mut self) {
        self.truncations = self.truncations.saturating_add(1);
    }

    pub fn record_mentions(&mut self, count: usize) {
        if count > 0 {
            self.mentions_defused = self.mentions_defused.saturating_add(count as u64);
        }
    }

    pub fn snapshot(&self) -> MetricSnapshot {
        MetricSnapshot {
            renders: self.renders,
            truncations: self.truncations,
            mentions_defused: self.mentions_defused,
        }
    }
}

/// Point-in-time copy of the render counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricSnapshot {
    pub renders: u64,
    pub truncations: u64,
    pub mentions_defused: u64,
}

impl MetricSnapshot {
    pub fn as_fields(&self) -> LogFields {
        let mut map = LogFields::new();
        map.insert("renders".to_string(), json!(self.renders));
        map.insert("truncations".to_string(), json!(self.truncations));
        map.insert("mentions_defused".to_string(), json!(self.mentions_defused));
        map
    }

    pub fn to_log_event(&self, target: &str) -> LogEvent {
        LogEvent::with_fields(LogLevel::Info, target, "render_metrics", self.as_fields())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate() {
        let mut metrics = RenderMetrics::new();
        metrics.record_render();
        metrics.record_render();
        metrics.record_truncation();
        metrics.record_mentions(3);
        metrics.record_mentions(0);

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.renders, 2);
        assert_eq!(snapshot.truncations, 1);
        assert_eq!(snapshot.mentions_defused, 3);
    }

    #[test]
    fn snapshot_event_carries_fields() {
        let mut metrics = RenderMetrics::new();
        metrics.record_render();

        let event = metrics.snapshot().to_log_event("totuzen.metrics");
        assert_eq!(event.message, "render_metrics");
        assert_eq!(event.fields.get("renders"), Some(&serde_json::json!(1)));
    }
}
