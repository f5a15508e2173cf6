//! Render a few frames to stdout with the instrumented renderer.
//!
//! Width and log level come from `TOTUZEN_MAX_WIDTH` and `LOG_LEVEL`;
//! structured log events go to stderr as JSON lines.

use totuzen::{EngineConfig, Logger, StderrSink, TotuzenRenderer};

fn main() -> totuzen::Result<()> {
    let config = EngineConfig::from_env()?;
    let logger = Logger::new(StderrSink, config.log_level);
    let mut renderer = TotuzenRenderer::new(config).with_logger(logger);

    let messages = [
        "突然の死",
        "hello world",
        "@everyone this line is far too long to fit and will be cut",
        "改行は\nスペースに",
    ];

    for message in messages {
        println!("{}", renderer.render(message));
    }

    renderer.log_metrics()
}
