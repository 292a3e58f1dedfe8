//! # Logging
//!
//! One-call setup of `tracing-subscriber` for hosts of the playback cache.
//!
//! Native builds write to stdout in one of three [`LogFormat`]s; wasm32 builds
//! write to the browser console through `tracing-wasm`. Either way, a host can
//! attach a [`LoggerSink`] to receive a [`LogEntry`] copy of every event that
//! passes the filter.
//!
//! Without a custom filter, the workspace crates log at the configured level
//! and the audio stack (`rodio`, `symphonia`, `cpal`) is held at `warn`.
//!
//! ```ignore
//! use bridge_traits::time::{ConsoleLogger, LogLevel};
//! use core_runtime::logging::{init_logging, LogFormat, LoggingConfig};
//! use std::sync::Arc;
//!
//! init_logging(
//!     LoggingConfig::default()
//!         .with_format(LogFormat::Compact)
//!         .with_level(LogLevel::Debug)
//!         .with_logger_sink(Arc::new(ConsoleLogger::default())),
//! )?;
//! ```

use crate::error::{Error, Result};
use bridge_traits::time::{LogEntry, LogLevel, LoggerSink};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

/// Crates whose level follows [`LoggingConfig::level`].
const WORKSPACE_TARGETS: &[&str] = &[
    "sfx_workspace",
    "core_runtime",
    "core_playback",
    "bridge_desktop",
    "bridge_wasm",
];

/// Audio dependencies that are only interesting when something breaks.
const QUIET_TARGETS: &[&str] = &["rodio", "symphonia", "cpal"];

/// Stdout format for native builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Multi-line, colored
    Pretty,
    /// One JSON object per event
    Json,
    /// Single line per event
    Compact,
}

impl Default for LogFormat {
    /// `Pretty` in debug builds, `Json` in release builds.
    fn default() -> Self {
        if cfg!(debug_assertions) {
            Self::Pretty
        } else {
            Self::Json
        }
    }
}

/// Options for [`init_logging`].
#[derive(Clone)]
pub struct LoggingConfig {
    pub format: LogFormat,
    /// Level for the workspace crates when no custom filter is set
    pub level: LogLevel,
    /// `EnvFilter` directives replacing the default ones
    pub filter: Option<String>,
    /// Host logger that receives a copy of every event
    pub logger_sink: Option<Arc<dyn LoggerSink>>,
    /// Log span open/close (native only)
    pub enable_spans: bool,
    pub display_target: bool,
    pub display_thread_info: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            level: LogLevel::Info,
            filter: None,
            logger_sink: None,
            enable_spans: false,
            display_target: true,
            display_thread_info: false,
        }
    }
}

impl LoggingConfig {
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Replace the default directives, e.g. `"core_playback=trace,rodio=info"`.
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn with_logger_sink(mut self, sink: Arc<dyn LoggerSink>) -> Self {
        self.logger_sink = Some(sink);
        self
    }

    pub fn with_spans(mut self, enable: bool) -> Self {
        self.enable_spans = enable;
        self
    }

    pub fn with_target(mut self, display: bool) -> Self {
        self.display_target = display;
        self
    }

    pub fn with_thread_info(mut self, display: bool) -> Self {
        self.display_thread_info = display;
        self
    }

    /// `EnvFilter` directives this configuration resolves to.
    pub fn directives(&self) -> String {
        if let Some(filter) = &self.filter {
            return filter.clone();
        }

        let level = self.level.as_str();
        WORKSPACE_TARGETS
            .iter()
            .map(|target| format!("{}={}", target, level))
            .chain(QUIET_TARGETS.iter().map(|target| format!("{}=warn", target)))
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Install the global subscriber.
///
/// # Errors
///
/// - [`Error::Config`] if the filter directives do not parse
/// - [`Error::Logging`] if a global subscriber is already installed
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    let filter = build_filter(&config)?;

    tracing_subscriber::registry()
        .with(stdout_layer(&config))
        .with(LoggerSinkLayer::new(config.logger_sink.clone()))
        .with(filter)
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))
}

/// Install the global subscriber, writing to the browser console.
///
/// [`LoggingConfig::format`] and the display flags have no effect here.
#[cfg(target_arch = "wasm32")]
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    let filter = build_filter(&config)?;
    let console = tracing_wasm::WASMLayer::new(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(to_tracing_level(config.level))
            .build(),
    );

    tracing_subscriber::registry()
        .with(console)
        .with(LoggerSinkLayer::new(config.logger_sink.clone()))
        .with(filter)
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))
}

#[cfg(not(target_arch = "wasm32"))]
fn stdout_layer(
    config: &LoggingConfig,
) -> Box<dyn Layer<tracing_subscriber::Registry> + Send + Sync> {
    use tracing_subscriber::fmt::format::FmtSpan;

    let spans = if config.enable_spans {
        FmtSpan::NEW | FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };
    let base = tracing_subscriber::fmt::layer()
        .with_target(config.display_target)
        .with_thread_ids(config.display_thread_info)
        .with_thread_names(config.display_thread_info)
        .with_writer(std::io::stdout);

    match config.format {
        LogFormat::Pretty => base.pretty().with_span_events(spans).boxed(),
        LogFormat::Compact => base.compact().with_span_events(spans).boxed(),
        LogFormat::Json => base
            .json()
            .flatten_event(true)
            .with_current_span(config.enable_spans)
            .with_span_list(false)
            .boxed(),
    }
}

fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    let directives = config.directives();
    EnvFilter::try_new(&directives)
        .map_err(|e| Error::Config(format!("Invalid log filter '{}': {}", directives, e)))
}

/// Mirrors events to a host [`LoggerSink`].
struct LoggerSinkLayer {
    sink: Option<Arc<dyn LoggerSink>>,
}

impl LoggerSinkLayer {
    fn new(sink: Option<Arc<dyn LoggerSink>>) -> Self {
        Self { sink }
    }
}

impl<S> Layer<S> for LoggerSinkLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        let Some(sink) = &self.sink else {
            return;
        };

        let metadata = event.metadata();
        let level = to_log_level(*metadata.level());
        if level < sink.min_level() {
            return;
        }

        let mut fields = FieldCollector::default();
        event.record(&mut fields);

        let message = fields
            .message
            .take()
            .unwrap_or_else(|| metadata.name().to_string());
        let mut entry = LogEntry::new(level, metadata.target(), message);
        entry.fields = fields.values;
        entry.span_id = ctx.lookup_current().map(|span| span.name().to_string());

        if let Err(err) = sink.log(entry) {
            eprintln!("LoggerSink error: {}", err);
        }
    }
}

/// Flattens event fields to strings; `message` is kept apart.
#[derive(Default)]
struct FieldCollector {
    message: Option<String>,
    values: HashMap<String, String>,
}

impl FieldCollector {
    fn insert(&mut self, field: &Field, value: String) {
        match field.name() {
            "message" => self.message = Some(value),
            name => {
                self.values.insert(name.to_string(), value);
            }
        }
    }
}

impl Visit for FieldCollector {
    // Strings are recorded verbatim rather than Debug-quoted.
    fn record_str(&mut self, field: &Field, value: &str) {
        self.insert(field, value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.insert(field, format!("{:?}", value));
    }
}

fn to_log_level(level: tracing::Level) -> LogLevel {
    match level {
        tracing::Level::TRACE => LogLevel::Trace,
        tracing::Level::DEBUG => LogLevel::Debug,
        tracing::Level::INFO => LogLevel::Info,
        tracing::Level::WARN => LogLevel::Warn,
        tracing::Level::ERROR => LogLevel::Error,
    }
}

#[cfg(target_arch = "wasm32")]
fn to_tracing_level(level: LogLevel) -> tracing::Level {
    match level {
        LogLevel::Trace => tracing::Level::TRACE,
        LogLevel::Debug => tracing::Level::DEBUG,
        LogLevel::Info => tracing::Level::INFO,
        LogLevel::Warn => tracing::Level::WARN,
        LogLevel::Error => tracing::Level::ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_traits::error::Result as SinkResult;
    use parking_lot::Mutex;

    struct RecordingSink {
        entries: Mutex<Vec<LogEntry>>,
        min_level: LogLevel,
    }

    impl RecordingSink {
        fn at(min_level: LogLevel) -> Arc<Self> {
            Arc::new(Self {
                entries: Mutex::new(Vec::new()),
                min_level,
            })
        }
    }

    impl LoggerSink for RecordingSink {
        fn log(&self, entry: LogEntry) -> SinkResult<()> {
            self.entries.lock().push(entry);
            Ok(())
        }

        fn min_level(&self) -> LogLevel {
            self.min_level
        }
    }

    fn with_sink<F: FnOnce()>(sink: Arc<RecordingSink>, f: F) {
        let layer = LoggerSinkLayer::new(Some(sink as Arc<dyn LoggerSink>));
        let subscriber = tracing_subscriber::registry().with(layer);
        tracing::subscriber::with_default(subscriber, f);
    }

    #[test]
    fn default_directives_cover_workspace_and_quiet_audio_stack() {
        let directives = LoggingConfig::default()
            .with_level(LogLevel::Debug)
            .directives();

        assert!(directives.contains("core_playback=debug"));
        assert!(directives.contains("bridge_desktop=debug"));
        assert!(directives.contains("rodio=warn"));
        assert!(directives.contains("cpal=warn"));
        assert!(build_filter(&LoggingConfig::default()).is_ok());
    }

    #[test]
    fn custom_filter_replaces_defaults() {
        let config = LoggingConfig::default().with_filter("core_playback=trace");

        assert_eq!(config.directives(), "core_playback=trace");
        assert!(build_filter(&config).is_ok());
    }

    #[test]
    fn malformed_filter_is_a_config_error() {
        let config = LoggingConfig::default().with_filter("core_playback=[");

        assert!(matches!(build_filter(&config), Err(Error::Config(_))));
    }

    #[test]
    fn sink_receives_message_and_fields() {
        let sink = RecordingSink::at(LogLevel::Trace);
        with_sink(sink.clone(), || {
            tracing::info!(target: "core_playback::cache", path = "sfx/coin.wav", at_ms = 12.5, "played");
        });

        let entries = sink.entries.lock();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].target, "core_playback::cache");
        assert_eq!(entries[0].message, "played");
        assert_eq!(entries[0].fields.get("path").map(String::as_str), Some("sfx/coin.wav"));
        assert_eq!(entries[0].fields.get("at_ms").map(String::as_str), Some("12.5"));
    }

    #[test]
    fn sink_min_level_drops_lower_events() {
        let sink = RecordingSink::at(LogLevel::Warn);
        with_sink(sink.clone(), || {
            tracing::debug!("created audio");
            tracing::warn!("Audio playback rejected");
        });

        let entries = sink.entries.lock();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].level, LogLevel::Warn);
    }

    #[test]
    fn sink_entry_names_current_span() {
        let sink = RecordingSink::at(LogLevel::Trace);
        with_sink(sink.clone(), || {
            let span = tracing::info_span!("trigger");
            let _entered = span.enter();
            tracing::info!("played");
        });

        assert_eq!(sink.entries.lock()[0].span_id.as_deref(), Some("trigger"));
    }
}
