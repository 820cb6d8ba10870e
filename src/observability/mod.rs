//! OpenTelemetry tracing exported to a local file.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK provider → FileSpanExporter → JSON lines
//! ```
//!
//! Spans are written as OTLP JSON, one batch per line, to
//! `~/.local/share/zellij/lurkforwork/lurkforwork-otlp.json`. The file rotates
//! at 10 MB and three backups are kept.
//!
//! The level is taken from the `trace_level` plugin option (default `info`).
//! Request bodies never reach a span: the event handler records tags,
//! statuses and body lengths only.
//!
//! - [`init`]: subscriber setup
//! - `tracer`: provider and file exporter
//! - `span_formatter`: OTLP JSON encoding
//! - `file_writer`: size-rotated file

mod file_writer;
pub mod init;
mod span_formatter;
mod tracer;

pub use init::init_tracing;

/// `service.name` resource attribute.
pub const SERVICE_NAME: &str = "LurkForWork";

/// Instrumentation scope recorded on every span batch.
pub const SCOPE_NAME: &str = "lurkforwork";

/// Trace file name inside the data directory.
pub const TRACE_FILE_NAME: &str = "lurkforwork-otlp.json";
