//! Logging setup shared by the console binary and its tests.

/// Log output shapes.
pub mod format;

/// Subscriber installation.
pub mod tracing;

pub use format::{LogFormat, UnknownLogFormat};

/// Install the process-wide subscriber in the given format.
///
/// Safe to call multiple times; later calls are no-ops.
pub fn init(format: LogFormat) {
    tracing::init(format);
}
