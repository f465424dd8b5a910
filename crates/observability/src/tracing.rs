//! Subscriber initialization.
//!
//! Filtering comes from `RUST_LOG` and defaults to `info`.

use tracing_subscriber::EnvFilter;

use crate::LogFormat;

/// Install a fmt subscriber in `format`.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(format: LogFormat) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(false);

    let installed = match format {
        LogFormat::Json => builder
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .try_init(),
        LogFormat::Pretty => builder.compact().try_init(),
    };

    match installed {
        Ok(()) => ::tracing::debug!(%format, "log subscriber installed"),
        Err(_) => ::tracing::debug!(%format, "log subscriber already installed; keeping it"),
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_a_no_op() {
        init(LogFormat::Json);
        init(LogFormat::Pretty);
        ::tracing::info!("still logging after second init");
    }
}
