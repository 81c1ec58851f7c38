//! Tracing subscriber setup

use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::EnvFilter;

use kw_shared::{LogFormat, LoggingConfig};

/// Builds the subscriber described by `config`, writing to `sink`
///
/// `RUST_LOG` takes precedence over `config.level` when it is set.
pub fn get_subscriber<Sink>(
    config: &LoggingConfig,
    sink: Sink,
) -> Box<dyn Subscriber + Send + Sync + 'static>
where
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(sink)
        .with_file(config.source_location)
        .with_line_number(config.source_location);

    match config.format {
        LogFormat::Json => Box::new(builder.json().finish()),
        LogFormat::Pretty => Box::new(builder.pretty().finish()),
        LogFormat::Compact => Box::new(builder.compact().finish()),
    }
}

/// Installs `subscriber` as the global default and routes `log` records
/// into it. Fails if a global subscriber is already set.
pub fn init_subscriber(
    subscriber: Box<dyn Subscriber + Send + Sync + 'static>,
) -> Result<(), TryInitError> {
    subscriber.try_init()
}
