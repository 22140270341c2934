use crate::builder::Settings;
use crate::error::{LoggerError, LoggerErrorExt};
use std::fs;
use std::path::Path;
use tracing::Subscriber;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::Layer;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::registry::LookupSpan;

const LOG_FILE_SUFFIX: &str = "log";

pub(crate) type BoxedLayer<S> = Box<dyn Layer<S> + Send + Sync + 'static>;

pub(crate) fn console<S>() -> BoxedLayer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    layer().compact().with_target(true).with_ansi(true).boxed()
}

/// Rolling file layer `<dir>/<name>.<date>.log`, written through a non-blocking worker.
pub(crate) fn file<S>(
    name: &str,
    dir: &Path,
    settings: &Settings,
) -> Result<(BoxedLayer<S>, WorkerGuard), LoggerError>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fs::create_dir_all(dir).context(format!("Failed to create {}", dir.display()))?;

    let appender = RollingFileAppender::builder()
        .rotation(settings.rotation.clone())
        .filename_prefix(name)
        .filename_suffix(LOG_FILE_SUFFIX)
        .max_log_files(settings.max_files)
        .build(dir)?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let plain = layer().with_writer(writer).with_ansi(false);
    let boxed = if settings.json { plain.json().boxed() } else { plain.boxed() };
    Ok((boxed, guard))
}
