use std::path::Path;

use miette::{miette, Context, IntoDiagnostic, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};


/// Keeps the non-blocking log file writer alive. Drop it at the very end of `main`
/// so buffered log lines are flushed.
pub struct LoggingGuard {
    _file_writer_guard: Option<WorkerGuard>,
}


/// Set up console logging and, if `log_file_output_directory` is given,
/// a daily-rolling log file inside it.
pub fn initialize_tracing(
    console_level_filter: EnvFilter,
    log_file_level_filter: EnvFilter,
    log_file_output_directory: Option<&Path>,
    log_file_name_prefix: &str,
) -> Result<LoggingGuard> {
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(console_level_filter);


    let Some(log_file_output_directory) = log_file_output_directory else {
        tracing_subscriber::registry()
            .with(console_layer)
            .try_init()
            .into_diagnostic()
            .wrap_err("Failed to initialize tracing subscriber.")?;

        return Ok(LoggingGuard {
            _file_writer_guard: None,
        });
    };


    std::fs::create_dir_all(log_file_output_directory)
        .into_diagnostic()
        .wrap_err_with(|| {
            miette!(
                "Failed to create missing log file directory at {}.",
                log_file_output_directory.display()
            )
        })?;

    let file_appender =
        tracing_appender::rolling::daily(log_file_output_directory, log_file_name_prefix);
    let (non_blocking_file_writer, file_writer_guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_writer(non_blocking_file_writer)
        .with_filter(log_file_level_filter);


    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .into_diagnostic()
        .wrap_err("Failed to initialize tracing subscriber.")?;

    Ok(LoggingGuard {
        _file_writer_guard: Some(file_writer_guard),
    })
}
