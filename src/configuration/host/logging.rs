use std::path::PathBuf;

use miette::{miette, Context, IntoDiagnostic, Result};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;


fn default_console_output_level_filter() -> String {
    "info".to_string()
}

fn default_log_file_output_level_filter() -> String {
    "debug".to_string()
}


#[derive(Deserialize, Clone, Debug)]
pub(super) struct UnresolvedLoggingConfiguration {
    #[serde(default = "default_console_output_level_filter")]
    console_output_level_filter: String,

    #[serde(default = "default_log_file_output_level_filter")]
    log_file_output_level_filter: String,

    #[serde(default)]
    log_file_output_directory: Option<PathBuf>,
}

impl Default for UnresolvedLoggingConfiguration {
    fn default() -> Self {
        Self {
            console_output_level_filter: default_console_output_level_filter(),
            log_file_output_level_filter: default_log_file_output_level_filter(),
            log_file_output_directory: None,
        }
    }
}


/// Logging-related host configuration (the `[logging]` table).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoggingConfiguration {
    pub console_output_level_filter: String,

    pub log_file_output_level_filter: String,

    /// Log files are only written if this is set.
    pub log_file_output_directory: Option<PathBuf>,
}

impl UnresolvedLoggingConfiguration {
    pub(super) fn resolve(self) -> Result<LoggingConfiguration> {
        EnvFilter::try_new(&self.console_output_level_filter)
            .into_diagnostic()
            .wrap_err_with(|| miette!("Failed to parse field console_output_level_filter"))?;

        EnvFilter::try_new(&self.log_file_output_level_filter)
            .into_diagnostic()
            .wrap_err_with(|| miette!("Failed to parse field log_file_output_level_filter"))?;


        Ok(LoggingConfiguration {
            console_output_level_filter: self.console_output_level_filter,
            log_file_output_level_filter: self.log_file_output_level_filter,
            log_file_output_directory: self.log_file_output_directory,
        })
    }
}

impl Default for LoggingConfiguration {
    fn default() -> Self {
        Self {
            console_output_level_filter: default_console_output_level_filter(),
            log_file_output_level_filter: default_log_file_output_level_filter(),
            log_file_output_directory: None,
        }
    }
}

impl LoggingConfiguration {
    pub fn console_output_level_filter(&self) -> EnvFilter {
        // PANIC SAFETY: This is safe because we checked that the input is valid in `resolve`.
        EnvFilter::try_new(&self.console_output_level_filter).unwrap()
    }

    pub fn log_file_output_level_filter(&self) -> EnvFilter {
        // PANIC SAFETY: This is safe because we checked that the input is valid in `resolve`.
        EnvFilter::try_new(&self.log_file_output_level_filter).unwrap()
    }
}
