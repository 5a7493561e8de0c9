use std::fs;
use std::path::{Path, PathBuf};

use miette::{miette, Context, IntoDiagnostic, Result};
use serde::Deserialize;
use toml::Table;
use tracing::debug;

pub use self::logging::LoggingConfiguration;
use self::logging::UnresolvedLoggingConfiguration;
use super::resolver::OverrideSource;
use super::utilities::get_default_configuration_file_path;

mod logging;


#[derive(Deserialize, Debug, Default)]
struct UnresolvedHostConfiguration {
    #[serde(default)]
    debug: Option<bool>,

    #[serde(default)]
    logging: UnresolvedLoggingConfiguration,

    #[serde(default, rename = "flatpickr")]
    flatpickr_overrides: Option<Table>,
}


/// The host application's configuration, as far as the widget is concerned.
///
/// ```toml
/// debug = false
///
/// [logging]
/// console_output_level_filter = "info"
///
/// [flatpickr]
/// theme_name = "airbnb"
///
/// [flatpickr.options]
/// minuteIncrement = 30
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HostConfiguration {
    /// The file this configuration was loaded from, if any.
    pub file_path: Option<PathBuf>,

    /// The host's own debug flag.
    pub debug: Option<bool>,

    pub logging: LoggingConfiguration,

    /// The raw `[flatpickr]` override block.
    pub flatpickr_overrides: Option<Table>,
}


impl UnresolvedHostConfiguration {
    fn resolve(self, file_path: Option<PathBuf>) -> Result<HostConfiguration> {
        let logging = self
            .logging
            .resolve()
            .wrap_err("Failed to resolve logging table.")?;

        Ok(HostConfiguration {
            file_path,
            debug: self.debug,
            logging,
            flatpickr_overrides: self.flatpickr_overrides,
        })
    }
}


impl HostConfiguration {
    /// Parse a host configuration from a TOML string.
    pub fn from_toml_str(configuration_string: &str) -> Result<Self> {
        let unresolved_configuration =
            toml::from_str::<UnresolvedHostConfiguration>(configuration_string)
                .into_diagnostic()
                .wrap_err("Could not parse host configuration!")?;

        unresolved_configuration
            .resolve(None)
            .wrap_err("Failed to resolve host configuration.")
    }

    /// Load the host configuration from a specific file path.
    pub fn load_from_path<S: AsRef<Path>>(configuration_file_path: S) -> Result<Self> {
        let configuration_string = fs::read_to_string(configuration_file_path.as_ref())
            .into_diagnostic()
            .wrap_err_with(|| {
                miette!(
                    "Could not read host configuration file at {}.",
                    configuration_file_path.as_ref().display()
                )
            })?;


        let unresolved_configuration =
            toml::from_str::<UnresolvedHostConfiguration>(&configuration_string)
                .into_diagnostic()
                .wrap_err("Could not load host configuration file!")?;


        let configuration_file_path = dunce::canonicalize(configuration_file_path)
            .into_diagnostic()
            .wrap_err("Could not canonicalize host configuration file path!")?;

        debug!(
            "Loaded host configuration from {}.",
            configuration_file_path.display()
        );

        unresolved_configuration
            .resolve(Some(configuration_file_path))
            .wrap_err("Failed to resolve host configuration.")
    }

    /// Load the host configuration from the default path
    /// (`FLATPICKR_SETTINGS_CONFIGURATION` or `./data/configuration.toml`).
    pub fn load_from_default_path() -> Result<Self> {
        HostConfiguration::load_from_path(
            get_default_configuration_file_path()
                .wrap_err_with(|| "Could not load host configuration file at default path.")?,
        )
    }
}

impl OverrideSource for HostConfiguration {
    fn load_overrides(&self) -> Table {
        self.flatpickr_overrides.clone().unwrap_or_default()
    }

    fn host_debug(&self) -> Option<bool> {
        self.debug
    }
}


#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn empty_host_has_no_overrides() {
        let host = HostConfiguration::from_toml_str("").unwrap();

        assert_eq!(host, HostConfiguration::default());
        assert!(host.load_overrides().is_empty());
        assert_eq!(host.host_debug(), None);
    }

    #[test]
    fn override_block_is_read_without_being_consumed() {
        let host = HostConfiguration::from_toml_str(
            r#"
            debug = false

            [flatpickr]
            theme_name = "confetti"
            "#,
        )
        .unwrap();

        let first = host.load_overrides();
        let second = host.load_overrides();

        assert_eq!(first, second);
        assert_eq!(
            first.get("theme_name").and_then(toml::Value::as_str),
            Some("confetti")
        );
        assert_eq!(host.host_debug(), Some(false));
    }

    #[test]
    fn invalid_level_filter_is_rejected() {
        let result = HostConfiguration::from_toml_str(
            r#"
            [logging]
            console_output_level_filter = "flatpickr_settings=loud"
            "#,
        );

        assert!(result.is_err());
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[flatpickr.options]\nshowMonths = 2").unwrap();

        let host = HostConfiguration::load_from_path(file.path()).unwrap();

        assert!(host.file_path.is_some());
        assert_eq!(host.logging, LoggingConfiguration::default());
        assert!(host.load_overrides().contains_key("options"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let directory = tempfile::tempdir().unwrap();

        assert!(HostConfiguration::load_from_path(directory.path().join("absent.toml")).is_err());
    }
}
