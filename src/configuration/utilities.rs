use std::{env::current_dir, path::PathBuf};

use miette::{miette, Context, IntoDiagnostic, Result};


/// Environment variable that points at a host configuration file
/// to use instead of the default one.
pub const CONFIGURATION_PATH_ENV_VAR: &str = "FLATPICKR_SETTINGS_CONFIGURATION";


/// Returns the default configuration filepath. This is the path in
/// `FLATPICKR_SETTINGS_CONFIGURATION` if set, otherwise
/// `{current directory}/data/configuration.toml`.
pub fn get_default_configuration_file_path() -> Result<PathBuf> {
    let configuration_filepath = match std::env::var_os(CONFIGURATION_PATH_ENV_VAR) {
        Some(path) => PathBuf::from(path),
        None => current_dir()
            .into_diagnostic()
            .wrap_err_with(|| miette!("Could not get the current directory."))?
            .join("data/configuration.toml"),
    };

    if !configuration_filepath.is_file() {
        return Err(miette!(
            "Could not find host configuration file at {}.",
            configuration_filepath.display()
        ));
    }

    Ok(configuration_filepath)
}
