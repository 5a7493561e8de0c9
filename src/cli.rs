//! Command-line interface definitions for the settings checker binary.

use std::path::PathBuf;

use clap::Parser;
use flatpickr_settings::widget::PickerVariant;



/// Command-line arguments.
#[derive(Parser)]
#[command(
    name = "flatpickr-settings",
    author,
    about = "Validates the flatpickr widget settings of a host configuration file.",
    version
)]
pub struct CLIArgs {
    /// This is the path to the host configuration file to use.
    /// If unspecified, this defaults to `$FLATPICKR_SETTINGS_CONFIGURATION`
    /// or `./data/configuration.toml`.
    #[arg(
        short = 'c',
        long = "configuration-file-path",
        help = "Path to the host configuration file to use. Defaults to ./data/configuration.toml"
    )]
    pub configuration_file_path: Option<PathBuf>,

    #[arg(
        short = 'w',
        long = "widget",
        value_enum,
        help = "Also print the picker configuration for this widget variant."
    )]
    pub widget: Option<PickerVariant>,
}
