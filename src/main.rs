use clap::Parser;
use flatpickr_settings::{
    configuration::{get_settings, register_host_configuration, HostConfiguration},
    widget::picker_config_json,
};
use miette::{miette, Context, Result};
use tracing::info;

use crate::{cli::CLIArgs, logging::initialize_tracing};

mod cli;
mod logging;


fn main() -> Result<()> {
    let cli_args = CLIArgs::parse();

    // Load host configuration.
    let host_configuration = match cli_args.configuration_file_path.as_ref() {
        Some(path) => {
            println!("Loading host configuration: {}", path.display());
            HostConfiguration::load_from_path(path)
        }
        None => {
            println!("Loading host configuration at default path.");
            HostConfiguration::load_from_default_path()
        }
    }
    .wrap_err("Failed to load host configuration file.")?;


    let logging_raii_guard = initialize_tracing(
        host_configuration.logging.console_output_level_filter(),
        host_configuration.logging.log_file_output_level_filter(),
        host_configuration.logging.log_file_output_directory.as_deref(),
        "flatpickr-settings.log",
    )
    .wrap_err("Failed to initialize tracing.")?;

    info!("Tracing initialized.");


    register_host_configuration(host_configuration)
        .map_err(|_| miette!("Host configuration was registered twice."))?;

    // Resolve eagerly so misconfiguration surfaces here and not at render time.
    let settings = get_settings().wrap_err("Invalid flatpickr settings.")?;


    println!("theme_name: {}", settings.theme_name.map(|theme| theme.as_str()).unwrap_or("none"));
    println!("theme_url: {}", settings.theme_url.as_deref().unwrap_or("none"));
    println!("template_name: {}", settings.template_name.as_deref().unwrap_or("none"));
    println!("attrs: {:?}", settings.attrs);
    println!("options: {}", settings.options.to_table());
    println!("flatpickr_cdn_url: {}", settings.flatpickr_cdn_url);
    println!("app_static_url: {}", settings.app_static_url);
    println!("debug: {}", settings.debug);

    let media_assets = settings.media_assets();
    for stylesheet in &media_assets.stylesheets {
        println!("stylesheet: {stylesheet}");
    }
    for script in &media_assets.scripts {
        println!("script: {script}");
    }


    if let Some(variant) = cli_args.widget {
        let picker_configuration = picker_config_json(&settings.options, variant)
            .wrap_err_with(|| miette!("Failed to build the {variant} picker configuration."))?;

        println!("{variant} picker configuration:\n{picker_configuration}");
    }


    drop(logging_raii_guard);
    Ok(())
}
