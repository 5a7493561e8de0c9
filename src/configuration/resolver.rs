//! Lazily built, process-wide widget settings.
//!
//! # Lifecycle
//! A [`SettingsResolver`] starts out empty. The first call to
//! [`get_settings`][SettingsResolver::get_settings] reads the override block from its
//! [`OverrideSource`], validates it and stores the outcome. Every later call
//! hands out the same [`Arc`] (or the same error) without touching the source
//! again. The stored outcome is never replaced or dropped before the resolver itself.
//!
//! Construction runs under `initialization_lock`, and the cache is checked
//! again once the lock is held, so concurrent first callers build the settings
//! at most once. Validation is deterministic, so a rejected override block is
//! cached like a successful one and never re-validated.

use std::sync::{Arc, OnceLock};

use parking_lot::{const_mutex, Mutex};
use toml::Table;
use tracing::{debug, error, info};

use super::error::SettingsError;
use super::host::HostConfiguration;
use super::structure::FlatpickrSettings;


/// Where the override block for the widget settings comes from.
pub trait OverrideSource {
    /// Returns the override block, or an empty table if the host has none.
    /// Must not modify any host state.
    fn load_overrides(&self) -> Table;

    /// The host's own debug flag, if it has one.
    fn host_debug(&self) -> Option<bool>;
}

impl<S> OverrideSource for &S
where
    S: OverrideSource + ?Sized,
{
    fn load_overrides(&self) -> Table {
        (**self).load_overrides()
    }

    fn host_debug(&self) -> Option<bool> {
        (**self).host_debug()
    }
}


pub struct SettingsResolver<S> {
    source: S,

    outcome: OnceLock<Result<Arc<FlatpickrSettings>, SettingsError>>,

    initialization_lock: Mutex<()>,
}

impl<S> SettingsResolver<S>
where
    S: OverrideSource,
{
    pub const fn new(source: S) -> Self {
        Self {
            source,
            outcome: OnceLock::new(),
            initialization_lock: const_mutex(()),
        }
    }

    /// Returns the settings, building them on the first call.
    ///
    /// If the first construction failed, every call returns that same error.
    pub fn get_settings(&self) -> Result<Arc<FlatpickrSettings>, SettingsError> {
        if let Some(outcome) = self.outcome.get() {
            return outcome.clone();
        }

        let _initialization_guard = self.initialization_lock.lock();

        // Someone else may have finished while we were waiting for the lock.
        if let Some(outcome) = self.outcome.get() {
            return outcome.clone();
        }


        debug!("Building flatpickr settings.");

        let outcome = FlatpickrSettings::from_overrides(
            self.source.load_overrides(),
            self.source.host_debug(),
        )
        .map(Arc::new);

        match &outcome {
            Ok(settings) => info!(
                "Flatpickr settings ready (theme: {}, debug: {}).",
                settings
                    .theme_name
                    .map(|theme| theme.as_str())
                    .unwrap_or("none"),
                settings.debug
            ),
            Err(construction_error) => {
                error!("Invalid flatpickr settings: {construction_error}")
            }
        }


        // We hold the lock and saw the cell empty, so this can't already be set.
        let _ = self.outcome.set(outcome.clone());

        outcome
    }

    /// Whether construction has already run, successfully or not.
    pub fn is_initialized(&self) -> bool {
        self.outcome.get().is_some()
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}



static GLOBAL_RESOLVER: OnceLock<SettingsResolver<HostConfiguration>> = OnceLock::new();

fn global_resolver() -> &'static SettingsResolver<HostConfiguration> {
    GLOBAL_RESOLVER.get_or_init(|| SettingsResolver::new(HostConfiguration::default()))
}


/// Install the host configuration the process-wide settings are built from.
///
/// This must happen before the first call to [`get_settings`]. If the
/// process-wide resolver already exists, the configuration is handed back as `Err`.
pub fn register_host_configuration(
    host_configuration: HostConfiguration,
) -> Result<(), HostConfiguration> {
    let mut host_configuration = Some(host_configuration);

    GLOBAL_RESOLVER.get_or_init(|| {
        SettingsResolver::new(host_configuration.take().unwrap_or_default())
    });

    match host_configuration {
        None => Ok(()),
        Some(rejected) => Err(rejected),
    }
}

/// Returns the process-wide settings.
///
/// Without a registered host configuration this behaves like a host
/// with no override block and no debug flag.
pub fn get_settings() -> Result<Arc<FlatpickrSettings>, SettingsError> {
    global_resolver().get_settings()
}
