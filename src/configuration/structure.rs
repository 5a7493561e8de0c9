use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use toml::{Table, Value};
use tracing::warn;

pub use self::options::{FlatpickrOptions, BOUNDED_OPTIONS, KNOWN_OPTIONS, RESERVED_OPTIONS};
use self::options::UnresolvedFlatpickrOptions;
pub use self::theme::ThemeChoice;
use super::error::{ConstraintViolationError, SettingsError};
use super::traits::{ResolvableConfiguration, ResolvableConfigurationWithContext};

mod options;
mod theme;


/// Pinned flatpickr distribution the widget assets are loaded from.
pub const DEFAULT_FLATPICKR_CDN_URL: &str = "https://cdn.jsdelivr.net/npm/flatpickr@4.6.13/dist/";

/// Pinned location of the widget's own static assets.
pub const DEFAULT_APP_STATIC_URL: &str = "https://cdn.jsdelivr.net/gh/monim67/django-flatpickr@2.0.0/src/django_flatpickr/static/django_flatpickr/";



/// The override block exactly as the host supplied it, with each key
/// checked for its type but nothing defaulted yet.
#[derive(Debug, Default)]
pub(crate) struct UnresolvedFlatpickrSettings {
    theme_name: Option<ThemeChoice>,
    theme_url: Option<String>,
    template_name: Option<String>,
    attrs: Option<BTreeMap<String, String>>,
    options: Option<UnresolvedFlatpickrOptions>,
    flatpickr_cdn_url: Option<String>,
    app_static_url: Option<String>,
    debug: Option<bool>,
}


/// Fully validated widget settings.
///
/// Built once by the [`SettingsResolver`][crate::configuration::SettingsResolver]
/// and shared read-only for the rest of the process.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatpickrSettings {
    pub theme_name: Option<ThemeChoice>,

    /// Custom theme stylesheet, takes precedence over `theme_name`.
    pub theme_url: Option<String>,

    /// Template used to render the widget instead of the built-in one.
    pub template_name: Option<String>,

    /// Extra HTML attributes for the rendered input.
    pub attrs: BTreeMap<String, String>,

    pub options: FlatpickrOptions,

    pub flatpickr_cdn_url: String,

    pub app_static_url: String,

    pub debug: bool,
}


/// Values the override block falls back to that belong to the host.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct HostDefaults {
    pub(crate) debug: Option<bool>,
}


fn take_setting<T>(
    overrides: &mut Table,
    field: &'static str,
    expected: &'static str,
) -> Result<Option<T>, ConstraintViolationError>
where
    T: DeserializeOwned,
{
    let Some(value) = overrides.remove(field) else {
        return Ok(None);
    };

    let received = value.to_string();

    value
        .try_into::<T>()
        .map(Some)
        .map_err(|_| ConstraintViolationError::wrong_type(field, received, expected))
}


impl UnresolvedFlatpickrSettings {
    /// Pick the recognized settings out of a host override block.
    pub(crate) fn from_overrides(mut overrides: Table) -> Result<Self, SettingsError> {
        let theme_name = take_setting(
            &mut overrides,
            "theme_name",
            "one of dark, material_blue, material_green, material_red, \
             material_orange, airbnb, confetti",
        )?;
        let theme_url = take_setting(&mut overrides, "theme_url", "a string")?;
        let template_name = take_setting(&mut overrides, "template_name", "a string")?;
        let attrs = take_setting(&mut overrides, "attrs", "a table of strings")?;
        let flatpickr_cdn_url = take_setting(&mut overrides, "flatpickr_cdn_url", "a string")?;
        let app_static_url = take_setting(&mut overrides, "app_static_url", "a string")?;
        let debug = take_setting(&mut overrides, "debug", "a boolean")?;

        let options = match overrides.remove("options") {
            None => None,
            Some(Value::Table(options)) => Some(UnresolvedFlatpickrOptions(options)),
            Some(other) => {
                return Err(
                    ConstraintViolationError::wrong_type("options", other, "a table").into(),
                )
            }
        };


        for ignored_key in overrides.keys() {
            warn!("Ignoring unrecognized flatpickr setting {ignored_key}.");
        }

        Ok(Self {
            theme_name,
            theme_url,
            template_name,
            attrs,
            options,
            flatpickr_cdn_url,
            app_static_url,
            debug,
        })
    }
}

impl ResolvableConfigurationWithContext for UnresolvedFlatpickrSettings {
    type Resolved = FlatpickrSettings;
    type Context = HostDefaults;

    fn resolve(self, context: Self::Context) -> Result<Self::Resolved, SettingsError> {
        let options = match self.options {
            Some(options) => options.resolve()?,
            None => FlatpickrOptions::default(),
        };


        Ok(FlatpickrSettings {
            theme_name: self.theme_name,
            theme_url: self.theme_url,
            template_name: self.template_name,
            attrs: self.attrs.unwrap_or_default(),
            options,
            flatpickr_cdn_url: self
                .flatpickr_cdn_url
                .unwrap_or_else(|| DEFAULT_FLATPICKR_CDN_URL.to_string()),
            app_static_url: self
                .app_static_url
                .unwrap_or_else(|| DEFAULT_APP_STATIC_URL.to_string()),
            debug: self.debug.or(context.debug).unwrap_or(true),
        })
    }
}


impl FlatpickrSettings {
    /// Build settings from a raw override block.
    ///
    /// `host_debug` is the host's own debug flag; it is used when the block
    /// does not set `debug` itself, and `true` is assumed if neither does.
    pub fn from_overrides(overrides: Table, host_debug: Option<bool>) -> Result<Self, SettingsError> {
        UnresolvedFlatpickrSettings::from_overrides(overrides)?
            .resolve(HostDefaults { debug: host_debug })
    }
}

impl Default for FlatpickrSettings {
    fn default() -> Self {
        Self {
            theme_name: None,
            theme_url: None,
            template_name: None,
            attrs: BTreeMap::new(),
            options: FlatpickrOptions::default(),
            flatpickr_cdn_url: DEFAULT_FLATPICKR_CDN_URL.to_string(),
            app_static_url: DEFAULT_APP_STATIC_URL.to_string(),
            debug: true,
        }
    }
}
