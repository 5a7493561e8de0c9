//! Turns validated settings into what a rendered widget needs: the
//! configuration object handed to flatpickr, and the stylesheets and
//! scripts a page has to include.
//!
//! This is the only place reserved options get a value.

use std::fmt::{self, Display, Formatter};

use clap::ValueEnum;
use serde_json::{Map, Number, Value as JsonValue};
use toml::Value as TomlValue;
use tracing::warn;

use crate::configuration::{FlatpickrOptions, FlatpickrSettings, SettingsError};


/// The kinds of picker the widget can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum PickerVariant {
    Date,
    Time,
    #[value(name = "datetime")]
    DateTime,
}

impl PickerVariant {
    /// Format of the value submitted with the form.
    pub fn date_format(&self) -> &'static str {
        match self {
            PickerVariant::Date => "Y-m-d",
            PickerVariant::Time => "H:i:S",
            PickerVariant::DateTime => "Y-m-d H:i:S",
        }
    }

    pub fn enable_time(&self) -> bool {
        !matches!(self, PickerVariant::Date)
    }

    pub fn no_calendar(&self) -> bool {
        matches!(self, PickerVariant::Time)
    }

    /// Values of every reserved option for this variant.
    pub fn reserved_values(&self) -> [(&'static str, JsonValue); 6] {
        [
            ("mode", JsonValue::from("single")),
            ("dateFormat", JsonValue::from(self.date_format())),
            ("altInput", JsonValue::Bool(true)),
            ("wrap", JsonValue::Bool(true)),
            ("enableTime", JsonValue::Bool(self.enable_time())),
            ("noCalendar", JsonValue::Bool(self.no_calendar())),
        ]
    }
}

impl Display for PickerVariant {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PickerVariant::Date => f.write_str("date"),
            PickerVariant::Time => f.write_str("time"),
            PickerVariant::DateTime => f.write_str("datetime"),
        }
    }
}


fn toml_to_json(value: TomlValue) -> JsonValue {
    match value {
        TomlValue::String(string) => JsonValue::String(string),
        TomlValue::Integer(integer) => JsonValue::Number(integer.into()),
        TomlValue::Float(float) => match Number::from_f64(float) {
            Some(number) => JsonValue::Number(number),
            None => {
                warn!("JSON has no representation for {float}, passing null to flatpickr instead.");
                JsonValue::Null
            }
        },
        TomlValue::Boolean(flag) => JsonValue::Bool(flag),
        TomlValue::Datetime(datetime) => JsonValue::String(datetime.to_string()),
        TomlValue::Array(items) => JsonValue::Array(items.into_iter().map(toml_to_json).collect()),
        TomlValue::Table(table) => JsonValue::Object(
            table
                .into_iter()
                .map(|(key, value)| (key, toml_to_json(value)))
                .collect(),
        ),
    }
}


/// The configuration object for a flatpickr instance of the given variant:
/// the user's options plus the reserved ones forced by the widget.
pub fn picker_config(options: &FlatpickrOptions, variant: PickerVariant) -> JsonValue {
    let mut config = options
        .to_table()
        .into_iter()
        .map(|(name, value)| (name, toml_to_json(value)))
        .collect::<Map<String, JsonValue>>();

    for (name, value) in variant.reserved_values() {
        config.insert(name.to_string(), value);
    }

    JsonValue::Object(config)
}

/// [`picker_config`] serialized for embedding in a `data-` attribute.
pub fn picker_config_json(
    options: &FlatpickrOptions,
    variant: PickerVariant,
) -> Result<String, SettingsError> {
    Ok(serde_json::to_string(&picker_config(options, variant))?)
}


/// Stylesheets and scripts a page with a picker has to include, in order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MediaAssets {
    pub stylesheets: Vec<String>,
    pub scripts: Vec<String>,
}

impl MediaAssets {
    pub fn for_settings(settings: &FlatpickrSettings) -> Self {
        let cdn_url = &settings.flatpickr_cdn_url;
        let minified = if settings.debug { "" } else { ".min" };

        let mut stylesheets = vec![format!("{cdn_url}flatpickr{minified}.css")];

        if let Some(theme_stylesheet_url) = settings.theme_stylesheet_url() {
            stylesheets.push(theme_stylesheet_url);
        }


        let mut scripts = vec![format!("{cdn_url}flatpickr{minified}.js")];

        if let Some(locale) = settings.options.locale.as_deref() {
            scripts.push(format!("{cdn_url}l10n/{locale}.js"));
        }

        scripts.push(format!("{}js/django-flatpickr.js", settings.app_static_url));


        Self {
            stylesheets,
            scripts,
        }
    }
}

impl FlatpickrSettings {
    /// The theme stylesheet: `theme_url` if set, otherwise the CDN
    /// stylesheet of `theme_name`.
    pub fn theme_stylesheet_url(&self) -> Option<String> {
        if let Some(theme_url) = &self.theme_url {
            return Some(theme_url.clone());
        }

        self.theme_name
            .map(|theme| format!("{}themes/{}.css", self.flatpickr_cdn_url, theme))
    }

    pub fn media_assets(&self) -> MediaAssets {
        MediaAssets::for_settings(self)
    }
}


#[cfg(test)]
mod tests {
    use serde_json::json;
    use toml::Table;

    use super::*;
    use crate::configuration::{ThemeChoice, DEFAULT_APP_STATIC_URL, DEFAULT_FLATPICKR_CDN_URL};

    fn options(source: &str) -> FlatpickrOptions {
        FlatpickrOptions::validate(toml::from_str::<Table>(source).unwrap()).unwrap()
    }

    #[test]
    fn reserved_values_follow_the_variant() {
        let date = picker_config(&FlatpickrOptions::default(), PickerVariant::Date);
        let time = picker_config(&FlatpickrOptions::default(), PickerVariant::Time);
        let date_time = picker_config(&FlatpickrOptions::default(), PickerVariant::DateTime);

        assert_eq!(
            date,
            json!({
                "mode": "single",
                "dateFormat": "Y-m-d",
                "altInput": true,
                "wrap": true,
                "enableTime": false,
                "noCalendar": false,
            })
        );
        assert_eq!(time["enableTime"], json!(true));
        assert_eq!(time["noCalendar"], json!(true));
        assert_eq!(time["dateFormat"], json!("H:i:S"));
        assert_eq!(date_time["enableTime"], json!(true));
        assert_eq!(date_time["noCalendar"], json!(false));
    }

    #[test]
    fn user_options_are_carried_into_the_config() {
        let config = picker_config(
            &options(
                r#"
                minuteIncrement = 15
                minDate = 2024-01-01
                customFutureOption = { nested = [1.5, "a"] }
                "#,
            ),
            PickerVariant::DateTime,
        );

        assert_eq!(config["minuteIncrement"], json!(15));
        assert_eq!(config["minDate"], json!("2024-01-01"));
        assert_eq!(config["customFutureOption"], json!({ "nested": [1.5, "a"] }));
        assert_eq!(config["mode"], json!("single"));
    }

    #[test]
    fn non_finite_floats_become_null() {
        let config = picker_config(
            &options(
                r#"
                customRatio = nan
                customLimit = inf
                customScale = 0.5
                "#,
            ),
            PickerVariant::Date,
        );

        assert_eq!(config["customRatio"], JsonValue::Null);
        assert_eq!(config["customLimit"], JsonValue::Null);
        assert_eq!(config["customScale"], json!(0.5));
    }

    #[test]
    fn config_serializes_to_a_json_object() {
        let serialized = picker_config_json(&options("weekNumbers = true"), PickerVariant::Date).unwrap();
        let parsed: JsonValue = serde_json::from_str(&serialized).unwrap();

        assert_eq!(parsed["weekNumbers"], json!(true));
    }

    #[test]
    fn default_media_assets_are_minified() {
        let settings = FlatpickrSettings {
            debug: false,
            ..FlatpickrSettings::default()
        };

        assert_eq!(
            settings.media_assets(),
            MediaAssets {
                stylesheets: vec![format!("{DEFAULT_FLATPICKR_CDN_URL}flatpickr.min.css")],
                scripts: vec![
                    format!("{DEFAULT_FLATPICKR_CDN_URL}flatpickr.min.js"),
                    format!("{DEFAULT_APP_STATIC_URL}js/django-flatpickr.js"),
                ],
            }
        );
    }

    #[test]
    fn debug_theme_and_locale_change_the_assets() {
        let settings = FlatpickrSettings {
            theme_name: Some(ThemeChoice::MaterialBlue),
            flatpickr_cdn_url: "/cdn/".to_string(),
            options: options("locale = \"de\""),
            ..FlatpickrSettings::default()
        };

        let assets = settings.media_assets();

        assert_eq!(
            assets.stylesheets,
            vec!["/cdn/flatpickr.css", "/cdn/themes/material_blue.css"]
        );
        assert_eq!(assets.scripts[0], "/cdn/flatpickr.js");
        assert_eq!(assets.scripts[1], "/cdn/l10n/de.js");
    }

    #[test]
    fn theme_url_takes_precedence() {
        let settings = FlatpickrSettings {
            theme_name: Some(ThemeChoice::Dark),
            theme_url: Some("/static/custom-theme.css".to_string()),
            ..FlatpickrSettings::default()
        };

        assert_eq!(
            settings.theme_stylesheet_url().as_deref(),
            Some("/static/custom-theme.css")
        );
    }
}
