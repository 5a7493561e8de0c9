//! The picker option schema.
//!
//! Known options are stored in typed fields of [`FlatpickrOptions`], anything
//! flatpickr understands that is not modelled here is kept untouched in
//! [`FlatpickrOptions::extra`]. Options in [`RESERVED_OPTIONS`] are driven by
//! the widget and are rejected whenever they show up in user input.

use std::collections::BTreeMap;

use toml::{Table, Value};
use tracing::debug;

use crate::configuration::{
    error::{ConstraintViolationError, ReservedFieldError, SettingsError},
    traits::ResolvableConfiguration,
};


/// Options owned by the widget, with the reason they can't be overridden.
pub const RESERVED_OPTIONS: [(&str, &str); 6] = [
    (
        "mode",
        "always set to static single-date selection (flatpickr mode \"single\"). \
         Use the range picker widget to select date ranges.",
    ),
    (
        "dateFormat",
        "always set to the ISO format of the widget (Y-m-d for dates). \
         Use altFormat to change the format shown to users.",
    ),
    ("altInput", "always set to true."),
    ("wrap", "always set to true."),
    ("enableTime", "set based on the widget used."),
    ("noCalendar", "set based on the widget used."),
];

/// Integer options and their inclusive bounds.
pub const BOUNDED_OPTIONS: [(&str, i64, i64); 5] = [
    ("defaultHour", 0, 23),
    ("defaultMinute", 0, 59),
    ("hourIncrement", 1, 12),
    ("minuteIncrement", 0, 59),
    ("showMonths", 1, 12),
];

/// Every option with a typed field in [`FlatpickrOptions`].
pub const KNOWN_OPTIONS: [&str; 28] = [
    "allowInput",
    "allowInvalidPreload",
    "altFormat",
    "altInputClass",
    "ariaDateFormat",
    "clickOpens",
    "defaultDate",
    "defaultHour",
    "defaultMinute",
    "disable",
    "disableMobile",
    "enable",
    "enableSeconds",
    "hourIncrement",
    "inline",
    "locale",
    "maxDate",
    "minDate",
    "minuteIncrement",
    "monthSelectorType",
    "nextArrow",
    "position",
    "prevArrow",
    "shorthandCurrentMonth",
    "showMonths",
    "static",
    "time_24hr",
    "weekNumbers",
];


/// Validated flatpickr options.
///
/// Every field is optional; `None` leaves the decision to flatpickr.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlatpickrOptions {
    pub allow_input: Option<bool>,
    pub allow_invalid_preload: Option<bool>,
    pub alt_format: Option<String>,
    pub alt_input_class: Option<String>,
    pub aria_date_format: Option<String>,
    pub click_opens: Option<bool>,
    pub default_date: Option<String>,
    pub default_hour: Option<u8>,
    pub default_minute: Option<u8>,
    pub disable: Option<Vec<String>>,
    pub disable_mobile: Option<bool>,
    pub enable: Option<Vec<String>>,
    pub enable_seconds: Option<bool>,
    pub hour_increment: Option<u8>,
    pub inline: Option<bool>,
    pub locale: Option<String>,
    pub max_date: Option<String>,
    pub min_date: Option<String>,
    pub minute_increment: Option<u8>,
    pub month_selector_type: Option<String>,
    pub next_arrow: Option<String>,
    pub position: Option<String>,
    pub prev_arrow: Option<String>,
    pub shorthand_current_month: Option<bool>,
    pub show_months: Option<u8>,
    /// `static` in flatpickr.
    pub static_position: Option<bool>,
    pub time_24hr: Option<bool>,
    pub week_numbers: Option<bool>,

    /// Options not modelled above, passed through as given.
    /// Only filled by validation, so it never holds a reserved name.
    extra: BTreeMap<String, Value>,
}


/// A raw `options` table as found in the override block.
#[derive(Debug, Clone, Default)]
pub(crate) struct UnresolvedFlatpickrOptions(pub(crate) Table);

impl ResolvableConfiguration for UnresolvedFlatpickrOptions {
    type Resolved = FlatpickrOptions;

    fn resolve(self) -> Result<Self::Resolved, SettingsError> {
        let input = self.0;

        // Reserved names are rejected before any other option is looked at.
        if let Some((field, reason)) = input.keys().find_map(|name| {
            FlatpickrOptions::reserved_reason(name).map(|reason| (name, reason))
        }) {
            return Err(ReservedFieldError {
                field: field.clone(),
                reason,
            }
            .into());
        }


        let mut options = FlatpickrOptions::default();

        for (name, value) in input {
            let name = name.as_str();

            match name {
                "allowInput" => options.allow_input = Some(flag(name, value)?),
                "allowInvalidPreload" => options.allow_invalid_preload = Some(flag(name, value)?),
                "altFormat" => options.alt_format = Some(text(name, value)?),
                "altInputClass" => options.alt_input_class = Some(text(name, value)?),
                "ariaDateFormat" => options.aria_date_format = Some(text(name, value)?),
                "clickOpens" => options.click_opens = Some(flag(name, value)?),
                "defaultDate" => options.default_date = Some(date(name, value)?),
                "defaultHour" => options.default_hour = Some(bounded(name, value)?),
                "defaultMinute" => options.default_minute = Some(bounded(name, value)?),
                "disable" => options.disable = Some(date_list(name, value)?),
                "disableMobile" => options.disable_mobile = Some(flag(name, value)?),
                "enable" => options.enable = Some(date_list(name, value)?),
                "enableSeconds" => options.enable_seconds = Some(flag(name, value)?),
                "hourIncrement" => options.hour_increment = Some(bounded(name, value)?),
                "inline" => options.inline = Some(flag(name, value)?),
                "locale" => options.locale = Some(text(name, value)?),
                "maxDate" => options.max_date = Some(date(name, value)?),
                "minDate" => options.min_date = Some(date(name, value)?),
                "minuteIncrement" => options.minute_increment = Some(bounded(name, value)?),
                "monthSelectorType" => options.month_selector_type = Some(text(name, value)?),
                "nextArrow" => options.next_arrow = Some(text(name, value)?),
                "position" => options.position = Some(text(name, value)?),
                "prevArrow" => options.prev_arrow = Some(text(name, value)?),
                "shorthandCurrentMonth" => {
                    options.shorthand_current_month = Some(flag(name, value)?)
                }
                "showMonths" => options.show_months = Some(bounded(name, value)?),
                "static" => options.static_position = Some(flag(name, value)?),
                "time_24hr" => options.time_24hr = Some(flag(name, value)?),
                "weekNumbers" => options.week_numbers = Some(flag(name, value)?),
                _ => {
                    debug!("Passing through unrecognized flatpickr option {name}.");
                    options.extra.insert(name.to_string(), value);
                }
            }
        }

        Ok(options)
    }
}


fn flag(name: &str, value: Value) -> Result<bool, ConstraintViolationError> {
    match value {
        Value::Boolean(flag) => Ok(flag),
        other => Err(ConstraintViolationError::wrong_type(name, other, "a boolean")),
    }
}

fn text(name: &str, value: Value) -> Result<String, ConstraintViolationError> {
    match value {
        Value::String(text) => Ok(text),
        other => Err(ConstraintViolationError::wrong_type(name, other, "a string")),
    }
}

/// Dates may be given as strings or as native TOML dates.
fn date(name: &str, value: Value) -> Result<String, ConstraintViolationError> {
    match value {
        Value::String(date) => Ok(date),
        Value::Datetime(date) => Ok(date.to_string()),
        other => Err(ConstraintViolationError::wrong_type(
            name,
            other,
            "a date string",
        )),
    }
}

fn date_list(name: &str, value: Value) -> Result<Vec<String>, ConstraintViolationError> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .map(|item| date(name, item))
            .collect(),
        other => Err(ConstraintViolationError::wrong_type(
            name,
            other,
            "an array of date strings",
        )),
    }
}

fn bounded(name: &str, value: Value) -> Result<u8, ConstraintViolationError> {
    let (min, max) = FlatpickrOptions::bounds(name).unwrap_or((i64::MIN, i64::MAX));

    let integer = match value {
        Value::Integer(integer) => integer,
        other => {
            return Err(ConstraintViolationError::wrong_type(
                name,
                other,
                "an integer",
            ))
        }
    };

    if !(min..=max).contains(&integer) {
        return Err(ConstraintViolationError::out_of_range(
            name, integer, min, max,
        ));
    }

    u8::try_from(integer)
        .map_err(|_| ConstraintViolationError::out_of_range(name, integer, min, max))
}


impl FlatpickrOptions {
    /// Validate a raw options table.
    ///
    /// Fails on the first reserved option or invalid value it finds.
    /// Unknown options are accepted and kept in [`extra`][Self::extra].
    pub fn validate(input: Table) -> Result<Self, SettingsError> {
        UnresolvedFlatpickrOptions(input).resolve()
    }

    /// Returns why `name` is reserved, or `None` if it may be set freely.
    pub fn reserved_reason(name: &str) -> Option<&'static str> {
        RESERVED_OPTIONS
            .iter()
            .find(|(reserved_name, _)| *reserved_name == name)
            .map(|(_, reason)| *reason)
    }

    /// Inclusive bounds of an integer option.
    pub fn bounds(name: &str) -> Option<(i64, i64)> {
        BOUNDED_OPTIONS
            .iter()
            .find(|(bounded_name, _, _)| *bounded_name == name)
            .map(|(_, min, max)| (*min, *max))
    }

    /// Look up an option by its flatpickr name, known or not.
    pub fn get(&self, name: &str) -> Option<Value> {
        fn string(value: &Option<String>) -> Option<Value> {
            value.clone().map(Value::String)
        }

        fn integer(value: &Option<u8>) -> Option<Value> {
            value.map(|integer| Value::Integer(integer.into()))
        }

        fn list(value: &Option<Vec<String>>) -> Option<Value> {
            value
                .as_ref()
                .map(|items| Value::Array(items.iter().cloned().map(Value::String).collect()))
        }

        match name {
            "allowInput" => self.allow_input.map(Value::Boolean),
            "allowInvalidPreload" => self.allow_invalid_preload.map(Value::Boolean),
            "altFormat" => string(&self.alt_format),
            "altInputClass" => string(&self.alt_input_class),
            "ariaDateFormat" => string(&self.aria_date_format),
            "clickOpens" => self.click_opens.map(Value::Boolean),
            "defaultDate" => string(&self.default_date),
            "defaultHour" => integer(&self.default_hour),
            "defaultMinute" => integer(&self.default_minute),
            "disable" => list(&self.disable),
            "disableMobile" => self.disable_mobile.map(Value::Boolean),
            "enable" => list(&self.enable),
            "enableSeconds" => self.enable_seconds.map(Value::Boolean),
            "hourIncrement" => integer(&self.hour_increment),
            "inline" => self.inline.map(Value::Boolean),
            "locale" => string(&self.locale),
            "maxDate" => string(&self.max_date),
            "minDate" => string(&self.min_date),
            "minuteIncrement" => integer(&self.minute_increment),
            "monthSelectorType" => string(&self.month_selector_type),
            "nextArrow" => string(&self.next_arrow),
            "position" => string(&self.position),
            "prevArrow" => string(&self.prev_arrow),
            "shorthandCurrentMonth" => self.shorthand_current_month.map(Value::Boolean),
            "showMonths" => integer(&self.show_months),
            "static" => self.static_position.map(Value::Boolean),
            "time_24hr" => self.time_24hr.map(Value::Boolean),
            "weekNumbers" => self.week_numbers.map(Value::Boolean),
            _ => self.extra.get(name).cloned(),
        }
    }

    /// Options not modelled by a typed field, exactly as they were given.
    pub fn extra(&self) -> &BTreeMap<String, Value> {
        &self.extra
    }

    /// All options that are set, known and passed-through alike.
    pub fn to_table(&self) -> Table {
        let mut table = Table::new();

        for name in KNOWN_OPTIONS {
            if let Some(value) = self.get(name) {
                table.insert(name.to_string(), value);
            }
        }

        for (name, value) in &self.extra {
            table.insert(name.clone(), value.clone());
        }

        table
    }

    pub fn is_empty(&self) -> bool {
        self.to_table().is_empty()
    }
}
