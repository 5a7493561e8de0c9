use std::sync::Arc;

use flatpickr_settings::configuration::{
    Constraint, FlatpickrOptions, HostConfiguration, SettingsError, SettingsResolver, ThemeChoice,
    DEFAULT_FLATPICKR_CDN_URL, RESERVED_OPTIONS,
};
use flatpickr_settings::widget::{picker_config, PickerVariant};
use toml::{Table, Value};


fn resolver(host_configuration: &str) -> SettingsResolver<HostConfiguration> {
    SettingsResolver::new(HostConfiguration::from_toml_str(host_configuration).unwrap())
}


#[test]
fn no_override_block_gives_defaults() {
    let settings = resolver("").get_settings().unwrap();

    assert_eq!(settings.theme_name, None);
    assert!(settings.attrs.is_empty());
    assert_eq!(settings.flatpickr_cdn_url, DEFAULT_FLATPICKR_CDN_URL);
    assert_eq!(settings.options, FlatpickrOptions::default());
    assert!(settings.debug);
}

#[test]
fn host_debug_flag_is_inherited() {
    let settings = resolver("debug = false").get_settings().unwrap();

    assert!(!settings.debug);
}

#[test]
fn theme_and_minute_increment_are_applied() {
    let settings = resolver(
        r#"
        [flatpickr]
        theme_name = "airbnb"
        options = { minuteIncrement = 30 }
        "#,
    )
    .get_settings()
    .unwrap();

    assert_eq!(settings.theme_name, Some(ThemeChoice::Airbnb));
    assert_eq!(settings.options.minute_increment, Some(30));
    assert_eq!(
        settings.options.get("minuteIncrement"),
        Some(Value::Integer(30))
    );
}

#[test]
fn reserved_mode_fails_settings_construction() {
    let error = resolver(
        r#"
        [flatpickr.options]
        mode = "range"
        "#,
    )
    .get_settings()
    .unwrap_err();

    let SettingsError::ReservedField(reserved) = error else {
        panic!("expected a reserved field error");
    };

    assert_eq!(reserved.field, "mode");
    assert!(reserved.to_string().contains("mode"));
}

#[test]
fn forced_values_are_still_rejected() {
    let forced = PickerVariant::Date.reserved_values();
    assert_eq!(forced.len(), RESERVED_OPTIONS.len());

    for (name, forced_value) in forced {
        let value: Value = serde_json::from_value(forced_value).unwrap();
        let mut options = Table::new();
        options.insert(name.to_string(), value);

        let error = FlatpickrOptions::validate(options).unwrap_err();

        assert_eq!(error.field(), Some(name));
        assert!(matches!(error, SettingsError::ReservedField(_)));
    }
}

#[test]
fn show_months_out_of_range_is_a_constraint_violation() {
    let error = resolver(
        r#"
        [flatpickr.options]
        showMonths = 13
        "#,
    )
    .get_settings()
    .unwrap_err();

    let SettingsError::ConstraintViolation(violation) = error else {
        panic!("expected a constraint violation");
    };

    assert_eq!(violation.field, "showMonths");
    assert_eq!(violation.constraint, Constraint::Range { min: 1, max: 12 });
    assert!(violation.to_string().contains("12"));
}

#[test]
fn unknown_options_survive_into_the_picker_config() {
    let resolver = resolver(
        r#"
        [flatpickr.options]
        customFutureOption = "x"
        "#,
    );

    let settings = resolver.get_settings().unwrap();

    assert_eq!(
        settings.options.extra().get("customFutureOption"),
        Some(&Value::String("x".to_string()))
    );
    assert_eq!(
        picker_config(&settings.options, PickerVariant::Time)["customFutureOption"],
        serde_json::json!("x")
    );
}

#[test]
fn repeated_access_returns_the_same_instance() {
    let resolver = resolver("[flatpickr]\ntheme_name = \"dark\"");

    let first = resolver.get_settings().unwrap();
    let second = resolver.get_settings().unwrap();

    assert!(Arc::ptr_eq(&first, &second));
}
