//! Exercises the process-wide resolver. Kept in its own test binary
//! (and a single test) since the registered host can only be set once.

use std::sync::Arc;
use std::thread;

use flatpickr_settings::configuration::{
    get_settings, register_host_configuration, HostConfiguration, ThemeChoice,
};


#[test]
fn registered_host_is_resolved_once_for_all_threads() {
    let host_configuration = HostConfiguration::from_toml_str(
        r#"
        debug = false

        [flatpickr]
        theme_name = "confetti"
        attrs = { class = "date-input" }
        "#,
    )
    .unwrap();

    register_host_configuration(host_configuration).unwrap();


    let results = thread::scope(|scope| {
        let handles = (0..4)
            .map(|_| scope.spawn(|| get_settings().unwrap()))
            .collect::<Vec<_>>();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect::<Vec<_>>()
    });

    assert!(results.iter().all(|settings| Arc::ptr_eq(settings, &results[0])));
    assert_eq!(results[0].theme_name, Some(ThemeChoice::Confetti));
    assert_eq!(results[0].attrs.get("class").map(String::as_str), Some("date-input"));
    assert!(!results[0].debug);


    let late_registration = register_host_configuration(HostConfiguration::default());
    assert_eq!(late_registration, Err(HostConfiguration::default()));
}
