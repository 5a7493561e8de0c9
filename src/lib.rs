//! Validated settings for flatpickr date-picker widgets in server-rendered forms.
//!
//! The host supplies a `[flatpickr]` override block; [`configuration::get_settings`]
//! layers it over the defaults, runs the picker options through the option schema
//! and caches the result for the rest of the process. [`widget`] turns those
//! settings into the picker configuration and page assets.

pub mod configuration;
pub mod widget;
