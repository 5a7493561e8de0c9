//! Everything needed to turn the host's override block into validated
//! widget settings.
//!
//! Your starting point should probably be [`get_settings`], or a
//! [`SettingsResolver`] if you don't want process-wide state.
//!
//! # Internals
//! Like the rest of the crate, settings go through an unvalidated ("unresolved")
//! and a validated ("resolved") form. The override block is first split into its
//! known keys (each type-checked on the way), then
//! [`resolve`][traits::ResolvableConfigurationWithContext::resolve]d against the
//! host's defaults. The nested `options` table is resolved by the option schema
//! in [`FlatpickrOptions::validate`], which is where reserved options are refused.

#![allow(rustdoc::private_intra_doc_links)]

mod error;
mod host;
mod resolver;
mod structure;
mod traits;
mod utilities;

pub use error::{Constraint, ConstraintViolationError, ReservedFieldError, SettingsError};
pub use host::{HostConfiguration, LoggingConfiguration};
pub use resolver::{get_settings, register_host_configuration, OverrideSource, SettingsResolver};
pub use structure::*;
pub use utilities::CONFIGURATION_PATH_ENV_VAR;
