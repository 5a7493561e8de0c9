use super::error::SettingsError;

/// A raw, user-supplied configuration block that can be checked
/// and turned into its validated form.
pub trait ResolvableConfiguration {
    type Resolved;

    /// Validate `self` and produce the `Resolved` value.
    /// Any rejected value is reported as a [`SettingsError`] naming the offending field.
    fn resolve(self) -> Result<Self::Resolved, SettingsError>;
}


/// Like [`ResolvableConfiguration`], but resolving needs values
/// that live outside the block itself (e.g. flags owned by the host).
pub trait ResolvableConfigurationWithContext {
    type Context;
    type Resolved;

    /// Validate `self` against `context` and produce the `Resolved` value.
    fn resolve(self, context: Self::Context) -> Result<Self::Resolved, SettingsError>;
}
