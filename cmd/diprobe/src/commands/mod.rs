//! CLI commands module.

mod preferences;

pub use preferences::PreferencesCommand;
