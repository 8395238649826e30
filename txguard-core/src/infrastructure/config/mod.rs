// txguard-core/src/infrastructure/config/mod.rs

pub mod settings;

pub use settings::{LogFormat, ServerSettings, Settings, load_settings};
