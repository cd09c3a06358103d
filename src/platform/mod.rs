// DocuChat - platform/mod.rs
//
// Platform layer: config/data directory resolution and config.toml loading.

pub mod config;
