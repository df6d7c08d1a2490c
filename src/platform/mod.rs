// PicSeek - platform/mod.rs
//
// Platform integration: config/data directory resolution and config.toml.

pub mod config;
