// Service module exports
// Layout pipeline stages plus JSON/TOML persistence for the CLI

pub mod geometry;
pub mod import;
pub mod lanes;
pub mod reschedule;
pub mod settings;
pub mod timeline;
pub mod window;
