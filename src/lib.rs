// Rust Timeline Library
// Exports the lane, window, geometry and reschedule engine for reuse and testing

pub mod cli;
pub mod models;
pub mod services;
pub mod utils;
