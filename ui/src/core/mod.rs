//! Platform-agnostic building blocks shared by the dashboard: clocks,
//! configuration, errors and display formatting.

pub mod clock;
pub mod config;
pub mod error;
pub mod format;
