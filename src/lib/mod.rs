//! Shared library modules providing error types, command builders, path
//! helpers, and telemetry initialization.

pub mod command;
pub mod errors;
pub mod paths;
pub mod telemetry;
