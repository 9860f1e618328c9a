//! Application logic for the fibguide binary.

pub mod app;
pub mod config;
pub mod errors;
