// Library exports for the Garmin Connect CLI
// This allows testing of internal modules

pub mod aggregate;
pub mod api;
pub mod commands;
pub mod config;
pub mod models;
pub mod normalize;
pub mod output;
