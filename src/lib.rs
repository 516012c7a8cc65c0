//! Colorlens
//!
//! Color analysis, naming and paint-mix recipes over HTTP and a CLI.
//! The color science lives in the `color-engine` crate; this library wires it
//! to configuration, embedded assets and the HTTP API, and exposes the modules
//! for integration testing.

pub mod api;
pub mod assets;
pub mod error;
pub mod models;
pub mod server;
pub mod services;
