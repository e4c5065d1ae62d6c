//! Chromaseed - seed-color themes as a service
//!
//! HTTP API and CLI over the `hct-theme` engine.
//! This library exposes modules for integration testing.

pub mod api;
pub mod error;
pub mod models;
pub mod server;
pub mod services;
