//! Infrastructure layer providing external service integrations.
//!
//! This module contains the HTTP adapter for the maze service together with
//! command line configuration and log output.

pub mod client;
pub mod config;
pub mod logging;

pub use client::*;
pub use config::*;
