//! Client library for the Weather Underground HTTP API.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - URL construction for the service's named data collections
//! - A thin HTTP client that returns the service's JSON unmodified
//!
//! It is used by `wunder-cli`, but can also be reused by other binaries or services.

pub mod client;
pub mod config;
pub mod date;
pub mod error;
pub mod feature;

pub use client::Client;
pub use config::Config;
pub use error::{Error, Result};
pub use feature::{Feature, FeatureSet};
