//! Environment profiles and static configuration for the Barista frontend
//! clients.
//!
//! Each process runs against exactly one [`EnvironmentConfig`] variant,
//! selected by [`Profile`] at startup and passed explicitly into the HTTP
//! and auth clients that consume it:
//!
//! ```
//! use barista_env::{EnvironmentConfig, Profile};
//!
//! let config = EnvironmentConfig::for_profile(Profile::Development);
//! config.validate().unwrap();
//! assert_eq!(config.api_endpoint("drinks"), "http://127.0.0.1:5000/drinks");
//! ```

mod config;
mod error;
mod profile;

pub use config::{Auth0Config, EnvironmentConfig};
pub use error::ConfigError;
pub use profile::Profile;
