//! Android build-configuration loading for DevDeck
//!
//! This crate turns the declarative Android build document into a validated
//! [`BuildConfiguration`] for the host build tool:
//! - document parsing (TOML with the host tool's camelCase key paths)
//! - schema validation (identifier patterns, SDK ordering, plugin rules)
//! - signing-profile reference resolution
//!
//! Compilation, resource packaging, and artifact signing are owned by the
//! host build tool and are out of scope here.
//!
//! # Example
//!
//! ```rust,ignore
//! use devdeck_android::ConfigLoader;
//!
//! let loader = ConfigLoader::new();
//! let config = loader.load_path(Path::new("app/build.toml"))?;
//! println!("building {} for API {}", config.application_id, config.target_sdk);
//! ```

pub mod config;
pub mod error;
pub mod signing;

pub use config::{BuildConfiguration, BuildType, ConfigLoader, Document, HostContext, JavaVersion};
pub use error::{ConfigError, Result};
pub use signing::SigningProfiles;
