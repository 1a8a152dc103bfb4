//! Configuration loading and schema definitions
//!
//! The raw [`Document`] mirrors the declarative build document; the loader
//! turns it into a validated [`BuildConfiguration`].

mod document;
mod loader;
mod schema;

pub use document::*;
pub use loader::{ConfigLoader, HostContext};
pub use schema::*;
