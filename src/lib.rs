// src/lib.rs
//! Startup configuration for the stackd multi-server backend.
//!
//! A process boots by naming its run mode (`development`, `production`, ...).
//! The [`Loader`] reads `config/<mode>.yaml`, merges it with the
//! caller-supplied [`SecretStore`] and produces an immutable [`RootConfig`]
//! for the rest of the process: server bootstrap, database client, cache
//! client. Anything that cannot be fully validated fails fast with a
//! [`ConfigError`] carrying the section and field at fault.
//!
//! Secrets and structural configuration are strictly separate inputs. The
//! document never supplies a password, and the `Display` rendering of a
//! loaded config masks every secret.
//!
//! ```no_run
//! use stackd_config::{Loader, SecretStore};
//!
//! # fn main() -> stackd_config::Result<()> {
//! let secrets = SecretStore::from_env();
//! let loader = Loader::from_env();
//! if loader.is_available("development") {
//!     let config = loader.load("development", "srv-1", &secrets)?;
//!     println!("{config}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod decode;
pub mod document;
pub mod error;
pub mod loader;
mod render;
pub mod schema;
pub mod secrets;

pub use document::{parse_document, RawDocument};
pub use error::{ConfigError, Result};
pub use loader::Loader;
pub use schema::{
    CacheConnection, DatabaseConnection, RootConfig, ServerEndpoint, ServerTag,
    DEFAULT_MAX_REQUEST_SIZE,
};
pub use secrets::SecretStore;
