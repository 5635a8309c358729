// src/decode.rs
//! Section decoders: raw document values in, typed configuration out.
//!
//! Each decoder validates one section independently and fails fast with the
//! first error it meets. Secrets are a separate input: no decoder ever reads
//! a password out of the document, even when the document carries a
//! password-shaped key.

use tracing::warn;

use crate::document::{RawDocument, Section};
use crate::error::{ConfigError, Result};
use crate::schema::{
    CacheConnection, DatabaseConnection, RootConfig, ServerEndpoint, DEFAULT_MAX_REQUEST_SIZE,
};
use crate::secrets::{self, SecretStore};

const ROOT_KEYS: &[&str] = &[
    "apiServer",
    "insightsServer",
    "webServer",
    "maxRequestSize",
    "database",
    "cache",
    "redis",
];

/// Decode one server section. `label` names the section in error messages
/// only; it carries no identity.
///
/// All four fields are required: absence of the whole section is a decision
/// for the caller, partial presence is an error here.
pub fn server_endpoint(value: &RawDocument, label: &str) -> Result<ServerEndpoint> {
    let section = Section::new(value, label, "root")?;
    let port = section.require_port("port")?;
    let public_host = section.require_str("publicHost")?;
    let public_port = section.require_port("publicPort")?;
    let public_scheme = section.require_str("publicScheme")?;
    if public_scheme != "http" && public_scheme != "https" {
        return Err(ConfigError::type_mismatch(
            "publicScheme",
            label,
            "\"http\" or \"https\"",
            public_scheme,
        ));
    }
    Ok(ServerEndpoint {
        port,
        public_host,
        public_port,
        public_scheme,
    })
}

/// Decode the database section.
///
/// The password comes exclusively from the secret store, and its presence is
/// asserted before any document field is examined: a malformed section with a
/// missing secret reports the missing secret.
pub fn database_connection(value: &RawDocument, store: &SecretStore) -> Result<DatabaseConnection> {
    let password = store
        .get(secrets::DATABASE_PASSWORD)
        .cloned()
        .ok_or_else(|| ConfigError::MissingSecret(secrets::DATABASE_PASSWORD.to_string()))?;

    let section = Section::new(value, "database", "root")?;
    if section.get("password").is_some() {
        warn!("ignoring 'password' key in the database section; passwords come from the secret store");
    }
    Ok(DatabaseConnection {
        host: section.require_str("host")?,
        port: section.require_port("port")?,
        name: section.require_str("name")?,
        user: section.require_str("user")?,
        password,
        require_ssl: section.bool_or("requireSsl", false)?,
        is_unix_socket: section.bool_or("isUnixSocket", false)?,
    })
}

/// Decode the cache section.
///
/// Unlike the database, a missing cache secret is not fatal: the connection
/// simply stays unauthenticated.
pub fn cache_connection(
    value: &RawDocument,
    store: &SecretStore,
    label: &str,
) -> Result<CacheConnection> {
    let section = Section::new(value, label, "root")?;
    if section.get("password").is_some() {
        warn!(
            section = section.label(),
            "ignoring 'password' key in the cache section; passwords come from the secret store"
        );
    }
    Ok(CacheConnection {
        enabled: section.bool_or("enabled", false)?,
        host: section.require_str("host")?,
        port: section.require_port("port")?,
        user: section.opt_str("user")?,
        password: store.get(secrets::CACHE_PASSWORD).cloned(),
    })
}

impl RootConfig {
    /// Decode a whole document into a validated configuration.
    ///
    /// `apiServer` is the only top-level key whose absence is fatal. All
    /// other sections decode only when present; their failures propagate
    /// unchanged.
    pub fn from_document(
        run_mode: &str,
        server_id: &str,
        store: &SecretStore,
        document: &RawDocument,
    ) -> Result<Self> {
        let root = Section::new(document, "root", "document")?;
        for key in root.keys() {
            if !ROOT_KEYS.contains(&key) {
                warn!(key, "ignoring unrecognized top-level configuration key");
            }
        }

        let api_value = root
            .get("apiServer")
            .ok_or_else(|| ConfigError::missing_field("apiServer", "root"))?;
        let api_server = server_endpoint(api_value, "apiServer")?;
        let insights_server = root
            .get("insightsServer")
            .map(|value| server_endpoint(value, "insightsServer"))
            .transpose()?;
        let web_server = root
            .get("webServer")
            .map(|value| server_endpoint(value, "webServer"))
            .transpose()?;
        let max_request_size = root.size_or("maxRequestSize", DEFAULT_MAX_REQUEST_SIZE)?;
        let database = root
            .get("database")
            .map(|value| database_connection(value, store))
            .transpose()?;

        // Older deployments spell the cache section "redis".
        let cache_value = match (root.get("cache"), root.get("redis")) {
            (Some(value), Some(_)) => {
                warn!("document defines both 'cache' and 'redis'; using 'cache'");
                Some(value)
            }
            (Some(value), None) | (None, Some(value)) => Some(value),
            (None, None) => None,
        };
        let cache = cache_value
            .map(|value| cache_connection(value, store, "cache"))
            .transpose()?;

        Ok(RootConfig {
            run_mode: run_mode.to_string(),
            server_id: server_id.to_string(),
            max_request_size,
            api_server,
            insights_server,
            web_server,
            database,
            cache,
            service_secret: store.get(secrets::SERVICE_SECRET).cloned(),
        })
    }
}
