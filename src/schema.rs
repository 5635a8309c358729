// src/schema.rs
//! Typed configuration values.
//!
//! Everything here is constructed once by the decoders at process startup and
//! treated as read-only afterwards. Absent sections are `Option`s, never
//! sentinel values.

use std::fmt;

use secrecy::SecretString;

/// Default cap on inbound request body size, in bytes.
pub const DEFAULT_MAX_REQUEST_SIZE: usize = 524_288;

/// Display tag for a configured server endpoint.
///
/// Tags are metadata used only for rendering. Endpoints carry no tag of
/// their own; [`RootConfig::tagged_servers`] pairs them up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerTag {
    Api,
    Insights,
    Web,
}

impl ServerTag {
    pub fn as_str(self) -> &'static str {
        match self {
            ServerTag::Api => "api",
            ServerTag::Insights => "insights",
            ServerTag::Web => "web",
        }
    }
}

impl fmt::Display for ServerTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One listening server plus the address clients use to reach it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerEndpoint {
    /// Local listening port.
    pub port: u16,
    /// Hostname clients use to reach this server.
    pub public_host: String,
    /// Port clients use; may differ from `port` behind a proxy.
    pub public_port: u16,
    /// `http` or `https`.
    pub public_scheme: String,
}

/// Connection settings for the relational database.
///
/// Never exists without a resolved password: decoding fails instead of
/// producing one with an empty or absent password.
#[derive(Debug, Clone)]
pub struct DatabaseConnection {
    pub host: String,
    pub port: u16,
    pub name: String,
    pub user: String,
    /// Sourced from the secret store, never from the document.
    pub password: SecretString,
    pub require_ssl: bool,
    pub is_unix_socket: bool,
}

/// Connection settings for the in-memory cache/broker.
#[derive(Debug, Clone)]
pub struct CacheConnection {
    pub enabled: bool,
    pub host: String,
    pub port: u16,
    pub user: Option<String>,
    /// Absent when the store holds no cache secret; the section can exist
    /// unauthenticated.
    pub password: Option<SecretString>,
}

/// The complete validated startup configuration.
#[derive(Debug, Clone)]
pub struct RootConfig {
    /// Deployment mode identifier; selects which document was loaded. Not
    /// validated against a fixed set.
    pub run_mode: String,
    /// Logical identity of this process instance, supplied by the caller.
    pub server_id: String,
    /// Cap on inbound request body size, in bytes.
    pub max_request_size: usize,
    /// The primary API server. Every deployment exposes one.
    pub api_server: ServerEndpoint,
    /// Optional observability/admin server.
    pub insights_server: Option<ServerEndpoint>,
    /// Optional server for serving web content.
    pub web_server: Option<ServerEndpoint>,
    /// Optional persistent storage connection.
    pub database: Option<DatabaseConnection>,
    /// Optional cache/broker connection.
    pub cache: Option<CacheConnection>,
    /// Shared secret for internal service-to-service authentication.
    /// Sourced exclusively from the secret store.
    pub service_secret: Option<SecretString>,
}

impl RootConfig {
    /// Present servers in declaration order, paired with their display tags.
    pub fn tagged_servers(&self) -> Vec<(ServerTag, &ServerEndpoint)> {
        let mut servers = vec![(ServerTag::Api, &self.api_server)];
        if let Some(server) = &self.insights_server {
            servers.push((ServerTag::Insights, server));
        }
        if let Some(server) = &self.web_server {
            servers.push((ServerTag::Web, server));
        }
        servers
    }
}
