// src/render.rs
//! Redacted rendering of a loaded configuration.
//!
//! `Display` is the only sanctioned way to print a config: every password
//! renders as a fixed mask and the service secret does not render at all.
//! Sections appear in declaration order: api, insights, web, database, cache.

use std::fmt;

use crate::schema::RootConfig;

const MASK: &str = "********";

impl fmt::Display for RootConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (tag, server) in self.tagged_servers() {
            writeln!(f, "{tag} port: {}", server.port)?;
            writeln!(f, "{tag} public host: {}", server.public_host)?;
            writeln!(f, "{tag} public port: {}", server.public_port)?;
            writeln!(f, "{tag} public scheme: {}", server.public_scheme)?;
        }
        if let Some(db) = &self.database {
            writeln!(f, "database host: {}", db.host)?;
            writeln!(f, "database port: {}", db.port)?;
            writeln!(f, "database name: {}", db.name)?;
            writeln!(f, "database user: {}", db.user)?;
            writeln!(f, "database pass: {MASK}")?;
            writeln!(f, "database require ssl: {}", db.require_ssl)?;
            writeln!(f, "database unix socket: {}", db.is_unix_socket)?;
        }
        if let Some(cache) = &self.cache {
            writeln!(f, "cache host: {}", cache.host)?;
            writeln!(f, "cache port: {}", cache.port)?;
            if let Some(user) = &cache.user {
                writeln!(f, "cache user: {user}")?;
            }
            if cache.password.is_some() {
                writeln!(f, "cache pass: {MASK}")?;
            }
        }
        Ok(())
    }
}
