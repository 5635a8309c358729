// src/secrets.rs
//! Secret storage, kept strictly separate from the configuration document.
//!
//! Secrets are never versioned alongside structural configuration: the
//! document never supplies a usable password, and the store never reads the
//! document. Values are held as [`SecretString`], so `Debug` output is
//! redacted and reading a value requires an explicit `expose_secret()`.

use std::collections::HashMap;
use std::env;

use secrecy::SecretString;

/// Store key for the database password. Required whenever the document
/// configures a database section.
pub const DATABASE_PASSWORD: &str = "database";

/// Store key for the cache password. Optional: the cache section can exist
/// unauthenticated.
pub const CACHE_PASSWORD: &str = "cache";

/// Store key for the shared service-to-service secret. Optional.
pub const SERVICE_SECRET: &str = "serviceSecret";

const ENV_VARS: &[(&str, &str)] = &[
    ("STACKD_DB_PASSWORD", DATABASE_PASSWORD),
    ("STACKD_CACHE_PASSWORD", CACHE_PASSWORD),
    ("STACKD_SERVICE_SECRET", SERVICE_SECRET),
];

/// Mapping from secret name to secret value, materialized by the caller.
#[derive(Debug, Clone, Default)]
pub struct SecretStore {
    values: HashMap<String, SecretString>,
}

impl SecretStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the recognized secrets from the process environment.
    ///
    /// Unset or empty variables leave the corresponding key absent.
    pub fn from_env() -> Self {
        let mut store = Self::new();
        for (var, key) in ENV_VARS {
            if let Ok(value) = env::var(var) {
                if !value.is_empty() {
                    store.insert(*key, value);
                }
            }
        }
        store
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values
            .insert(key.into(), SecretString::from(value.into()));
    }

    pub fn get(&self, key: &str) -> Option<&SecretString> {
        self.values.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for SecretStore
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut store = Self::new();
        for (key, value) in iter {
            store.insert(key, value);
        }
        store
    }
}

impl From<HashMap<String, String>> for SecretStore {
    fn from(values: HashMap<String, String>) -> Self {
        values.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn insert_and_get_round_trip() {
        let mut store = SecretStore::new();
        store.insert(DATABASE_PASSWORD, "s3cr3t");
        assert!(store.contains(DATABASE_PASSWORD));
        assert_eq!(
            store.get(DATABASE_PASSWORD).unwrap().expose_secret().as_str(),
            "s3cr3t"
        );
        assert!(store.get(CACHE_PASSWORD).is_none());
    }

    #[test]
    fn debug_output_is_redacted() {
        let mut store = SecretStore::new();
        store.insert(SERVICE_SECRET, "super-secret-value");
        let rendered = format!("{store:?}");
        assert!(!rendered.contains("super-secret-value"));
    }

    #[test]
    fn builds_from_string_pairs() {
        let store: SecretStore = [("database", "pw1"), ("cache", "pw2")].into_iter().collect();
        assert_eq!(store.len(), 2);
        assert!(store.contains("database"));
        assert!(store.contains("cache"));
    }

    #[test]
    fn from_env_skips_unset_and_empty_variables() {
        env::set_var("STACKD_DB_PASSWORD", "from-env");
        env::set_var("STACKD_CACHE_PASSWORD", "");
        env::remove_var("STACKD_SERVICE_SECRET");

        let store = SecretStore::from_env();
        assert_eq!(
            store.get(DATABASE_PASSWORD).unwrap().expose_secret().as_str(),
            "from-env"
        );
        assert!(!store.contains(CACHE_PASSWORD));
        assert!(!store.contains(SERVICE_SECRET));

        env::remove_var("STACKD_DB_PASSWORD");
        env::remove_var("STACKD_CACHE_PASSWORD");
    }
}
