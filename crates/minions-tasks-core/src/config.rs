//! Client configuration.
//!
//! [`create_client`] merges caller options over a base that carries the
//! package version.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::Error;

/// Package version reported in every client configuration.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Key under which the version is stored.
pub const VERSION_KEY: &str = "version";

/// How a caller-supplied `version` option is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VersionPolicy {
    /// Caller options win, including `version`.
    #[default]
    CallerOverrides,
    /// `version` is always [`VERSION`].
    Pinned,
}

/// Open-ended client options. Any key is accepted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClientOptions {
    entries: BTreeMap<String, Value>,
}

impl ClientOptions {
    /// Create an empty option set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an option, replacing any earlier value for the key.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Set an option in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Number of options.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no options are set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ClientOptions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut options = Self::new();
        for (key, value) in iter {
            options.insert(key, value);
        }
        options
    }
}

/// A resolved client configuration: `version` plus the merged options.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    entries: BTreeMap<String, Value>,
}

impl ClientConfig {
    /// The effective version string.
    ///
    /// Under [`VersionPolicy::CallerOverrides`] a non-string override is
    /// reported as `None`.
    pub fn version(&self) -> Option<&str> {
        self.entries.get(VERSION_KEY).and_then(Value::as_str)
    }

    /// Get an entry by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Number of entries, `version` included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: `version` is always present.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The configuration as a JSON object.
    pub fn to_value(&self) -> Value {
        Value::Object(
            self.entries
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        )
    }

    /// The configuration as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(&self.to_value())?)
    }
}

/// Create a client configuration, letting caller options shadow `version`.
pub fn create_client(options: ClientOptions) -> ClientConfig {
    create_client_with_policy(options, VersionPolicy::default())
}

/// Create a client configuration with an explicit version policy.
pub fn create_client_with_policy(options: ClientOptions, policy: VersionPolicy) -> ClientConfig {
    let mut entries = BTreeMap::new();
    entries.insert(VERSION_KEY.to_string(), Value::from(VERSION));
    entries.extend(options.entries);

    if policy == VersionPolicy::Pinned {
        entries.insert(VERSION_KEY.to_string(), Value::from(VERSION));
    }

    tracing::debug!(keys = entries.len(), ?policy, "created client config");
    ClientConfig { entries }
}
