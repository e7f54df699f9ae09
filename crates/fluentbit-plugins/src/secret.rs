//! Secret references and the loader capability used to resolve them
//!
//! Plugin fields that carry credentials hold a [`Secret`] reference rather than
//! the plaintext value. The reference is resolved at render time through a
//! [`SecretLoader`] supplied by the caller, which also decides the namespace
//! the lookup is scoped to.

use crate::error::SecretError;
use k8s_openapi::api::core::v1::{Secret as KubeSecret, SecretKeySelector};
use schemars::JsonSchema;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Reference to a value stored in a Kubernetes Secret
///
/// ```yaml
/// valueFrom:
///   secretKeyRef:
///     name: influx-credentials
///     key: password
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Secret {
    pub value_from: ValueSource,
}

/// Source of a secret value
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValueSource {
    /// Selects a key of a secret in the loader's namespace
    pub secret_key_ref: SecretKeySelector,
}

impl Secret {
    /// Reference `key` of the secret called `name`
    pub fn from_key_ref(name: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            value_from: ValueSource {
                secret_key_ref: SecretKeySelector {
                    name: name.into(),
                    key: key.into(),
                    optional: None,
                },
            },
        }
    }

    /// Name of the referenced secret
    pub fn name(&self) -> &str {
        &self.value_from.secret_key_ref.name
    }

    /// Key within the referenced secret
    pub fn key(&self) -> &str {
        &self.value_from.secret_key_ref.key
    }
}

/// Resolves secret references to plaintext values
///
/// Implementations own their own concurrency and retry behavior; rendering
/// calls `load_secret` synchronously and aborts on the first failure.
pub trait SecretLoader {
    fn load_secret(&self, secret: &Secret) -> Result<String, SecretError>;
}

impl<T: SecretLoader + ?Sized> SecretLoader for &T {
    fn load_secret(&self, secret: &Secret) -> Result<String, SecretError> {
        (**self).load_secret(secret)
    }
}

impl<T: SecretLoader + ?Sized> SecretLoader for Box<T> {
    fn load_secret(&self, secret: &Secret) -> Result<String, SecretError> {
        (**self).load_secret(secret)
    }
}

impl<T: SecretLoader + ?Sized> SecretLoader for Arc<T> {
    fn load_secret(&self, secret: &Secret) -> Result<String, SecretError> {
        (**self).load_secret(secret)
    }
}

/// Namespace-scoped loader over a snapshot of secret values
///
/// Typically built by the reconciler from the Secrets it already fetched, so
/// rendering itself performs no API calls. Values are kept as
/// [`SecretString`] and never appear in `Debug` output.
#[derive(Debug, Default)]
pub struct InMemorySecretLoader {
    namespace: String,
    values: BTreeMap<(String, String), SecretString>,
    invalid: BTreeMap<(String, String), String>,
}

impl InMemorySecretLoader {
    /// Create an empty loader for `namespace`
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            ..Default::default()
        }
    }

    /// Build a loader from fetched Secret objects
    ///
    /// Objects from other namespaces are skipped. `stringData` entries take
    /// precedence over `data` entries with the same key.
    pub fn from_secrets(
        namespace: impl Into<String>,
        secrets: impl IntoIterator<Item = KubeSecret>,
    ) -> Self {
        let mut loader = Self::new(namespace);

        for secret in secrets {
            let Some(name) = secret.metadata.name.clone() else {
                warn!("Skipping secret without metadata.name");
                continue;
            };
            if let Some(ns) = secret.metadata.namespace.as_deref() {
                if ns != loader.namespace {
                    warn!(
                        name = %name,
                        namespace = %ns,
                        expected = %loader.namespace,
                        "Skipping secret from another namespace"
                    );
                    continue;
                }
            }

            for (key, bytes) in secret.data.unwrap_or_default() {
                match String::from_utf8(bytes.0) {
                    Ok(value) => loader.insert(name.clone(), key, value),
                    Err(e) => {
                        loader.values.remove(&(name.clone(), key.clone()));
                        loader.invalid.insert((name.clone(), key), e.to_string());
                    }
                }
            }
            for (key, value) in secret.string_data.unwrap_or_default() {
                loader.insert(name.clone(), key, value);
            }
        }

        loader
    }

    /// Add or replace a secret value
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) {
        let id = (name.into(), key.into());
        self.invalid.remove(&id);
        self.values.insert(id, SecretString::from(value.into()));
    }

    /// Namespace lookups are scoped to
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Number of resolvable values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl SecretLoader for InMemorySecretLoader {
    fn load_secret(&self, secret: &Secret) -> Result<String, SecretError> {
        let id = (secret.name().to_string(), secret.key().to_string());

        if let Some(reason) = self.invalid.get(&id) {
            return Err(SecretError::Invalid {
                name: id.0,
                key: id.1,
                reason: reason.clone(),
            });
        }

        match self.values.get(&id) {
            Some(value) => Ok(value.expose_secret().to_string()),
            None => {
                debug!(
                    namespace = %self.namespace,
                    name = %id.0,
                    key = %id.1,
                    "Secret lookup missed"
                );
                Err(SecretError::NotFound {
                    namespace: self.namespace.clone(),
                    name: id.0,
                    key: id.1,
                })
            }
        }
    }
}
