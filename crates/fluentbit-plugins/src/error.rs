//! Error types for plugin parameter rendering

use thiserror::Error;

/// Errors raised while resolving a secret reference
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SecretError {
    /// The referenced secret or key does not exist
    #[error("Secret not found: {name}/{key} in namespace {namespace}")]
    NotFound {
        namespace: String,
        name: String,
        key: String,
    },

    /// The loader is not allowed to read the secret
    #[error("Access to secret {name} denied: {reason}")]
    AccessDenied { name: String, reason: String },

    /// The secret exists but its value cannot be used as a directive value
    #[error("Invalid secret value {name}/{key}: {reason}")]
    Invalid {
        name: String,
        key: String,
        reason: String,
    },

    /// Secret backend error
    #[error("Secret backend error: {0}")]
    Backend(String),
}

impl SecretError {
    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        matches!(self, SecretError::Backend(_))
    }
}

/// Errors that can occur while rendering plugin parameters
#[derive(Error, Debug)]
pub enum PluginError {
    /// A secret referenced by a plugin field could not be resolved
    #[error(transparent)]
    Secret(#[from] SecretError),

    /// The TLS block attached to a plugin failed to render
    #[error("TLS parameters for plugin '{plugin}' failed: {source}")]
    Tls {
        plugin: &'static str,
        #[source]
        source: Box<PluginError>,
    },
}

impl PluginError {
    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            PluginError::Secret(err) => err.is_retryable(),
            PluginError::Tls { source, .. } => source.is_retryable(),
        }
    }

    /// The secret failure at the root of this error
    pub fn secret_error(&self) -> &SecretError {
        match self {
            PluginError::Secret(err) => err,
            PluginError::Tls { source, .. } => source.secret_error(),
        }
    }
}

/// Result type for plugin operations
pub type Result<T> = std::result::Result<T, PluginError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SecretError::NotFound {
            namespace: "logging".to_string(),
            name: "influx-tls".to_string(),
            key: "password".to_string(),
        };
        assert!(err.to_string().contains("influx-tls/password"));
        assert!(err.to_string().contains("logging"));
    }

    #[test]
    fn test_tls_error_display() {
        let err = PluginError::Tls {
            plugin: "influxdb",
            source: Box::new(SecretError::Backend("timeout".to_string()).into()),
        };
        assert!(err.to_string().contains("influxdb"));
        assert!(err.to_string().contains("timeout"));
    }

    #[test]
    fn test_retryable_errors() {
        let backend: PluginError = SecretError::Backend("unavailable".to_string()).into();
        assert!(backend.is_retryable());

        let denied: PluginError = SecretError::AccessDenied {
            name: "creds".to_string(),
            reason: "forbidden".to_string(),
        }
        .into();
        assert!(!denied.is_retryable());

        let wrapped = PluginError::Tls {
            plugin: "s3",
            source: Box::new(backend),
        };
        assert!(wrapped.is_retryable());
    }

    #[test]
    fn test_secret_error_unwraps_tls() {
        let inner = SecretError::Backend("down".to_string());
        let err = PluginError::Tls {
            plugin: "http",
            source: Box::new(inner.clone().into()),
        };
        assert_eq!(err.secret_error(), &inner);
    }
}
