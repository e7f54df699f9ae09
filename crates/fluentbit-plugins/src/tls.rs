//! TLS settings shared by network outputs
//!
//! [`Tls`] is never rendered as its own section. Plugins that support TLS hold
//! an `Option<Tls>` and append its directives after their own.

use crate::error::Result;
use crate::params::KVs;
use crate::plugin::Params;
use crate::secret::{Secret, SecretLoader};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Fluent Bit `tls.*` directives
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Tls {
    /// Enable or disable TLS
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Force certificate validation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verify: Option<bool>,

    /// TLS debug verbosity: 0 (no debug) through 4 (verbose)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug: Option<i32>,

    /// Absolute path to CA certificate file
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ca_file: String,

    /// Absolute path to scan for certificate files
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ca_path: String,

    /// Absolute path to certificate file
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub crt_file: String,

    /// Absolute path to private key file
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub key_file: String,

    /// Password for the private key file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_password: Option<Secret>,

    /// Hostname to be used for TLS SNI extension
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub vhost: String,
}

impl Params for Tls {
    fn params(&self, sl: &dyn SecretLoader) -> Result<KVs> {
        let mut kvs = KVs::new();
        if let Some(enabled) = self.enabled {
            kvs.insert("tls", enabled.to_string());
        }
        if let Some(verify) = self.verify {
            kvs.insert("tls.verify", verify.to_string());
        }
        if let Some(debug) = self.debug {
            kvs.insert("tls.debug", debug.to_string());
        }
        if !self.ca_file.is_empty() {
            kvs.insert("tls.ca_file", &self.ca_file);
        }
        if !self.ca_path.is_empty() {
            kvs.insert("tls.ca_path", &self.ca_path);
        }
        if !self.crt_file.is_empty() {
            kvs.insert("tls.crt_file", &self.crt_file);
        }
        if !self.key_file.is_empty() {
            kvs.insert("tls.key_file", &self.key_file);
        }
        if let Some(ref secret) = self.key_password {
            let passwd = sl.load_secret(secret)?;
            kvs.insert("tls.key_passwd", passwd);
        }
        if !self.vhost.is_empty() {
            kvs.insert("tls.vhost", &self.vhost);
        }
        Ok(kvs)
    }
}
