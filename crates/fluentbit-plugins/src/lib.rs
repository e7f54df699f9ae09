//! # Fluent Bit plugin parameters
//!
//! Typed Fluent Bit plugin configuration, rendered into the ordered
//! key/value directives a configuration renderer writes out as
//!
//! ```text
//! [OUTPUT]
//!     Name       s3
//!     region     us-east-1
//!     bucket     logs
//! ```
//!
//! The records are the `spec` fragments of logging custom resources: they
//! deserialize from camelCase YAML/JSON and publish a JSON schema. Rendering is
//! a pure, synchronous walk over the record's fields.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fluentbit_plugins::prelude::*;
//!
//! let mut secrets = InMemorySecretLoader::new("logging");
//! secrets.insert("influx-tls", "password", "k3y");
//!
//! let output = Influxdb {
//!     host: "influx.local".to_string(),
//!     port: 8086,
//!     http_token: "tok123".to_string(),
//!     tls: Some(Tls {
//!         verify: Some(true),
//!         key_password: Some(Secret::from_key_ref("influx-tls", "password")),
//!         ..Default::default()
//!     }),
//!     ..Default::default()
//! };
//!
//! let kvs = output.params(&secrets)?;
//! for (key, value) in kvs.iter() {
//!     println!("{} {}", key, value);
//! }
//! ```
//!
//! ## Rendering rules
//!
//! - Fields holding their absence value (empty string, zero, `None`) emit
//!   nothing. `Some(false)` is a configured value and renders as `false`.
//! - Directives follow field declaration order; an attached [`Tls`] block is
//!   always appended last.
//! - Secret references are resolved through the caller's [`SecretLoader`].
//!   Any failure aborts the render and no parameters are returned.
//!
//! Field values are not validated here; that belongs to the schema layer.
//!
//! ## Modules
//!
//! - [`params`] - the ordered [`KVs`] accumulator
//! - [`plugin`] - the [`Plugin`] and [`Params`] contracts
//! - [`secret`] - secret references and loaders
//! - [`tls`] - the shared TLS block
//! - [`output`] - output plugins
//! - [`error`] - error types

pub mod error;
pub mod output;
pub mod params;
pub mod plugin;
pub mod secret;
pub mod tls;

#[cfg(test)]
mod testing;

pub use error::{PluginError, Result, SecretError};
pub use params::{KVs, KV};
pub use plugin::{Params, Plugin};
pub use secret::{InMemorySecretLoader, Secret, SecretLoader, ValueSource};
pub use tls::Tls;

pub mod prelude {
    //! Re-exports for convenient usage
    pub use crate::error::{PluginError, Result, SecretError};
    pub use crate::output::{Http, Influxdb, Output, SimpleStorageService, Stdout};
    pub use crate::params::KVs;
    pub use crate::plugin::{Params, Plugin};
    pub use crate::secret::{InMemorySecretLoader, Secret, SecretLoader};
    pub use crate::tls::Tls;
}
