//! Output plugins
//!
//! Each output is a plain record whose fields map one-to-one onto Fluent Bit
//! directives. [`Output`] wraps every supported variant so a list of outputs
//! taken from a `ClusterOutput`-style resource can be rendered uniformly.

pub mod http;
pub mod influxdb;
pub mod s3;
pub mod stdout;

pub use http::Http;
pub use influxdb::Influxdb;
pub use s3::SimpleStorageService;
pub use stdout::Stdout;

use crate::error::Result;
use crate::params::KVs;
use crate::plugin::{Params, Plugin};
use crate::secret::SecretLoader;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub(crate) fn is_zero(value: &i32) -> bool {
    *value == 0
}

/// Any supported output plugin
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
pub enum Output {
    #[serde(rename = "influxDB")]
    Influxdb(Influxdb),
    #[serde(rename = "s3")]
    S3(SimpleStorageService),
    #[serde(rename = "http")]
    Http(Http),
    #[serde(rename = "stdout")]
    Stdout(Stdout),
}

impl Output {
    fn plugin(&self) -> &dyn Plugin {
        match self {
            Output::Influxdb(p) => p,
            Output::S3(p) => p,
            Output::Http(p) => p,
            Output::Stdout(p) => p,
        }
    }
}

impl Plugin for Output {
    fn name(&self) -> &'static str {
        self.plugin().name()
    }
}

impl Params for Output {
    fn params(&self, sl: &dyn SecretLoader) -> Result<KVs> {
        let plugin = self.plugin();
        let kvs = plugin.params(sl)?;
        debug!(
            plugin = plugin.name(),
            directives = kvs.len(),
            "Rendered output parameters"
        );
        Ok(kvs)
    }
}

impl From<Influxdb> for Output {
    fn from(p: Influxdb) -> Self {
        Output::Influxdb(p)
    }
}

impl From<SimpleStorageService> for Output {
    fn from(p: SimpleStorageService) -> Self {
        Output::S3(p)
    }
}

impl From<Http> for Output {
    fn from(p: Http) -> Self {
        Output::Http(p)
    }
}

impl From<Stdout> for Output {
    fn from(p: Stdout) -> Self {
        Output::Stdout(p)
    }
}
