//! Stdout output plugin

use crate::error::Result;
use crate::params::KVs;
use crate::plugin::{Params, Plugin};
use crate::secret::SecretLoader;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Prints records to the standard output, mostly for debugging pipelines
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Stdout {
    /// Data format: msgpack, json, json_lines or json_stream
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub format: String,

    /// Name of the date field in output
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub json_date_key: String,

    /// Format of the date: double, epoch, iso8601 or java_sql_timestamp
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub json_date_format: String,
}

impl Plugin for Stdout {
    fn name(&self) -> &'static str {
        "stdout"
    }
}

impl Params for Stdout {
    fn params(&self, _sl: &dyn SecretLoader) -> Result<KVs> {
        let mut kvs = KVs::new();
        if !self.format.is_empty() {
            kvs.insert("format", &self.format);
        }
        if !self.json_date_key.is_empty() {
            kvs.insert("json_date_key", &self.json_date_key);
        }
        if !self.json_date_format.is_empty() {
            kvs.insert("json_date_format", &self.json_date_format);
        }
        Ok(kvs)
    }
}
