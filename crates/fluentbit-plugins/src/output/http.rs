//! HTTP output plugin

use crate::error::Result;
use crate::params::KVs;
use crate::plugin::{merge_tls, Params, Plugin};
use crate::secret::{Secret, SecretLoader};
use crate::tls::Tls;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Flushes records to an HTTP endpoint
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Http {
    /// IP address or hostname of the target HTTP server
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub host: String,

    /// Basic auth username
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_user: Option<Secret>,

    /// Basic auth password
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_passwd: Option<Secret>,

    /// TCP port of the target HTTP server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,

    /// HTTP proxy, e.g. `http://PROXY:PORT`
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub proxy: String,

    /// HTTP URI for the target web server, e.g. `/something`
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub uri: String,

    /// Payload compression; `gzip` is the only supported value
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub compress: String,

    /// Allow duplicated headers in the request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_duplicated_headers: Option<bool>,

    /// Data format: msgpack, json, json_stream, json_lines or gelf
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub format: String,

    /// Header name carrying the record tag
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub header_tag: String,

    /// Extra headers sent with every request
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,

    /// Name of the date field in output
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub json_date_key: String,

    /// Format of the date: double, epoch, iso8601 or java_sql_timestamp
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub json_date_format: String,

    /// Record key used as GELF timestamp
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub gelf_timestamp_key: String,

    /// Record key used as GELF host
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub gelf_host_key: String,

    /// Record key used as GELF short message
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub gelf_short_message_key: String,

    /// Record key used as GELF full message
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub gelf_full_message_key: String,

    /// Record key used as GELF level
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub gelf_level_key: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls: Option<Tls>,
}

impl Plugin for Http {
    fn name(&self) -> &'static str {
        "http"
    }
}

impl Params for Http {
    fn params(&self, sl: &dyn SecretLoader) -> Result<KVs> {
        let mut kvs = KVs::new();
        if !self.host.is_empty() {
            kvs.insert("host", &self.host);
        }
        if let Some(ref secret) = self.http_user {
            let user = sl.load_secret(secret)?;
            kvs.insert("http_User", user);
        }
        if let Some(ref secret) = self.http_passwd {
            let passwd = sl.load_secret(secret)?;
            kvs.insert("http_Passwd", passwd);
        }
        if let Some(port) = self.port {
            kvs.insert("port", port.to_string());
        }
        if !self.proxy.is_empty() {
            kvs.insert("proxy", &self.proxy);
        }
        if !self.uri.is_empty() {
            kvs.insert("uri", &self.uri);
        }
        if !self.compress.is_empty() {
            kvs.insert("compress", &self.compress);
        }
        if let Some(allow) = self.allow_duplicated_headers {
            kvs.insert("allow_duplicated_headers", allow.to_string());
        }
        if !self.format.is_empty() {
            kvs.insert("format", &self.format);
        }
        if !self.header_tag.is_empty() {
            kvs.insert("header_tag", &self.header_tag);
        }
        kvs.insert_string_map(&self.headers, |k, v| {
            ("header".to_string(), format!("{}    {}", k, v))
        });
        if !self.json_date_key.is_empty() {
            kvs.insert("json_date_key", &self.json_date_key);
        }
        if !self.json_date_format.is_empty() {
            kvs.insert("json_date_format", &self.json_date_format);
        }
        if !self.gelf_timestamp_key.is_empty() {
            kvs.insert("gelf_timestamp_key", &self.gelf_timestamp_key);
        }
        if !self.gelf_host_key.is_empty() {
            kvs.insert("gelf_host_key", &self.gelf_host_key);
        }
        if !self.gelf_short_message_key.is_empty() {
            kvs.insert("gelf_short_message_key", &self.gelf_short_message_key);
        }
        if !self.gelf_full_message_key.is_empty() {
            kvs.insert("gelf_full_message_key", &self.gelf_full_message_key);
        }
        if !self.gelf_level_key.is_empty() {
            kvs.insert("gelf_level_key", &self.gelf_level_key);
        }
        merge_tls(&mut kvs, self.tls.as_ref(), self.name(), sl)?;
        Ok(kvs)
    }
}
