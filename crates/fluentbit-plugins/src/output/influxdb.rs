//! InfluxDB output plugin

use super::is_zero;
use crate::error::Result;
use crate::params::KVs;
use crate::plugin::{merge_tls, Params, Plugin};
use crate::secret::SecretLoader;
use crate::tls::Tls;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Ingests records into an InfluxDB database (v1) or bucket (v2)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Influxdb {
    /// IP address or hostname of the target InfluxDB service
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub host: String,

    /// TCP port of the target InfluxDB service
    #[serde(default, skip_serializing_if = "is_zero")]
    pub port: i32,

    /// Database name where records will be inserted
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub database: String,

    /// Bucket name where records will be inserted.
    /// If specified, `database` is ignored and the v2 API is used.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub bucket: String,

    /// Organization name where the bucket is (v2 only)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub org: String,

    /// Name of the tag whose value is incremented for consecutive simultaneous events
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub sequence_tag: String,

    /// Username for HTTP basic authentication
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub http_user: String,

    /// Password for the user defined in `httpUser`
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub http_passwd: String,

    /// Authentication token used with InfluxDB v2.
    /// If specified, `httpUser` and `httpPasswd` are ignored.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub http_token: String,

    /// Space separated list of keys that need to be tagged
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub tag_keys: String,

    /// Automatically tag keys where value is a string (True/False, On/Off)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub auto_tags: String,

    /// Key of the string array holding tag keys for each record
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub tags_list_key: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls: Option<Tls>,
}

impl Plugin for Influxdb {
    fn name(&self) -> &'static str {
        "influxdb"
    }
}

impl Params for Influxdb {
    fn params(&self, sl: &dyn SecretLoader) -> Result<KVs> {
        let mut kvs = KVs::new();
        if !self.host.is_empty() {
            kvs.insert("Host", &self.host);
        }
        if self.port != 0 {
            kvs.insert("Port", self.port.to_string());
        }
        if !self.database.is_empty() {
            kvs.insert("Database", &self.database);
        }
        if !self.bucket.is_empty() {
            kvs.insert("Bucket", &self.bucket);
        }
        if !self.org.is_empty() {
            kvs.insert("Org", &self.org);
        }
        if !self.sequence_tag.is_empty() {
            kvs.insert("Sequence_Tag", &self.sequence_tag);
        }
        if !self.http_user.is_empty() {
            kvs.insert("HTTP_User", &self.http_user);
        }
        if !self.http_passwd.is_empty() {
            kvs.insert("HTTP_Passwd", &self.http_passwd);
        }
        if !self.http_token.is_empty() {
            kvs.insert("HTTP_Token", &self.http_token);
        }
        if !self.tag_keys.is_empty() {
            kvs.insert("Tag_Keys", &self.tag_keys);
        }
        if !self.auto_tags.is_empty() {
            kvs.insert("Auto_Tags", &self.auto_tags);
        }
        if !self.tags_list_key.is_empty() {
            kvs.insert("Tags_List_Key", &self.tags_list_key);
        }
        merge_tls(&mut kvs, self.tls.as_ref(), self.name(), sl)?;
        Ok(kvs)
    }
}
