//! Amazon S3 output plugin

use crate::error::Result;
use crate::params::KVs;
use crate::plugin::{merge_tls, Params, Plugin};
use crate::secret::SecretLoader;
use crate::tls::Tls;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Uploads records to Amazon S3 or an S3-compatible object store
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SimpleStorageService {
    /// AWS region of the bucket
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub region: String,

    /// Bucket name
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub bucket: String,

    /// Name of the time key in the output record; `false` disables it
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub json_date_key: String,

    /// Date format: double, epoch, iso8601 or java_sql_timestamp
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub json_date_format: String,

    /// Size of files in S3 (1M to 50G)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub total_file_size: String,

    /// Size of each part for multipart uploads (max 50M)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub upload_chunk_size: String,

    /// Complete an upload and start a new file after this much time
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub upload_timeout: String,

    /// Directory to locally buffer data before sending
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub store_dir: String,

    /// Format string for object keys; supports `$UUID`, `$INDEX`, `$TAG`,
    /// `$TAG[n]` and strftime formatters
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub s3_key_format: String,

    /// Characters used to split the tag into parts for `s3KeyFormat`
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub s3_key_format_tag_delimiters: String,

    /// Disable appending a UUID to the key when `$UUID` is absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub static_file_path: Option<bool>,

    /// Use the PutObject API instead of multipart uploads
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_put_object: Option<bool>,

    /// ARN of an IAM role to assume
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub role_arn: String,

    /// Custom endpoint for the S3 API
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub endpoint: String,

    /// Custom endpoint for the STS API
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub sts_endpoint: String,

    /// Predefined canned ACL policy for objects
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub canned_acl: String,

    /// Compression type for objects (gzip, or arrow when compiled in)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub compression: String,

    /// MIME type sent as the Content-Type header
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub content_type: String,

    /// Send the Content-MD5 header with PutObject and UploadPart requests
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub send_content_md5: String,

    /// Immediately retry failed requests to AWS services once
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_retry_requests: Option<bool>,

    /// Send only the value of this record key instead of the whole record
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub log_key: String,

    /// Queue uploads so a failed chunk is not reordered behind later ones
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preserve_data_ordering: Option<bool>,

    /// Storage class for objects; S3 defaults to STANDARD
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub storage_class: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls: Option<Tls>,
}

impl Plugin for SimpleStorageService {
    fn name(&self) -> &'static str {
        "s3"
    }
}

impl Params for SimpleStorageService {
    fn params(&self, sl: &dyn SecretLoader) -> Result<KVs> {
        let mut kvs = KVs::new();
        if !self.region.is_empty() {
            kvs.insert("region", &self.region);
        }
        if !self.bucket.is_empty() {
            kvs.insert("bucket", &self.bucket);
        }
        if !self.json_date_key.is_empty() {
            kvs.insert("json_date_key", &self.json_date_key);
        }
        if !self.json_date_format.is_empty() {
            kvs.insert("json_date_format", &self.json_date_format);
        }
        if !self.total_file_size.is_empty() {
            kvs.insert("total_file_size", &self.total_file_size);
        }
        if !self.upload_chunk_size.is_empty() {
            kvs.insert("upload_chunk_size", &self.upload_chunk_size);
        }
        if !self.upload_timeout.is_empty() {
            kvs.insert("upload_timeout", &self.upload_timeout);
        }
        if !self.store_dir.is_empty() {
            kvs.insert("store_dir", &self.store_dir);
        }
        if !self.s3_key_format.is_empty() {
            kvs.insert("s3_key_format", &self.s3_key_format);
        }
        if !self.s3_key_format_tag_delimiters.is_empty() {
            kvs.insert(
                "s3_key_format_tag_delimiters",
                &self.s3_key_format_tag_delimiters,
            );
        }
        if let Some(static_file_path) = self.static_file_path {
            kvs.insert("static_file_path", static_file_path.to_string());
        }
        if let Some(use_put_object) = self.use_put_object {
            kvs.insert("use_put_object", use_put_object.to_string());
        }
        if !self.role_arn.is_empty() {
            kvs.insert("role_arn", &self.role_arn);
        }
        if !self.endpoint.is_empty() {
            kvs.insert("endpoint", &self.endpoint);
        }
        if !self.sts_endpoint.is_empty() {
            kvs.insert("sts_endpoint", &self.sts_endpoint);
        }
        if !self.canned_acl.is_empty() {
            kvs.insert("canned_acl", &self.canned_acl);
        }
        if !self.compression.is_empty() {
            kvs.insert("compression", &self.compression);
        }
        if !self.content_type.is_empty() {
            kvs.insert("content_type", &self.content_type);
        }
        if !self.send_content_md5.is_empty() {
            kvs.insert("send_content_md5", &self.send_content_md5);
        }
        if let Some(auto_retry_requests) = self.auto_retry_requests {
            kvs.insert("auto_retry_requests", auto_retry_requests.to_string());
        }
        if !self.log_key.is_empty() {
            kvs.insert("log_key", &self.log_key);
        }
        if let Some(preserve_data_ordering) = self.preserve_data_ordering {
            kvs.insert("preserve_data_ordering", preserve_data_ordering.to_string());
        }
        if !self.storage_class.is_empty() {
            kvs.insert("storage_class", &self.storage_class);
        }
        merge_tls(&mut kvs, self.tls.as_ref(), self.name(), sl)?;
        Ok(kvs)
    }
}
