//! Test helpers shared by the plugin unit tests

use crate::error::SecretError;
use crate::params::KVs;
use crate::plugin::Params;
use crate::secret::{Secret, SecretLoader};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Loader for records that reference no secrets; any lookup is a test bug
pub struct NoSecrets;

impl SecretLoader for NoSecrets {
    fn load_secret(&self, secret: &Secret) -> Result<String, SecretError> {
        panic!("unexpected secret lookup: {}/{}", secret.name(), secret.key())
    }
}

/// Loader whose backend is always unavailable
pub struct FailingLoader;

impl SecretLoader for FailingLoader {
    fn load_secret(&self, _secret: &Secret) -> Result<String, SecretError> {
        Err(SecretError::Backend("secret backend unavailable".to_string()))
    }
}

pub fn pairs(kvs: &KVs) -> Vec<(&str, &str)> {
    kvs.iter().collect()
}

pub fn owned(kvs: &KVs) -> Vec<(String, String)> {
    kvs.iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Render a record deserialized with only `field` (camelCase) set
pub fn render_field<P>(field: &str, value: Value, sl: &dyn SecretLoader) -> Vec<(String, String)>
where
    P: Params + DeserializeOwned,
{
    let mut object = serde_json::Map::new();
    object.insert(field.to_string(), value);
    let plugin: P = serde_json::from_value(Value::Object(object)).unwrap();
    owned(&plugin.params(sl).unwrap())
}

/// Check that a tri-state boolean field renders nothing when unset and its
/// textual value when set to either `false` or `true`
pub fn assert_tri_state<P>(field: &str, key: &str)
where
    P: Params + DeserializeOwned,
{
    let unset = render_field::<P>(field, Value::Null, &NoSecrets);
    assert!(unset.is_empty(), "{} unset", field);

    let off = render_field::<P>(field, Value::Bool(false), &NoSecrets);
    assert_eq!(off, vec![(key.to_string(), "false".to_string())]);

    let on = render_field::<P>(field, Value::Bool(true), &NoSecrets);
    assert_eq!(on, vec![(key.to_string(), "true".to_string())]);
}
