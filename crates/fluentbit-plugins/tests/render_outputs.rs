//! Output rendering integration tests
//!
//! Records are deserialized from the camelCase JSON a custom resource would
//! carry, then rendered through the public API.

use fluentbit_plugins::prelude::*;
use std::sync::Arc;

fn secrets() -> InMemorySecretLoader {
    let mut loader = InMemorySecretLoader::new("logging");
    loader.insert("influx-tls", "password", "k3y");
    loader.insert("http-creds", "user", "collector");
    loader.insert("http-creds", "password", "p4ss");
    loader
}

fn pairs(kvs: &KVs) -> Vec<(String, String)> {
    kvs.iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn expected(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_influxdb_from_json() {
    let json = serde_json::json!({
        "influxDB": {
            "host": "influx.local",
            "port": 8086,
            "httpToken": "tok123",
            "tls": {
                "verify": true
            }
        }
    });

    let output: Output = serde_json::from_value(json).unwrap();
    assert_eq!(output.name(), "influxdb");

    let kvs = output.params(&secrets()).unwrap();
    assert_eq!(
        pairs(&kvs),
        expected(&[
            ("Host", "influx.local"),
            ("Port", "8086"),
            ("HTTP_Token", "tok123"),
            ("tls.verify", "true"),
        ])
    );
}

#[test]
fn test_s3_explicit_false_survives_deserialization() {
    let json = serde_json::json!({
        "s3": {
            "region": "us-east-1",
            "bucket": "logs",
            "usePutObject": false
        }
    });

    let output: Output = serde_json::from_value(json).unwrap();
    let kvs = output.params(&secrets()).unwrap();
    assert_eq!(
        pairs(&kvs),
        expected(&[
            ("region", "us-east-1"),
            ("bucket", "logs"),
            ("use_put_object", "false"),
        ])
    );
}

#[test]
fn test_http_with_secret_refs_and_tls() {
    let json = serde_json::json!({
        "http": {
            "host": "collector.local",
            "httpUser": { "valueFrom": { "secretKeyRef": { "name": "http-creds", "key": "user" } } },
            "httpPasswd": { "valueFrom": { "secretKeyRef": { "name": "http-creds", "key": "password" } } },
            "port": 443,
            "headers": { "X-Tenant": "acme" },
            "tls": {
                "enabled": true,
                "keyPassword": { "valueFrom": { "secretKeyRef": { "name": "influx-tls", "key": "password" } } }
            }
        }
    });

    let output: Output = serde_json::from_value(json).unwrap();
    let kvs = output.params(&secrets()).unwrap();
    assert_eq!(
        pairs(&kvs),
        expected(&[
            ("host", "collector.local"),
            ("http_User", "collector"),
            ("http_Passwd", "p4ss"),
            ("port", "443"),
            ("header", "X-Tenant    acme"),
            ("tls", "true"),
            ("tls.key_passwd", "k3y"),
        ])
    );
}

#[test]
fn test_unresolvable_tls_secret_fails_whole_render() {
    let output: Output = Influxdb {
        host: "influx.local".to_string(),
        tls: Some(Tls {
            verify: Some(true),
            key_password: Some(Secret::from_key_ref("missing", "password")),
            ..Default::default()
        }),
        ..Default::default()
    }
    .into();

    let err = output.params(&secrets()).unwrap_err();
    assert!(matches!(err, PluginError::Tls { plugin: "influxdb", .. }));
    assert!(matches!(err.secret_error(), SecretError::NotFound { .. }));
    assert!(!err.is_retryable());
}

#[test]
fn test_serialization_omits_absent_fields() {
    let output: Output = SimpleStorageService {
        bucket: "logs".to_string(),
        static_file_path: Some(false),
        ..Default::default()
    }
    .into();

    let value = serde_json::to_value(&output).unwrap();
    assert_eq!(
        value,
        serde_json::json!({ "s3": { "bucket": "logs", "staticFilePath": false } })
    );
}

#[test]
fn test_concurrent_renders_share_loader() {
    let loader = Arc::new(secrets());
    let outputs: Vec<Output> = (0..8)
        .map(|i| {
            Influxdb {
                host: format!("influx-{}", i),
                tls: Some(Tls {
                    key_password: Some(Secret::from_key_ref("influx-tls", "password")),
                    ..Default::default()
                }),
                ..Default::default()
            }
            .into()
        })
        .collect();

    std::thread::scope(|s| {
        let handles: Vec<_> = outputs
            .iter()
            .map(|output| {
                let loader = Arc::clone(&loader);
                s.spawn(move || output.params(&loader))
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let kvs = handle.join().unwrap().unwrap();
            assert_eq!(kvs.get("Host"), Some(format!("influx-{}", i).as_str()));
            assert_eq!(kvs.get("tls.key_passwd"), Some("k3y"));
        }
    });
}

#[test]
fn test_output_schema_is_generated() {
    let schema = schemars::schema_for!(Output);
    let json = serde_json::to_string(&schema).unwrap();
    assert!(json.contains("influxDB"));
    assert!(json.contains("secretKeyRef"));
}
