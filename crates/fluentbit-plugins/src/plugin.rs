//! The plugin contract shared by every output, filter and input record

use crate::error::{PluginError, Result};
use crate::params::KVs;
use crate::secret::SecretLoader;
use crate::tls::Tls;
use tracing::debug;

/// Anything that renders itself into directive parameters
pub trait Params {
    /// Render the configured fields into ordered directives
    ///
    /// Unset fields produce no directive. The only failure source is secret
    /// resolution; a failed render returns no parameters at all.
    fn params(&self, sl: &dyn SecretLoader) -> Result<KVs>;
}

/// A Fluent Bit plugin section
pub trait Plugin: Params {
    /// Directive-set name, e.g. `s3` for `[OUTPUT] Name s3`
    fn name(&self) -> &'static str;
}

/// Render an attached TLS block and append it after the plugin's own directives
pub(crate) fn merge_tls(
    kvs: &mut KVs,
    tls: Option<&Tls>,
    plugin: &'static str,
    sl: &dyn SecretLoader,
) -> Result<()> {
    let Some(tls) = tls else {
        return Ok(());
    };

    let tls_kvs = tls.params(sl).map_err(|e| PluginError::Tls {
        plugin,
        source: Box::new(e),
    })?;
    debug!(plugin, directives = tls_kvs.len(), "Merging TLS parameters");
    kvs.merge(&tls_kvs);
    Ok(())
}
