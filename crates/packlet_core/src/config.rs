use std::path::PathBuf;

use packlet_plugin::BuildPlugin;
use rustc_hash::FxHashMap;

use crate::{PluginDriver, SharedPluginDriver};

/// The normalized configuration handed to the build engine. Constructed once
/// per invocation by [crate::ConfigResolver] and immutable afterwards.
#[derive(Debug)]
pub struct BuildConfig {
  pub(crate) plugins: Vec<Box<dyn BuildPlugin>>,
  pub(crate) alias: FxHashMap<String, PathBuf>,
  pub(crate) define: FxHashMap<String, serde_json::Value>,
  pub(crate) base: String,
}

impl BuildConfig {
  /// Plugin handles in instantiation order. The sequence is never reordered.
  pub fn plugins(&self) -> &[Box<dyn BuildPlugin>] {
    &self.plugins
  }

  pub fn alias(&self) -> &FxHashMap<String, PathBuf> {
    &self.alias
  }

  pub fn define(&self) -> &FxHashMap<String, serde_json::Value> {
    &self.define
  }

  pub fn base(&self) -> &str {
    &self.base
  }

  /// Hand the plugin sequence over to the engine's hook dispatch.
  pub fn into_plugin_driver(self) -> SharedPluginDriver {
    PluginDriver::new(self.plugins).into_shared()
  }
}
