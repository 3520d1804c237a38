use std::sync::Arc;

use packlet_plugin::{BuildPlugin, Context, TransformArgs};
use tokio::sync::RwLock;

use crate::ConfigResult;

pub type SharedPluginDriver = Arc<RwLock<PluginDriver>>;

/// Dispatches engine hooks over the resolved plugin sequence, in order.
#[derive(Debug, Default)]
pub struct PluginDriver {
  plugins: Vec<Box<dyn BuildPlugin>>,
}

impl PluginDriver {
  pub fn new(plugins: Vec<Box<dyn BuildPlugin>>) -> Self {
    Self { plugins }
  }

  pub fn into_shared(self) -> SharedPluginDriver {
    Arc::new(RwLock::new(self))
  }

  pub fn plugins(&self) -> &[Box<dyn BuildPlugin>] {
    &self.plugins
  }

  /// Later plugins observe the output of earlier ones.
  pub async fn transform(&self, id: &str, code: String) -> ConfigResult<String> {
    let mut code = code;
    for plugin in &self.plugins {
      let output = plugin
        .transform(&mut Context::new(), &mut TransformArgs { id, code: &code })
        .await?;
      if let Some(output) = output {
        code = output
      }
    }
    Ok(code)
  }

  /// Banner contributions joined in plugin order.
  pub async fn banner(&self) -> ConfigResult<Option<String>> {
    let mut banners = vec![];
    for plugin in &self.plugins {
      if let Some(banner) = plugin.banner(&mut Context::new()).await? {
        banners.push(banner);
      }
    }
    if banners.is_empty() {
      Ok(None)
    } else {
      Ok(Some(banners.join("\n")))
    }
  }
}
