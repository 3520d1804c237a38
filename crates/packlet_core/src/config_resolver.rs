use packlet_plugin::BuildPlugin;
use tracing::instrument;

use crate::{
  utils::{merge_define, resolve_alias},
  BuildConfig, ConfigDescriptor, ConfigResult,
};

pub const DEFAULT_BASE: &str = "/";

/// One-shot resolution of a [ConfigDescriptor] into a [BuildConfig]. Runs
/// synchronously before any build activity starts; errors propagate to the
/// caller and nothing is retried.
pub struct ConfigResolver {
  descriptor: ConfigDescriptor,
  plugins: Vec<Box<dyn BuildPlugin>>,
}

impl ConfigResolver {
  pub fn new(descriptor: ConfigDescriptor) -> Self {
    Self::with_plugins(descriptor, vec![])
  }

  pub fn with_plugins(descriptor: ConfigDescriptor, plugins: Vec<Box<dyn BuildPlugin>>) -> Self {
    packlet_tracing::enable_tracing_on_demand();
    Self {
      descriptor,
      plugins,
    }
  }

  #[instrument(skip_all)]
  pub fn resolve(self) -> ConfigResult<BuildConfig> {
    tracing::debug!("{:#?}", self.descriptor);

    let ConfigDescriptor {
      root,
      alias,
      define,
      base,
      on_warn,
    } = self.descriptor;

    let alias = resolve_alias(root.as_deref(), alias, &on_warn)?;
    let define = merge_define(define, &on_warn)?;
    let base = base.unwrap_or_else(|| DEFAULT_BASE.to_string());

    Ok(BuildConfig {
      plugins: self.plugins,
      alias,
      define,
      base,
    })
  }
}
