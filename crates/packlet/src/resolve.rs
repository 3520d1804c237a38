use packlet_core::{BuildConfig, ConfigDescriptor, ConfigResolver, ConfigResult};
use packlet_plugin::BuildPlugin;
use packlet_plugin_framework::FrameworkPlugin;
use packlet_plugin_inspect::InspectPlugin;

use crate::ConfigOptions;

/// Resolve a configuration description into the normalized [BuildConfig] the
/// build engine consumes.
pub fn resolve_config(options: ConfigOptions) -> ConfigResult<BuildConfig> {
  resolve_config_with_plugins(options, vec![])
}

/// Like [resolve_config], with caller-supplied plugins placed ahead of the
/// built-in ones.
pub fn resolve_config_with_plugins(
  options: ConfigOptions,
  mut plugins: Vec<Box<dyn BuildPlugin>>,
) -> ConfigResult<BuildConfig> {
  let mut builtin_plugins: Vec<Box<dyn BuildPlugin>> = vec![];

  if let Some(framework) = options.builtins.framework {
    builtin_plugins.push(FrameworkPlugin::new_boxed(framework));
  }
  if let Some(inspect) = options.builtins.inspect {
    builtin_plugins.push(InspectPlugin::new_boxed(inspect));
  }

  plugins.extend(builtin_plugins);

  ConfigResolver::with_plugins(
    ConfigDescriptor {
      root: options.root,
      alias: options.alias,
      define: options.define,
      base: options.base,
      on_warn: options.on_warn,
    },
    plugins,
  )
  .resolve()
}
