mod config_options;
mod resolve;
pub use {
  config_options::{BuiltinsOptions, ConfigOptions},
  packlet_core::{
    default_warning_handler, AliasItem, BuildConfig, ConfigError, ConfigResult, DefineItem,
    PluginDriver, SharedPluginDriver, WarningHandler, DEFAULT_BASE,
  },
  packlet_plugin::BuildPlugin,
  packlet_plugin_framework::FrameworkOptions,
  packlet_plugin_inspect::InspectOptions,
  resolve::{resolve_config, resolve_config_with_plugins},
};
