use std::path::PathBuf;

use derivative::Derivative;
use packlet_core::{default_warning_handler, AliasItem, DefineItem, WarningHandler};

mod builtins;
pub use builtins::*;

#[derive(Derivative)]
#[derivative(Debug)]
pub struct ConfigOptions {
  pub root: Option<PathBuf>,
  pub alias: Vec<AliasItem>,
  pub define: Vec<DefineItem>,
  pub base: Option<String>,
  #[derivative(Debug = "ignore")]
  pub on_warn: WarningHandler,
  pub builtins: BuiltinsOptions,
}

impl Default for ConfigOptions {
  fn default() -> Self {
    Self {
      root: None,
      alias: Default::default(),
      define: Default::default(),
      base: None,
      on_warn: default_warning_handler(),
      builtins: Default::default(),
    }
  }
}
