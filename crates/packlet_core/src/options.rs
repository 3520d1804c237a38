use std::{path::PathBuf, sync::Arc};

use derivative::Derivative;

use crate::WarningHandler;

/// One alias rewrite rule: import specifiers starting with `find` map into
/// `replacement`.
#[derive(Debug, Clone)]
pub struct AliasItem {
  pub find: String,
  pub replacement: String,
}

/// One compile-time global substitution. The value is carried verbatim; the
/// engine owns the actual source rewriting.
#[derive(Debug, Clone)]
pub struct DefineItem {
  pub name: String,
  pub value: serde_json::Value,
}

pub fn default_warning_handler() -> WarningHandler {
  Arc::new(|err| {
    eprintln!("{}", err);
  })
}

#[derive(Derivative)]
#[derivative(Debug)]
pub struct ConfigDescriptor {
  pub root: Option<PathBuf>,
  pub alias: Vec<AliasItem>,
  pub define: Vec<DefineItem>,
  pub base: Option<String>,
  #[derivative(Debug = "ignore")]
  pub on_warn: WarningHandler,
}

impl Default for ConfigDescriptor {
  fn default() -> Self {
    Self {
      root: None,
      alias: Default::default(),
      define: Default::default(),
      base: None,
      on_warn: default_warning_handler(),
    }
  }
}
