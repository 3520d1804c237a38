use std::{
  path::{Path, PathBuf},
  sync::{Arc, Mutex},
};

use packlet::{
  AliasItem, BuiltinsOptions, ConfigError, ConfigOptions, DefineItem, FrameworkOptions,
  InspectOptions,
};

use crate::{InspectToggle, TestConfig};

pub struct Tester {
  pub config: TestConfig,
  pub warnings: Arc<Mutex<Vec<ConfigError>>>,
}

impl Tester {
  pub fn from_config_path(filepath: &Path) -> Self {
    let test_config = TestConfig::from_config_path(filepath);
    Self {
      config: test_config,
      warnings: Default::default(),
    }
  }

  pub fn config_options(&self) -> ConfigOptions {
    let warning_collector = self.warnings.clone();
    ConfigOptions {
      root: self.config.root.clone().map(PathBuf::from),
      alias: self
        .config
        .alias
        .iter()
        .map(|entry| AliasItem {
          find: entry.find.clone(),
          replacement: entry.replacement.clone(),
        })
        .collect(),
      define: self
        .config
        .define
        .iter()
        .map(|entry| DefineItem {
          name: entry.name.clone(),
          value: entry.value.clone(),
        })
        .collect(),
      base: self.config.base.clone(),
      on_warn: Arc::new(move |err| {
        warning_collector.lock().unwrap().push(err);
      }),
      builtins: BuiltinsOptions {
        framework: self
          .config
          .builtins
          .framework
          .then(FrameworkOptions::default),
        inspect: match self.config.builtins.inspect {
          InspectToggle::Off => None,
          InspectToggle::Inert => Some(InspectOptions { enabled: false }),
          InspectToggle::On => Some(InspectOptions::default()),
        },
      },
    }
  }
}
