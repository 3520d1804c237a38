use std::{collections::HashMap, path::Path};

use schemars::JsonSchema;
use serde::Deserialize;

use crate::impl_serde_default;

fn true_by_default() -> bool {
  true
}

#[derive(Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TestConfig {
  #[serde(default)]
  pub root: Option<String>,

  #[serde(default)]
  pub alias: Vec<AliasEntry>,

  #[serde(default)]
  pub define: Vec<DefineEntry>,

  #[serde(default)]
  pub base: Option<String>,

  #[serde(default)]
  pub builtins: Builtins,

  #[serde(default)]
  pub expect: Expect,
}

#[derive(Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AliasEntry {
  pub find: String,
  pub replacement: String,
}

#[derive(Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DefineEntry {
  pub name: String,
  pub value: serde_json::Value,
}

#[derive(Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Builtins {
  #[serde(default = "true_by_default")]
  pub framework: bool,

  #[serde(default)]
  pub inspect: InspectToggle,
}

#[derive(Deserialize, JsonSchema, Clone, Copy, PartialEq, Eq, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub enum InspectToggle {
  Off,
  Inert,
  #[default]
  On,
}

/// Expectations checked against the resolved configuration. Absent fields are
/// simply not asserted.
#[derive(Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Expect {
  #[serde(default)]
  pub error_code: Option<String>,

  #[serde(default)]
  pub plugins: Option<Vec<String>>,

  #[serde(default)]
  pub alias: Option<HashMap<String, String>>,

  #[serde(default)]
  pub define: Option<HashMap<String, serde_json::Value>>,

  #[serde(default)]
  pub base: Option<String>,

  #[serde(default)]
  pub warnings: Option<usize>,
}

impl_serde_default!(TestConfig);
impl_serde_default!(Builtins);
impl_serde_default!(Expect);

impl TestConfig {
  pub fn from_config_path(filepath: &Path) -> Self {
    serde_json::from_str(
      &std::fs::read_to_string(filepath).unwrap_or_else(|_| "{}".to_string()),
    )
    .unwrap()
  }
}
