use rustc_hash::FxHashMap;
use serde_json::Value;

use crate::{ConfigError, ConfigResult, DefineItem, WarningHandler};

/// Define entries merge verbatim; values are never interpreted here. A
/// repeated identical entry is dropped with a warning, a contradictory one is
/// a hard error.
pub(crate) fn merge_define(
  items: Vec<DefineItem>,
  on_warn: &WarningHandler,
) -> ConfigResult<FxHashMap<String, Value>> {
  let mut merged: FxHashMap<String, Value> = FxHashMap::default();

  for item in items {
    match merged.get(&item.name) {
      Some(existing) if *existing != item.value => {
        return Err(ConfigError::conflicting_define(
          item.name,
          existing.to_string(),
          item.value.to_string(),
        ));
      }
      Some(_) => on_warn(ConfigError::duplicate_define(item.name)),
      None => {
        merged.insert(item.name, item.value);
      }
    }
  }

  Ok(merged)
}
