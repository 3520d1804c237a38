use std::path::{Path, PathBuf};

use packlet_resolver::Resolver;
use rustc_hash::FxHashMap;

use crate::{AliasItem, ConfigError, ConfigResult, WarningHandler};

/// Alias entries resolve to absolute targets; the keys stay unique. A
/// repeated identical entry is dropped with a warning, a contradictory one is
/// a hard error.
pub(crate) fn resolve_alias(
  root: Option<&Path>,
  items: Vec<AliasItem>,
  on_warn: &WarningHandler,
) -> ConfigResult<FxHashMap<String, PathBuf>> {
  let resolver = Resolver::with_root(root.map(Path::to_path_buf));
  let mut resolved: FxHashMap<String, PathBuf> = FxHashMap::default();

  for item in items {
    if item.find.is_empty() {
      return Err(ConfigError::invalid_alias_find(item.replacement));
    }

    let target = resolver.resolve(&item.find, &item.replacement)?;
    match resolved.get(&item.find) {
      Some(existing) if *existing != target => {
        return Err(ConfigError::conflicting_alias(
          item.find,
          existing.to_string_lossy(),
          target.to_string_lossy(),
        ));
      }
      Some(_) => on_warn(ConfigError::duplicate_alias(item.find)),
      None => {
        resolved.insert(item.find, target);
      }
    }
  }

  Ok(resolved)
}
