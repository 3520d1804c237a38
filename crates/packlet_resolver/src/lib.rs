use std::path::PathBuf;

use sugar_path::{AsPath, SugarPathBuf};

/// Resolves alias replacements against the project root. Resolution is pure
/// path math; the filesystem is never touched.
#[derive(Debug)]
pub struct Resolver {
  root: Option<PathBuf>,
}

impl Resolver {
  pub fn with_root(root: Option<PathBuf>) -> Self {
    Self { root }
  }

  pub fn root(&self) -> Option<&PathBuf> {
    self.root.as_ref()
  }

  /// Absolute replacements are normalized and passed through. Relative ones
  /// are joined under the root and require one to be defined.
  pub fn resolve(&self, find: &str, replacement: &str) -> packlet_error::Result<PathBuf> {
    if replacement.as_path().is_absolute() {
      return Ok(replacement.as_path().to_path_buf().into_normalize());
    }

    match &self.root {
      Some(root) => Ok(root.as_path().join(replacement).into_absolutize()),
      None => Err(packlet_error::Error::undefined_root(find, replacement)),
    }
  }
}

#[cfg(test)]
mod tests {
  use std::path::PathBuf;

  use super::Resolver;

  #[test]
  fn joins_relative_replacements_under_the_root() {
    let resolver = Resolver::with_root(Some(PathBuf::from("/proj")));
    assert_eq!(
      resolver.resolve("@", "./src").unwrap(),
      PathBuf::from("/proj/src")
    );
    assert_eq!(
      resolver.resolve("~", "../shared/src").unwrap(),
      PathBuf::from("/shared/src")
    );
  }

  #[test]
  fn passes_absolute_replacements_through() {
    let resolver = Resolver::with_root(None);
    assert_eq!(
      resolver.resolve("@", "/opt/lib/./src").unwrap(),
      PathBuf::from("/opt/lib/src")
    );
  }

  #[test]
  fn requires_a_root_for_relative_replacements() {
    let resolver = Resolver::with_root(None);
    let err = resolver.resolve("@", "./src").unwrap_err();
    assert_eq!(err.code(), packlet_error::error_code::RESOLUTION_ERROR);
  }
}
