use std::{borrow::Cow, path::Path};

use sugar_path::SugarPath;

use crate::CWD;

pub fn format_quoted_strings(list: &[impl AsRef<str>]) -> String {
  debug_assert!(!list.is_empty());
  let mut quoted = list
    .iter()
    .map(|item| format!("\"{}\"", item.as_ref()))
    .collect::<Vec<_>>();
  if quoted.len() == 1 {
    quoted.remove(0)
  } else {
    let last = quoted.pop().unwrap();
    format!("{} and {}", quoted.join(", "), last)
  }
}

pub trait PathExt {
  fn may_display_relative(&self) -> Cow<str>;
}

impl PathExt for Path {
  fn may_display_relative(&self) -> Cow<str> {
    let path = if CWD.is_set() && self.is_absolute() {
      CWD.with(|cwd| self.relative(cwd))
    } else {
      return self.to_string_lossy();
    };
    Cow::Owned(path.display().to_string())
  }
}

#[cfg(test)]
mod tests {
  use std::path::{Path, PathBuf};

  use super::{format_quoted_strings, PathExt};
  use crate::CWD;

  #[test]
  fn quotes_and_joins() {
    assert_eq!(format_quoted_strings(&["a"]), "\"a\"");
    assert_eq!(format_quoted_strings(&["a", "b"]), "\"a\" and \"b\"");
    assert_eq!(format_quoted_strings(&["a", "b", "c"]), "\"a\", \"b\" and \"c\"");
  }

  #[test]
  fn displays_relative_to_scoped_cwd() {
    let cwd = PathBuf::from("/proj");
    CWD.set(&cwd, || {
      assert_eq!(Path::new("/proj/src").may_display_relative(), "src");
    });
    assert_eq!(Path::new("./src").may_display_relative(), "./src");
  }
}
