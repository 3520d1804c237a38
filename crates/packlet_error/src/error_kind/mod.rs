use std::{
  fmt::Display,
  path::{Path, PathBuf},
};

use crate::utils::{format_quoted_strings, PathExt};
use crate::CWD;

pub mod error_code;

#[derive(Debug)]
pub enum ErrorKind {
  // --- Resolution
  UndefinedRoot {
    find: String,
    target: PathBuf,
  },
  InvalidAliasFind {
    replacement: String,
  },

  // --- Conflicts
  ConflictingAlias {
    find: String,
    first: String,
    second: String,
  },
  ConflictingDefine {
    name: String,
    first: String,
    second: String,
  },

  // --- Warnings
  DuplicateAlias {
    find: String,
  },
  DuplicateDefine {
    name: String,
  },

  /// Unrecoverable failure raised from plugin code. Emulates a plain
  /// `throw new Error(...)` coming out of a plugin hook.
  Panic {
    source: anyhow::Error,
  },
}

impl Display for ErrorKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ErrorKind::UndefinedRoot { find, target } => write!(
        f,
        "Could not resolve alias target \"{}\" for \"{find}\": project root directory is not defined.",
        target.may_display_relative(),
      ),
      ErrorKind::InvalidAliasFind { replacement } => write!(
        f,
        "Alias replacement \"{replacement}\" requires a non-empty find pattern."
      ),
      ErrorKind::ConflictingAlias { find, first, second } => write!(
        f,
        "Conflicting replacements for alias \"{find}\": {}.",
        format_quoted_strings(&[first, second]),
      ),
      ErrorKind::ConflictingDefine { name, first, second } => write!(
        f,
        "Conflicting values for define \"{name}\": {}.",
        format_quoted_strings(&[first, second]),
      ),
      ErrorKind::DuplicateAlias { find } => {
        write!(f, "Alias \"{find}\" is declared more than once; duplicate entries are ignored.")
      }
      ErrorKind::DuplicateDefine { name } => {
        write!(f, "Define \"{name}\" is declared more than once; duplicate entries are ignored.")
      }
      ErrorKind::Panic { source } => source.fmt(f),
    }
  }
}

impl ErrorKind {
  /// Shorten the file paths in messages by make them relative to CWD.
  pub fn to_readable_string(&self, cwd: impl AsRef<Path>) -> String {
    let cwd = cwd.as_ref().to_path_buf();
    CWD.set(&cwd, || self.to_string())
  }

  pub fn code(&self) -> &'static str {
    match self {
      ErrorKind::UndefinedRoot { .. } => error_code::RESOLUTION_ERROR,
      ErrorKind::InvalidAliasFind { .. } => error_code::RESOLUTION_ERROR,
      ErrorKind::ConflictingAlias { .. } => error_code::CONFLICT_ERROR,
      ErrorKind::ConflictingDefine { .. } => error_code::CONFLICT_ERROR,
      ErrorKind::DuplicateAlias { .. } => error_code::DUPLICATE_ENTRY,
      ErrorKind::DuplicateDefine { .. } => error_code::DUPLICATE_ENTRY,
      ErrorKind::Panic { .. } => error_code::PANIC,
    }
  }
}
