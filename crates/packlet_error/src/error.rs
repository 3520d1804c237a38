use std::{fmt::Display, path::Path};

use crate::ErrorKind;

#[derive(Debug)]
pub struct Error {
  contexts: Vec<String>,
  pub kind: ErrorKind,
}

impl PartialEq for Error {
  fn eq(&self, other: &Self) -> bool {
    self.kind.to_string().eq(&other.kind.to_string())
  }
}

impl Eq for Error {}

impl PartialOrd for Error {
  fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
    Some(self.cmp(other))
  }
}

impl Ord for Error {
  fn cmp(&self, other: &Self) -> std::cmp::Ordering {
    self.kind.to_string().cmp(&other.kind.to_string())
  }
}

impl Error {
  fn with_kind(kind: ErrorKind) -> Self {
    Self {
      contexts: vec![],
      kind,
    }
  }

  pub fn context(mut self, context: String) -> Self {
    self.contexts.push(context);
    self
  }

  pub fn code(&self) -> &'static str {
    self.kind.code()
  }

  pub fn undefined_root(find: impl Into<String>, target: impl AsRef<Path>) -> Self {
    Self::with_kind(ErrorKind::UndefinedRoot {
      find: find.into(),
      target: target.as_ref().to_path_buf(),
    })
  }

  pub fn invalid_alias_find(replacement: impl Into<String>) -> Self {
    Self::with_kind(ErrorKind::InvalidAliasFind {
      replacement: replacement.into(),
    })
  }

  pub fn conflicting_alias(
    find: impl Into<String>,
    first: impl Into<String>,
    second: impl Into<String>,
  ) -> Self {
    Self::with_kind(ErrorKind::ConflictingAlias {
      find: find.into(),
      first: first.into(),
      second: second.into(),
    })
  }

  pub fn conflicting_define(
    name: impl Into<String>,
    first: impl Into<String>,
    second: impl Into<String>,
  ) -> Self {
    Self::with_kind(ErrorKind::ConflictingDefine {
      name: name.into(),
      first: first.into(),
      second: second.into(),
    })
  }

  pub fn duplicate_alias(find: impl Into<String>) -> Self {
    Self::with_kind(ErrorKind::DuplicateAlias { find: find.into() })
  }

  pub fn duplicate_define(name: impl Into<String>) -> Self {
    Self::with_kind(ErrorKind::DuplicateDefine { name: name.into() })
  }

  pub fn panic(msg: String) -> Self {
    anyhow::format_err!(msg).into()
  }
}

impl std::convert::From<anyhow::Error> for Error {
  fn from(value: anyhow::Error) -> Self {
    Self::with_kind(ErrorKind::Panic { source: value })
  }
}

impl std::error::Error for Error {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match &self.kind {
      ErrorKind::Panic { source, .. } => Some(source.as_ref()),
      _ => None,
    }
  }
}

impl Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    for ctx in self.contexts.iter().rev() {
      writeln!(f, "{}: {}", ansi_term::Color::Yellow.paint("context"), ctx)?;
    }

    self.kind.fmt(f)
  }
}
