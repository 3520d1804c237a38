use std::path::PathBuf;

use testing_macros::fixture;
mod common;

use crate::common::check_fixture;

#[fixture("./tests/fixtures/**/test.config.json")]
fn test(path: PathBuf) {
  check_fixture(&path)
}
