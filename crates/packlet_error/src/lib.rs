use std::path::PathBuf;

mod error;
pub use error::*;
mod error_kind;
pub use error_kind::*;
mod utils;
pub use utils::PathExt;

scoped_tls::scoped_thread_local!(pub static CWD: PathBuf);

pub type Result<T> = std::result::Result<T, Error>;
pub use anyhow;
pub use anyhow::format_err;
