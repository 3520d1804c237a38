mod plugin;
pub use plugin::*;
mod args;
pub use args::*;
mod context;
pub use context::*;

pub use async_trait;
