use std::{borrow::Cow, fmt::Debug};

use crate::{Context, TransformArgs};

pub type TransformOutput = packlet_error::Result<Option<String>>;
pub type BannerOutput = packlet_error::Result<Option<String>>;
pub type PluginName<'a> = Cow<'a, str>;

/// A unit of build-pipeline extension. Resolved configurations carry plugins
/// as opaque ordered handles; the build engine drives the hooks.
#[async_trait::async_trait]
pub trait BuildPlugin: Debug + Send + Sync {
  fn name(&self) -> PluginName;

  /// Rewrite the source of one module. `Ok(None)` leaves it untouched.
  async fn transform(&self, _ctx: &mut Context, _args: &mut TransformArgs) -> TransformOutput {
    Ok(None)
  }

  /// Contribute a snippet prepended to emitted entry files.
  async fn banner(&self, _ctx: &mut Context) -> BannerOutput {
    Ok(None)
  }
}
