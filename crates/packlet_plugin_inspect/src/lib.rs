use packlet_plugin::{BannerOutput, BuildPlugin, Context, PluginName, TransformArgs, TransformOutput};

pub const INSPECT_REGISTRY: &str = "globalThis.__PACKLET_INSPECT__ ||= { modules: [] };";

#[derive(Debug)]
pub struct InspectOptions {
  /// With `enabled: false` the plugin stays in the resolved sequence but
  /// every hook is inert.
  pub enabled: bool,
}

impl Default for InspectOptions {
  fn default() -> Self {
    Self { enabled: true }
  }
}

/// Dev inspection: bootstraps a module registry on the global object and
/// instruments every transformed module to record itself there.
#[derive(Debug)]
pub struct InspectPlugin {
  options: InspectOptions,
}

impl InspectPlugin {
  pub fn new_boxed(options: InspectOptions) -> Box<dyn BuildPlugin> {
    Box::new(Self { options })
  }
}

#[async_trait::async_trait]
impl BuildPlugin for InspectPlugin {
  fn name(&self) -> PluginName {
    std::borrow::Cow::Borrowed("builtin:inspect")
  }

  async fn banner(&self, _ctx: &mut Context) -> BannerOutput {
    if !self.options.enabled {
      return Ok(None);
    }
    Ok(Some(INSPECT_REGISTRY.to_string()))
  }

  async fn transform(&self, _ctx: &mut Context, args: &mut TransformArgs) -> TransformOutput {
    if !self.options.enabled {
      return Ok(None);
    }

    let id = serde_json::to_string(args.id)
      .map_err(|err| packlet_error::Error::panic(err.to_string()))?;
    Ok(Some(format!(
      "{}\nglobalThis.__PACKLET_INSPECT__?.modules.push({id});\n",
      args.code
    )))
  }
}
