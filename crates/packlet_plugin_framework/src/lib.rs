use packlet_plugin::{BuildPlugin, Context, PluginName, TransformArgs, TransformOutput};

#[derive(Debug)]
pub struct FrameworkOptions {
  pub extensions: Vec<String>,
}

impl Default for FrameworkOptions {
  fn default() -> Self {
    Self {
      extensions: vec![".sfc".to_string()],
    }
  }
}

/// Framework integration: compiles single-file components into plain ES
/// modules the engine can bundle like any other source.
#[derive(Debug)]
pub struct FrameworkPlugin {
  options: FrameworkOptions,
}

impl FrameworkPlugin {
  pub fn new_boxed(options: FrameworkOptions) -> Box<dyn BuildPlugin> {
    Box::new(Self { options })
  }
}

#[async_trait::async_trait]
impl BuildPlugin for FrameworkPlugin {
  fn name(&self) -> PluginName {
    std::borrow::Cow::Borrowed("builtin:framework")
  }

  async fn transform(&self, _ctx: &mut Context, args: &mut TransformArgs) -> TransformOutput {
    if !self
      .options
      .extensions
      .iter()
      .any(|ext| args.id.ends_with(ext.as_str()))
    {
      return Ok(None);
    }

    let template = serde_json::to_string(args.code.as_str())
      .map_err(|err| packlet_error::Error::panic(err.to_string()))?;
    Ok(Some(format!("export default {{ template: {template} }};\n")))
  }
}

#[cfg(test)]
mod tests {
  use packlet_plugin::{BuildPlugin, Context, TransformArgs};

  use super::{FrameworkOptions, FrameworkPlugin};

  #[tokio::test]
  async fn compiles_matching_components() {
    let plugin = FrameworkPlugin::new_boxed(FrameworkOptions::default());
    let code = "<div>hi</div>".to_string();
    let out = plugin
      .transform(
        &mut Context::new(),
        &mut TransformArgs {
          id: "/proj/src/App.sfc",
          code: &code,
        },
      )
      .await
      .unwrap();
    assert_eq!(
      out.as_deref(),
      Some("export default { template: \"<div>hi</div>\" };\n")
    );
  }

  #[tokio::test]
  async fn leaves_other_modules_untouched() {
    let plugin = FrameworkPlugin::new_boxed(FrameworkOptions::default());
    let code = "export const n = 1;".to_string();
    let out = plugin
      .transform(
        &mut Context::new(),
        &mut TransformArgs {
          id: "/proj/src/main.js",
          code: &code,
        },
      )
      .await
      .unwrap();
    assert_eq!(out, None);
  }
}
