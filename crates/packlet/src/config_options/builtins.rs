use derivative::Derivative;
pub use packlet_plugin_framework::FrameworkOptions;
pub use packlet_plugin_inspect::InspectOptions;

#[derive(Derivative)]
#[derivative(Debug)]
pub struct BuiltinsOptions {
  /// None means disable the builtin
  pub framework: Option<FrameworkOptions>,
  /// None means disable the builtin. `Some` with `enabled: false` keeps the
  /// plugin in the sequence but inert.
  pub inspect: Option<InspectOptions>,
}

impl Default for BuiltinsOptions {
  fn default() -> Self {
    Self {
      framework: Some(Default::default()),
      inspect: Some(Default::default()),
    }
  }
}
