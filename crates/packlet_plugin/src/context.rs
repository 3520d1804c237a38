/// Per-hook-call state handed to plugins. Carries nothing yet; hooks take it
/// by `&mut` so the seam can grow without breaking implementors.
#[derive(Debug, Default)]
pub struct Context {}

impl Context {
  pub fn new() -> Self {
    Self::default()
  }
}
