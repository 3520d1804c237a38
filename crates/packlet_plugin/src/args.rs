pub struct TransformArgs<'a> {
  pub id: &'a str,
  pub code: &'a String,
}
