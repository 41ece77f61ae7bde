use tracing::debug;

/// A `[required]` control inside a form.
pub trait FormField {
  fn value(&self) -> String;
  fn set_error(&self, errored: bool);
}

/// Marks every blank field as errored and
/// clears the mark on filled ones. Every
/// field is visited even after the first
/// failure.
pub fn validate_form<F>(fields: &[F]) -> bool
where
  F: FormField
{
  let mut valid = true;

  for field in fields {
    let blank =
      field.value().trim().is_empty();
    field.set_error(blank);
    if blank {
      valid = false;
    }
  }

  debug!(
    fields = fields.len(),
    valid, "validated form"
  );
  valid
}
