//! Console events emitted while actions run.

/// Receives progress messages from the drivers
///
/// Banners bracket the output of external processes so that the output of
/// several profiles stays visually separated.
pub trait Reporter {
  /// Section marker such as `BEGIN BUILD OUTPUT (DEBUG)`
  fn banner(&self, message: &str);

  fn info(&self, message: &str);

  fn success(&self, message: &str);

  /// A non-fatal failure that does not stop execution
  fn failure(&self, message: &str);
}
