/// Observer port for diagnostics raised by the core.
///
/// Recovered failures (unreachable catalog, corrupt cart snapshot) are
/// reported here instead of being surfaced to the caller.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
