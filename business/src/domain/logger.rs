/// Diagnostic logging port for the cart layer; adapters route messages to
/// the process-wide logging pipeline.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
