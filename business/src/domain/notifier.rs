/// Fire-and-forget channel for user-visible failure messages. The adapter
/// decides how a message reaches the shopper; no return value is consumed.
pub trait Notifier: Send + Sync {
    fn error(&self, message: &str);
}
