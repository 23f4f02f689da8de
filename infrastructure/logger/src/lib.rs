pub mod tracing_logger;
pub mod tracing_notifier;

pub use tracing_logger::TracingLogger;
pub use tracing_notifier::TracingNotifier;
