use business::domain::notifier::Notifier;
use tracing::warn;

/// Server-side stand-in for the storefront's toast channel: user-facing
/// cart messages land on a dedicated tracing target.
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn error(&self, message: &str) {
        warn!(target: "Notice -- ", "{}", message);
    }
}
