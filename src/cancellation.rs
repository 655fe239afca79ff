/// Cooperative cancellation for table generation
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Token signaling that an in-flight call should be abandoned.
///
/// The host may abort a query while a table is still producing rows. The
/// token is handed to [`Table::generate`](crate::plugin::Table::generate);
/// implementations doing substantial work should check it periodically and
/// return early once it reports cancelled. Cancellation is cooperative, the
/// adapter never preempts a running generation.
///
/// # Thread Safety
///
/// `CancellationToken` is `Clone + Send + Sync` and can be shared across
/// threads. Multiple calls to `cancel()` are safe and idempotent.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Create a token in the not-cancelled state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Signal cancellation.
    ///
    /// This method is idempotent - multiple calls are safe. All clones of
    /// this token observe the cancellation.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    /// Check whether cancellation has been signaled.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}
