//! Boot rendezvous
//!
//! A one-shot meeting point between two tasks. Mechanically this is the
//! same signal the liveness token is built on, but the contract differs:
//! a handshake is completed once and joined once, while the token is a
//! recurring heartbeat. Keeping the two as named types keeps call sites
//! honest about which protocol they take part in.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::signal::Signal;

/// One-shot rendezvous between a completing and a joining task.
pub struct BinaryHandshake<M: RawMutex> {
    ready: Signal<M, ()>,
}

impl<M: RawMutex> BinaryHandshake<M> {
    pub const fn new() -> Self {
        Self {
            ready: Signal::new(),
        }
    }

    /// Mark this side complete, releasing the joiner. Idempotent.
    pub fn complete(&self) {
        self.ready.signal(());
    }

    /// Wait until the other side has completed.
    pub async fn join(&self) {
        self.ready.wait().await;
    }

    /// Whether the handshake has completed and nobody joined yet.
    pub fn is_complete(&self) -> bool {
        self.ready.signaled()
    }
}

impl<M: RawMutex> Default for BinaryHandshake<M> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_futures::block_on;
    use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

    type TestHandshake = BinaryHandshake<CriticalSectionRawMutex>;

    #[test]
    fn test_join_after_complete_returns() {
        let handshake: TestHandshake = BinaryHandshake::new();
        handshake.complete();
        block_on(handshake.join());
    }

    #[test]
    fn test_complete_is_idempotent() {
        let handshake: TestHandshake = BinaryHandshake::new();
        handshake.complete();
        handshake.complete();
        assert!(handshake.is_complete());
        block_on(handshake.join());
        assert!(!handshake.is_complete());
    }

    #[test]
    fn test_join_blocks_until_completed() {
        use std::sync::Arc;

        let handshake: Arc<TestHandshake> = Arc::new(BinaryHandshake::new());
        let completer = {
            let handshake = Arc::clone(&handshake);
            std::thread::spawn(move || {
                std::thread::sleep(std::time::Duration::from_millis(10));
                handshake.complete();
            })
        };
        block_on(handshake.join());
        completer.join().unwrap();
    }
}
