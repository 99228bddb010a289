//! Liveness token
//!
//! The dead-man's switch between the heartbeat producer and the watchdog.
//! A token is either present or absent; producing while one is already
//! pending collapses into a single token, and consuming clears it
//! atomically. The consumer side is singular: one watchdog waits on it
//! with a bounded timeout, and a timeout is the overload signal.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{with_timeout, Duration};

/// Binary presence signal with blocking-with-timeout consumption.
pub struct LivenessToken<M: RawMutex> {
    flag: Signal<M, ()>,
}

impl<M: RawMutex> LivenessToken<M> {
    /// A token that starts absent.
    pub const fn new() -> Self {
        Self {
            flag: Signal::new(),
        }
    }

    /// Make the token present. Idempotent: any number of unconsumed
    /// signals collapse into one pending token.
    pub fn signal(&self) {
        self.flag.signal(());
    }

    /// Take the token now if present, clearing it. Never blocks.
    pub fn try_consume(&self) -> bool {
        self.flag.try_take().is_some()
    }

    /// Wait until the token is present or `timeout` elapses. On success
    /// the token is cleared atomically; returns whether it was obtained.
    pub async fn wait_consume(&self, timeout: Duration) -> bool {
        with_timeout(timeout, self.flag.wait()).await.is_ok()
    }
}

impl<M: RawMutex> Default for LivenessToken<M> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_futures::block_on;
    use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

    type TestToken = LivenessToken<CriticalSectionRawMutex>;

    #[test]
    fn test_starts_absent() {
        let token: TestToken = LivenessToken::new();
        assert!(!token.try_consume());
    }

    #[test]
    fn test_signal_then_consume() {
        let token: TestToken = LivenessToken::new();
        token.signal();
        assert!(token.try_consume());
        // Consuming cleared it
        assert!(!token.try_consume());
    }

    #[test]
    fn test_rapid_signals_collapse_to_one_token() {
        let token: TestToken = LivenessToken::new();
        token.signal();
        token.signal();
        token.signal();
        assert!(token.try_consume());
        assert!(!token.try_consume());
    }

    #[test]
    fn test_wait_consume_obtains_pending_token() {
        let token: TestToken = LivenessToken::new();
        token.signal();
        assert!(block_on(token.wait_consume(Duration::from_millis(100))));
        assert!(!token.try_consume());
    }

    #[test]
    fn test_wait_consume_times_out_when_absent() {
        let token: TestToken = LivenessToken::new();
        assert!(!block_on(token.wait_consume(Duration::from_millis(20))));
    }

    #[test]
    fn test_wait_consume_sees_concurrent_signal() {
        use std::sync::Arc;

        let token: Arc<TestToken> = Arc::new(LivenessToken::new());
        let producer = {
            let token = Arc::clone(&token);
            std::thread::spawn(move || {
                std::thread::sleep(std::time::Duration::from_millis(10));
                token.signal();
            })
        };
        assert!(block_on(token.wait_consume(Duration::from_millis(500))));
        producer.join().unwrap();
    }

    #[test]
    fn test_recovers_after_timeout() {
        let token: TestToken = LivenessToken::new();
        assert!(!block_on(token.wait_consume(Duration::from_millis(20))));
        token.signal();
        assert!(block_on(token.wait_consume(Duration::from_millis(100))));
    }
}
