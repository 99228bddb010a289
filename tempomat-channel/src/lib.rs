//! Inter-task channel primitives
//!
//! Three small types carry every cross-task interaction in the system:
//!
//! - [`Mailbox`] - single-slot, latest-value, non-blocking state exchange.
//!   Every producer/consumer link in the control graph is one of these.
//! - [`LivenessToken`] - a binary presence signal consumed with a timeout;
//!   the dead-man's switch between the heartbeat producer and the watchdog.
//! - [`BinaryHandshake`] - a one-shot rendezvous, used at boot.
//!
//! The token and the handshake share their mechanics but not their
//! meaning, so they are separate named types.
//!
//! All types are generic over an `embassy-sync` [`RawMutex`], so the same
//! code runs under a std critical section in host tests and under
//! `CriticalSectionRawMutex` in firmware, where channels are shared across
//! interrupt priority levels.
//!
//! [`RawMutex`]: embassy_sync::blocking_mutex::raw::RawMutex

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod handshake;
pub mod mailbox;
pub mod token;

pub use handshake::BinaryHandshake;
pub use mailbox::Mailbox;
pub use token::LivenessToken;
