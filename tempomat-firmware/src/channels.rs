//! Inter-task channels
//!
//! Every cross-task link in the system, created once and alive for the
//! process lifetime. All channels use `CriticalSectionRawMutex` because
//! they are touched from both the thread executor and the interrupt
//! executors.
//!
//! Mailboxes are independent latest-value slots: a consumer reading
//! several of them in one release may see writes from different producer
//! releases. The control graph is built to tolerate that.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

use tempomat_channel::{BinaryHandshake, LivenessToken, Mailbox};

/// Gas pedal level, published by the input task every period
pub static GAS_PEDAL: Mailbox<CriticalSectionRawMutex, bool> = Mailbox::new();

/// Brake pedal level, published by the input task every period
pub static BRAKE_PEDAL: Mailbox<CriticalSectionRawMutex, bool> = Mailbox::new();

/// Cruise request toggle state, published by the input task every period
pub static CRUISE_REQUEST: Mailbox<CriticalSectionRawMutex, bool> = Mailbox::new();

/// Vehicle velocity snapshot (0.1 m/s), published by the vehicle task
pub static VELOCITY: Mailbox<CriticalSectionRawMutex, i16> = Mailbox::new();

/// Track position snapshot (0.1 m), published by the vehicle task
pub static POSITION: Mailbox<CriticalSectionRawMutex, u16> = Mailbox::new();

/// Cruise target velocity (0.1 m/s), snapshotted at request and again at
/// engagement
pub static TARGET_VELOCITY: Mailbox<CriticalSectionRawMutex, i16> = Mailbox::new();

/// Throttle command (0..=80), published by the control task
pub static THROTTLE: Mailbox<CriticalSectionRawMutex, u16> = Mailbox::new();

/// Heartbeat token: signalled by overload detection, consumed (with
/// timeout) only by the watchdog
pub static HEARTBEAT: LivenessToken<CriticalSectionRawMutex> = LivenessToken::new();

/// Boot rendezvous: the watchdog arms its timeout loop only after the
/// heartbeat producer's first release
pub static MONITOR_READY: BinaryHandshake<CriticalSectionRawMutex> = BinaryHandshake::new();
