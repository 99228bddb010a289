//! Board-agnostic control logic for the Tempomat cruise-control trainer
//!
//! This crate contains all application logic that does not depend on
//! specific hardware or on the executor:
//!
//! - Vehicle physics model (position/velocity recurrence)
//! - Throttle and cruise-engagement control law
//! - Pedal sampling and cruise-toggle edge detection
//! - Display encodings (LED bank, seven-segment readout)
//! - Overload monitoring state machine and load-generator arithmetic
//! - Task timing configuration and priority-table validation

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod control;
pub mod display;
pub mod input;
pub mod model;
pub mod monitor;
pub mod sched;
