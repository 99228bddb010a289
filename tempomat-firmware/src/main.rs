//! Tempomat - Cruise Control Trainer Firmware
//!
//! Seven cooperating periodic tasks on an RP2040 lab kit: pedal sampling,
//! throttle control, a deterministic vehicle model and a display, plus a
//! watchdog subsystem that detects schedule overrun under operator-
//! injected synthetic load.
//!
//! Preemption is realized with three executor levels. The watchdog runs
//! on the highest so its timeout check can never be starved; the load
//! generator runs above the control graph so it can actually starve it;
//! everything else shares the thread executor. The full per-task priority
//! table is validated against the required orderings before any task is
//! spawned.

#![no_std]
#![no_main]

use cortex_m_rt::entry;
use defmt::*;
use embassy_executor::{Executor, InterruptExecutor};
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use tempomat_core::config::Timing;
use tempomat_core::sched::{task_set, validate};

use crate::board::{Board, SharedLeds};

mod board;
mod channels;
mod tasks;

/// Watchdog executor - nothing in the system preempts it
static EXECUTOR_WATCHDOG: InterruptExecutor = InterruptExecutor::new();

/// Load generator executor - preempts the whole control graph
static EXECUTOR_LOAD: InterruptExecutor = InterruptExecutor::new();

/// Thread executor for the control graph and the heartbeat producer
static EXECUTOR_GRAPH: StaticCell<Executor> = StaticCell::new();

/// Status LEDs shared between the control graph and the watchdog alarm
static LEDS: StaticCell<SharedLeds> = StaticCell::new();

#[interrupt]
unsafe fn SWI_IRQ_1() {
    EXECUTOR_WATCHDOG.on_interrupt()
}

#[interrupt]
unsafe fn SWI_IRQ_0() {
    EXECUTOR_LOAD.on_interrupt()
}

#[entry]
fn main() -> ! {
    info!("Tempomat firmware starting...");

    let p = embassy_rp::init(Default::default());

    let timing = Timing::default();
    unwrap!(validate(&task_set(&timing)));
    info!("Task table validated");

    // Channels are static and already live; board I/O comes up before any
    // task is spawned.
    let board = Board::init(p);
    let leds: &'static SharedLeds = LEDS.init(SharedLeds::new(board.status_leds));

    // Watchdog level: above everything else in the system
    interrupt::SWI_IRQ_1.set_priority(Priority::P2);
    let watchdog_spawner = EXECUTOR_WATCHDOG.start(interrupt::SWI_IRQ_1);
    unwrap!(watchdog_spawner.spawn(tasks::watchdog::watchdog_task(leds, timing)));

    // Load generator level: preempts the thread executor, not the watchdog
    interrupt::SWI_IRQ_0.set_priority(Priority::P3);
    let load_spawner = EXECUTOR_LOAD.start(interrupt::SWI_IRQ_0);
    unwrap!(load_spawner.spawn(tasks::extra_load::extra_load_task(
        board.load_switches,
        timing
    )));

    // Control graph and the heartbeat producer
    let executor = EXECUTOR_GRAPH.init(Executor::new());
    executor.run(|spawner| {
        unwrap!(spawner.spawn(tasks::input::input_task(board.pedals, timing)));
        unwrap!(spawner.spawn(tasks::control::control_task(leds, timing)));
        unwrap!(spawner.spawn(tasks::vehicle::vehicle_task(timing)));
        unwrap!(spawner.spawn(tasks::display::display_task(
            board.led_bank,
            board.segments,
            leds,
            timing
        )));
        unwrap!(spawner.spawn(tasks::heartbeat::heartbeat_task(timing)));
    });
}
