//! Lab-kit board I/O
//!
//! Pin assignments and thin drivers for the trainer hardware: pedal
//! buttons and load switches on GPIO, three discrete status LEDs, and two
//! bit-banged 74HC595 shift-register chains for the 24-LED position bar
//! and the four-digit seven-segment readout.

use core::cell::RefCell;

use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::Peripherals;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;

use tempomat_core::display::segment_glyph;
use tempomat_core::monitor::load_level;

/// Pedal buttons. Push buttons are wired active-low with pull-ups; the
/// cruise toggle is exposed as its raw line because the sampler
/// edge-detects it.
pub struct PedalInputs {
    gas: Input<'static>,
    brake: Input<'static>,
    cruise: Input<'static>,
}

impl PedalInputs {
    pub fn gas_pressed(&self) -> bool {
        self.gas.is_low()
    }

    pub fn brake_pressed(&self) -> bool {
        self.brake.is_low()
    }

    /// Raw cruise line level: idle high, low while held.
    pub fn cruise_line(&self) -> bool {
        self.cruise.is_high()
    }
}

/// The eight slide switches selecting the synthetic load level,
/// most significant switch first.
pub struct LoadSwitches {
    pins: [Input<'static>; 8],
}

impl LoadSwitches {
    pub fn level(&self) -> u8 {
        let mut bits = [false; 8];
        for (bit, pin) in bits.iter_mut().zip(&self.pins) {
            *bit = pin.is_high();
        }
        load_level(bits)
    }
}

/// Discrete status LEDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StatusLed {
    /// Green: gas pedal pressed
    Gas,
    /// Yellow: cruise engaged
    Cruise,
    /// Red: brake pedal pressed
    Brake,
}

pub struct StatusLeds {
    green: Output<'static>,
    yellow: Output<'static>,
    red: Output<'static>,
}

impl StatusLeds {
    fn set(&mut self, led: StatusLed, on: bool) {
        let pin = match led {
            StatusLed::Gas => &mut self.green,
            StatusLed::Cruise => &mut self.yellow,
            StatusLed::Brake => &mut self.red,
        };
        if on {
            pin.set_high();
        } else {
            pin.set_low();
        }
    }

    fn set_all(&mut self, on: bool) {
        self.set(StatusLed::Gas, on);
        self.set(StatusLed::Cruise, on);
        self.set(StatusLed::Brake, on);
    }
}

/// Status LEDs shared across executor priority levels: the control and
/// display tasks drive them from the thread executor while the watchdog
/// flips the overload alarm from its interrupt executor. Writes are a
/// single GPIO set inside a critical section.
pub struct SharedLeds {
    inner: Mutex<CriticalSectionRawMutex, RefCell<StatusLeds>>,
}

impl SharedLeds {
    pub fn new(leds: StatusLeds) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(leds)),
        }
    }

    pub fn set(&self, led: StatusLed, on: bool) {
        self.inner.lock(|leds| leds.borrow_mut().set(led, on));
    }

    /// The all-on / all-off overload alarm pattern.
    pub fn set_all(&self, on: bool) {
        self.inner.lock(|leds| leds.borrow_mut().set_all(on));
    }
}

/// Bit-banged 74HC595 chain. Bits shift out most significant first and
/// appear on the outputs only on the latch pulse, so a partially shifted
/// frame is never visible.
struct ShiftRegister {
    data: Output<'static>,
    clock: Output<'static>,
    latch: Output<'static>,
    bits: u8,
}

impl ShiftRegister {
    fn new(data: Output<'static>, clock: Output<'static>, latch: Output<'static>, bits: u8) -> Self {
        Self {
            data,
            clock,
            latch,
            bits,
        }
    }

    fn write(&mut self, value: u32) {
        for i in (0..self.bits).rev() {
            if value >> i & 1 == 1 {
                self.data.set_high();
            } else {
                self.data.set_low();
            }
            self.clock.set_high();
            self.clock.set_low();
        }
        self.latch.set_high();
        self.latch.set_low();
    }
}

/// The 24-LED position bar.
pub struct LedBank {
    chain: ShiftRegister,
}

impl LedBank {
    pub fn write(&mut self, bits: u32) {
        self.chain.write(bits);
    }
}

/// Four-digit seven-segment readout.
pub struct SegmentDisplay {
    chain: ShiftRegister,
}

impl SegmentDisplay {
    /// Render up to four characters, left aligned, blank padded.
    pub fn write(&mut self, text: &str) {
        let mut chars = text.chars();
        let mut frame = 0u32;
        for _ in 0..4 {
            let glyph = segment_glyph(chars.next().unwrap_or(' '));
            frame = frame << 8 | glyph as u32;
        }
        self.chain.write(frame);
    }
}

/// All board resources, split by owning task.
pub struct Board {
    pub pedals: PedalInputs,
    pub load_switches: LoadSwitches,
    pub status_leds: StatusLeds,
    pub led_bank: LedBank,
    pub segments: SegmentDisplay,
}

impl Board {
    pub fn init(p: Peripherals) -> Self {
        Self {
            pedals: PedalInputs {
                brake: Input::new(p.PIN_5, Pull::Up),
                cruise: Input::new(p.PIN_6, Pull::Up),
                gas: Input::new(p.PIN_7, Pull::Up),
            },
            load_switches: LoadSwitches {
                pins: [
                    Input::new(p.PIN_8, Pull::Down),
                    Input::new(p.PIN_9, Pull::Down),
                    Input::new(p.PIN_10, Pull::Down),
                    Input::new(p.PIN_11, Pull::Down),
                    Input::new(p.PIN_12, Pull::Down),
                    Input::new(p.PIN_13, Pull::Down),
                    Input::new(p.PIN_14, Pull::Down),
                    Input::new(p.PIN_15, Pull::Down),
                ],
            },
            status_leds: StatusLeds {
                green: Output::new(p.PIN_16, Level::Low),
                yellow: Output::new(p.PIN_17, Level::Low),
                red: Output::new(p.PIN_18, Level::Low),
            },
            led_bank: LedBank {
                chain: ShiftRegister::new(
                    Output::new(p.PIN_19, Level::Low),
                    Output::new(p.PIN_20, Level::Low),
                    Output::new(p.PIN_21, Level::Low),
                    24,
                ),
            },
            segments: SegmentDisplay {
                chain: ShiftRegister::new(
                    Output::new(p.PIN_22, Level::Low),
                    Output::new(p.PIN_26, Level::Low),
                    Output::new(p.PIN_27, Level::Low),
                    32,
                ),
            },
        }
    }
}
