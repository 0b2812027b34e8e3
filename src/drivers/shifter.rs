//! Console read-cycle service.
//!
//! The SNES clocks bits out at roughly 12us, far too fast to bounce
//! through the main loop, so latch and clock edges are served directly
//! from the GPIO interrupt. The handler owns the console pins and the
//! shift engine behind a critical-section mutex; the main loop only
//! swaps the live status word in through [`set_word`].

use core::cell::RefCell;
use core::sync::atomic::{AtomicU16, AtomicU32, Ordering};

use critical_section::Mutex;
use esp_hal::gpio::{Event, Level};

use snes_proto::{ButtonSet, ShiftEngine};

use crate::board::ConsoleHw;
use crate::kernel::wake;

struct Service {
    hw: ConsoleHw,
    engine: ShiftEngine,
}

static SERVICE: Mutex<RefCell<Option<Service>>> = Mutex::new(RefCell::new(None));

// Written by the main loop, read at latch time; atomic so the ISR
// never waits on the main loop.
static LIVE_WORD: AtomicU16 = AtomicU16::new(0);
static LATCHES: AtomicU32 = AtomicU32::new(0);

/// Take ownership of the console pins and enable latch/clock edge
/// interrupts. [`console_isr`] must already be registered on `Io`.
pub fn install(mut hw: ConsoleHw) {
    hw.latch.listen(Event::RisingEdge);
    hw.clock.listen(Event::RisingEdge);
    critical_section::with(|cs| {
        SERVICE.borrow_ref_mut(cs).replace(Service {
            hw,
            engine: ShiftEngine::new(),
        });
    });
}

/// Publish the status word for the next read cycle.
pub fn set_word(set: ButtonSet) {
    LIVE_WORD.store(set.word(), Ordering::Release);
}

/// Read cycles served since boot.
pub fn latch_count() -> u32 {
    LATCHES.load(Ordering::Relaxed)
}

#[esp_hal::handler(priority = esp_hal::interrupt::Priority::Priority3)]
pub fn console_isr() {
    critical_section::with(|cs| {
        let mut service = SERVICE.borrow_ref_mut(cs);
        let Some(service) = service.as_mut() else {
            return;
        };

        if service.hw.latch.is_interrupt_set() {
            service.hw.latch.clear_interrupt();
            let set = ButtonSet::from_bits_truncate(LIVE_WORD.load(Ordering::Acquire));
            let high = service.engine.latch(set);
            drive(&mut service.hw, high);
            LATCHES.fetch_add(1, Ordering::Relaxed);
            wake::signal_console();
        }

        if service.hw.clock.is_interrupt_set() {
            service.hw.clock.clear_interrupt();
            let high = service.engine.clock();
            drive(&mut service.hw, high);
        }
    });
}

fn drive(hw: &mut ConsoleHw, high: bool) {
    hw.data
        .set_level(if high { Level::High } else { Level::Low });
}
