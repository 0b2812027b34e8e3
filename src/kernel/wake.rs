// Wake flag signaling between ISRs and the main loop
//
// ISRs set atomic flags; the main loop consumes via try_wake().
// Independent flags so the tick timer and the console ISR can't
// swallow each other's wakeups. Uptime counts fixed 10ms ticks.

use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};

static WAKE_TIMER: AtomicBool = AtomicBool::new(false);
static WAKE_CONSOLE: AtomicBool = AtomicBool::new(false);
static UPTIME_TICKS: AtomicU32 = AtomicU32::new(0);

#[derive(Debug, Clone, Copy)]
pub struct WakeFlags {
    pub timer: bool,
    pub console: bool,
}

pub fn try_wake() -> Option<WakeFlags> {
    critical_section::with(|_| {
        let timer = WAKE_TIMER.load(Ordering::Relaxed);
        let console = WAKE_CONSOLE.load(Ordering::Relaxed);
        if !timer && !console {
            return None;
        }

        if timer {
            WAKE_TIMER.store(false, Ordering::Relaxed);
        }
        if console {
            WAKE_CONSOLE.store(false, Ordering::Relaxed);
        }

        Some(WakeFlags { timer, console })
    })
}

#[inline]
pub fn signal_timer() {
    WAKE_TIMER.store(true, Ordering::Release);
    UPTIME_TICKS.fetch_add(1, Ordering::Relaxed);
}

#[inline]
pub fn signal_console() {
    WAKE_CONSOLE.store(true, Ordering::Release);
}

pub fn uptime_ticks() -> u32 {
    UPTIME_TICKS.load(Ordering::Relaxed)
}

pub fn uptime_secs() -> u32 {
    uptime_ticks() / 100
}

#[inline]
pub fn wait_for_interrupt() {
    #[cfg(target_arch = "xtensa")]
    unsafe {
        core::arch::asm!("waiti 0", options(nomem, nostack));
    }

    #[cfg(not(target_arch = "xtensa"))]
    core::hint::spin_loop();
}
