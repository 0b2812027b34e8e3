// snes-pad entry point and main loop
//
// Boot sequence: logger -> clocks -> 10ms tick timer -> board -> console ISR
// Main loop: drain scheduler -> WFI -> translate wake flags -> repeat
//
// The console-facing shift register is served entirely from the GPIO
// interrupt; the loop only merges pad and host state into the live
// status word and keeps the log fed. UART0 carries both directions:
// esp-println writes the log on TX while HostLink owns RX for command
// frames, matching the single-cable setup of the original adapter.

#![no_std]
#![no_main]

use esp_backtrace as _;
use esp_hal::clock::CpuClock;
use esp_hal::gpio::Io;
use esp_hal::time::Duration;
use esp_hal::timer::timg::TimerGroup;
use esp_hal::timer::PeriodicTimer;
use esp_hal::uart::{self, Uart};
use log::info;

use core::cell::RefCell;
use critical_section::Mutex;

use snes_pad::board::{pins, Board};
use snes_pad::drivers::host::{HostLink, BAUD};
use snes_pad::drivers::input::PadSampler;
use snes_pad::drivers::shifter;
use snes_pad::kernel::wake::{self, signal_timer};
use snes_pad::kernel::{Job, Scheduler};
use snes_proto::ButtonSet;

esp_bootloader_esp_idf::esp_app_desc!();

const TICK_MS: u64 = 10;
const STATUS_INTERVAL_TICKS: u32 = 500; // 5 seconds in 10ms ticks

static TIMER0: Mutex<RefCell<Option<PeriodicTimer<'static, esp_hal::Blocking>>>> =
    Mutex::new(RefCell::new(None));

#[esp_hal::handler(priority = esp_hal::interrupt::Priority::Priority1)]
fn timer0_handler() {
    critical_section::with(|cs| {
        if let Some(timer) = TIMER0.borrow_ref_mut(cs).as_mut() {
            timer.clear_interrupt();
        }
    });
    signal_timer();
}

#[esp_hal::main]
fn main() -> ! {
    esp_println::logger::init_logger_from_env();
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    info!("booting...");
    info!(
        "console port: latch=GPIO{} clock=GPIO{} data=GPIO{}",
        pins::LATCH,
        pins::CLOCK,
        pins::DATA
    );

    let timg0 = TimerGroup::new(unsafe { peripherals.TIMG0.clone_unchecked() });
    let mut timer0 = PeriodicTimer::new(timg0.timer0);
    critical_section::with(|cs| {
        timer0.set_interrupt_handler(timer0_handler);
        timer0.start(Duration::from_millis(TICK_MS)).unwrap();
        timer0.listen();
        TIMER0.borrow_ref_mut(cs).replace(timer0);
    });

    let mut io = Io::new(unsafe { peripherals.IO_MUX.clone_unchecked() });
    io.set_interrupt_handler(shifter::console_isr);

    let uart0 = Uart::new(
        unsafe { peripherals.UART0.clone_unchecked() },
        uart::Config::default().with_baudrate(BAUD),
    )
    .unwrap()
    .with_rx(unsafe { peripherals.GPIO3.clone_unchecked() })
    .with_tx(unsafe { peripherals.GPIO1.clone_unchecked() });
    let (rx, _tx) = uart0.split();

    let board = Board::init(peripherals);
    shifter::install(board.console);
    info!("hardware initialized.");

    let mut pad = PadSampler::new(board.pad);
    let mut host = HostLink::new(rx);
    let mut sched = Scheduler::new();

    let mut live = ButtonSet::empty();
    let mut last_status_ticks: u32 = 0;
    let mut console_seen = false;

    info!("adapter ready, waiting for console and host.");

    loop {
        // drain all pending jobs (high tier first, FIFO within tier)
        while let Some(job) = sched.pop() {
            match job {
                Job::PollPad => {
                    if pad.poll().is_some() {
                        push_live(&mut live, &pad, &host);
                    }
                }

                Job::DrainHost => {
                    if host.poll().is_some() {
                        push_live(&mut live, &pad, &host);
                    }
                }

                Job::LogStatus => {
                    info!(
                        "up {}s, {} read cycles, word {:#06x}",
                        wake::uptime_secs(),
                        shifter::latch_count(),
                        live.word()
                    );
                }
            }
        }

        // wait for a wake event, then translate flags into jobs
        let Some(flags) = wake::try_wake() else {
            wake::wait_for_interrupt();
            continue;
        };

        if flags.timer {
            sched.push_unique(Job::PollPad);
            sched.push_unique(Job::DrainHost);

            let ticks = wake::uptime_ticks();
            if ticks.wrapping_sub(last_status_ticks) >= STATUS_INTERVAL_TICKS {
                last_status_ticks = ticks;
                sched.push_unique(Job::LogStatus);
            }
        }

        // the shift register needs no main-loop work; just note the
        // first read cycle so a missing console wire shows up in logs
        if flags.console && !console_seen {
            console_seen = true;
            info!("console started polling (latch seen)");
        }
    }
}

// ── Helpers ─────────────────────────────────────────────────────────────

fn push_live(live: &mut ButtonSet, pad: &PadSampler, host: &HostLink) {
    let merged = pad.state() | host.state();
    if merged != *live {
        *live = merged;
        shifter::set_word(merged);
    }
}
