//! Host command link.
//!
//! Hosts drive the pad over UART0 at 115 200 baud with 4-byte
//! little-endian command frames (see [`snes_proto::wire`]). The RX
//! fifo is drained non-blocking from the 10ms tick. A commanded state
//! sticks until the next frame, so hosts send an explicit zero mask to
//! release.

use esp_hal::uart::UartRx;
use esp_hal::Blocking;
use log::{debug, warn};

use snes_proto::{ButtonSet, FrameDecoder};

pub const BAUD: u32 = 115_200;

pub struct HostLink {
    rx: UartRx<'static, Blocking>,
    decoder: FrameDecoder,
    held: ButtonSet,
}

impl HostLink {
    pub fn new(rx: UartRx<'static, Blocking>) -> Self {
        Self {
            rx,
            decoder: FrameDecoder::new(),
            held: ButtonSet::empty(),
        }
    }

    /// Last commanded state.
    pub fn state(&self) -> ButtonSet {
        self.held
    }

    /// Drain whatever the fifo holds; returns the newest completed
    /// frame, if any arrived.
    pub fn poll(&mut self) -> Option<ButtonSet> {
        let mut buf = [0u8; 64];
        let mut latest = None;

        loop {
            let n = match self.rx.read_buffered(&mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(err) => {
                    warn!("host link rx error: {err:?}");
                    self.decoder.reset();
                    break;
                }
            };
            for &byte in &buf[..n] {
                if let Some(set) = self.decoder.push(byte) {
                    latest = Some(set);
                }
            }
        }

        if let Some(set) = latest {
            debug!("host frame: {:#06x}", set.word());
            self.held = set;
        }
        latest
    }
}
