//! Host command frames.
//!
//! Hosts drive the pad with 4-byte little-endian `u32` frames at
//! 115 200 baud, one frame per button-state change. The command mask
//! has its own bit layout, distinct from the transmission order: it
//! kept Select and X apart after an early revision collapsed them onto
//! one bit. [`HostMask::to_buttons`] translates a mask into the
//! transmission-order [`ButtonSet`].

use bitflags::bitflags;

use crate::buttons::{Button, ButtonSet};

bitflags! {
    /// Bit layout of a host command mask.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct HostMask: u32 {
        const B      = 1 << 0;
        const Y      = 1 << 1;
        const X      = 1 << 2;
        const START  = 1 << 3;
        const SELECT = 1 << 4;
        const L      = 1 << 6;
        const R      = 1 << 7;
        const UP     = 1 << 8;
        const DOWN   = 1 << 9;
        const LEFT   = 1 << 10;
        const RIGHT  = 1 << 11;
        const A      = 1 << 12;
    }
}

impl HostMask {
    const MAP: [(HostMask, Button); 12] = [
        (HostMask::B, Button::B),
        (HostMask::Y, Button::Y),
        (HostMask::X, Button::X),
        (HostMask::START, Button::Start),
        (HostMask::SELECT, Button::Select),
        (HostMask::L, Button::L),
        (HostMask::R, Button::R),
        (HostMask::UP, Button::Up),
        (HostMask::DOWN, Button::Down),
        (HostMask::LEFT, Button::Left),
        (HostMask::RIGHT, Button::Right),
        (HostMask::A, Button::A),
    ];

    /// Translate a host command mask into the transmission-order set.
    pub fn to_buttons(self) -> ButtonSet {
        let mut set = ButtonSet::empty();
        for (bit, button) in Self::MAP {
            if self.contains(bit) {
                set.press(button);
            }
        }
        set
    }
}

/// Accumulates UART bytes into 4-byte command frames.
///
/// The stream carries no sync bytes; it is frame-aligned from reset,
/// matching the original protocol. [`FrameDecoder::reset`] realigns
/// after a link error or reopen.
pub struct FrameDecoder {
    buf: [u8; 4],
    len: u8,
}

impl FrameDecoder {
    pub const fn new() -> Self {
        Self { buf: [0; 4], len: 0 }
    }

    /// Feed one byte; returns the decoded set when a frame completes.
    pub fn push(&mut self, byte: u8) -> Option<ButtonSet> {
        self.buf[self.len as usize] = byte;
        self.len += 1;
        if self.len < 4 {
            return None;
        }
        self.len = 0;

        let raw = u32::from_le_bytes(self.buf);
        let mask = HostMask::from_bits_truncate(raw);
        if mask.bits() != raw {
            log::warn!("host frame {raw:#010x} carries unknown bits, ignoring them");
        }
        Some(mask.to_buttons())
    }

    /// Drop a partial frame.
    pub fn reset(&mut self) {
        self.len = 0;
    }
}

impl Default for FrameDecoder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(bytes: [u8; 4]) -> ButtonSet {
        let mut decoder = FrameDecoder::new();
        let mut out = None;
        for byte in bytes {
            out = decoder.push(byte);
        }
        out.expect("four bytes must complete a frame")
    }

    #[test]
    fn frames_are_little_endian() {
        // A is wire bit 12, so it lives in the second byte
        let set = decode([0x00, 0x10, 0x00, 0x00]);
        assert_eq!(set, ButtonSet::A);
    }

    #[test]
    fn select_and_x_map_to_distinct_buttons() {
        let select = decode((HostMask::SELECT.bits()).to_le_bytes());
        let x = decode((HostMask::X.bits()).to_le_bytes());
        assert_eq!(select, ButtonSet::SELECT);
        assert_eq!(x, ButtonSet::X);
        assert_ne!(select, x);
    }

    #[test]
    fn full_mask_lands_on_all_twelve_buttons() {
        let set = decode(HostMask::all().bits().to_le_bytes());
        assert_eq!(set, ButtonSet::all());
    }

    #[test]
    fn unknown_bits_are_ignored() {
        // wire bit 5 is unassigned; upper halfword is unused
        let raw = HostMask::UP.bits() | (1 << 5) | 0xDEAD_0000;
        assert_eq!(decode(raw.to_le_bytes()), ButtonSet::UP);
    }

    #[test]
    fn partial_frames_yield_nothing_until_the_fourth_byte() {
        let mut decoder = FrameDecoder::new();
        assert!(decoder.push(0x01).is_none());
        assert!(decoder.push(0x00).is_none());
        assert!(decoder.push(0x00).is_none());
        assert_eq!(decoder.push(0x00), Some(ButtonSet::B));
    }

    #[test]
    fn reset_realigns_the_stream() {
        let mut decoder = FrameDecoder::new();
        decoder.push(0xFF);
        decoder.reset();
        for &byte in &HostMask::START.bits().to_le_bytes()[..3] {
            assert!(decoder.push(byte).is_none());
        }
        assert_eq!(decoder.push(0x00), Some(ButtonSet::START));
    }

    #[test]
    fn consecutive_frames_decode_independently() {
        let mut decoder = FrameDecoder::new();
        let mut frames = [ButtonSet::empty(); 2];
        let mut n = 0;
        let bytes = [HostMask::B.bits().to_le_bytes(), HostMask::R.bits().to_le_bytes()];
        for &byte in bytes.iter().flatten() {
            if let Some(set) = decoder.push(byte) {
                frames[n] = set;
                n += 1;
            }
        }
        assert_eq!(n, 2);
        assert_eq!(frames, [ButtonSet::B, ButtonSet::R]);
    }
}
