// snes-proto: minimal no_std SNES controller protocol library.
// buttons:  button identities, serial transmission order, packed button set
// report:   16-cycle shift-register report engine (console side)
// wire:     host command frames (u32 little-endian) and their bit layout
// sequence: frame-timed input sequences (alloc, feature "sequences")

#![no_std]

#[cfg(feature = "sequences")]
extern crate alloc;

pub mod buttons;
pub mod report;
pub mod wire;

#[cfg(feature = "sequences")]
pub mod sequence;

pub use buttons::{Button, ButtonSet};
pub use report::{ShiftEngine, REPORT_CYCLES};
pub use wire::{FrameDecoder, HostMask};
