//! GPIO |    Function     |      Notes
//! -----+-----------------+----------------------------------
//!  25  | SNES LATCH      | Strobe from the console, starts a read cycle
//!  26  | SNES CLOCK      | One pulse per bit, driven by the console
//!  27  | SNES DATA       | Serial button bits, driven by us
//!   2  | Button B        | Active LOW, internal pullup
//!   4  | Button Y        | Active LOW, internal pullup
//!   5  | Button Select   | Active LOW, internal pullup
//!  18  | Button Start    | Active LOW, internal pullup
//!  19  | D-pad Up        | Active LOW, internal pullup
//!  21  | D-pad Down      | Active LOW, internal pullup
//!  22  | D-pad Left      | Active LOW, internal pullup
//!  23  | D-pad Right     | Active LOW, internal pullup
//!  13  | Button A        | Active LOW, internal pullup
//!  12  | Button X        | Active LOW, internal pullup
//!  14  | Button L        | Active LOW, internal pullup
//!  15  | Button R        | Active LOW, internal pullup

// ----- Console port (shift-register protocol) -----
pub const LATCH: u8 = 25;
pub const CLOCK: u8 = 26;
pub const DATA: u8 = 27;

// ----- Physical buttons (optional, active LOW) -----
pub const BTN_B: u8 = 2;
pub const BTN_Y: u8 = 4;
pub const BTN_SELECT: u8 = 5;
pub const BTN_START: u8 = 18;
pub const PAD_UP: u8 = 19;
pub const PAD_DOWN: u8 = 21;
pub const PAD_LEFT: u8 = 22;
pub const PAD_RIGHT: u8 = 23;
pub const BTN_A: u8 = 13;
pub const BTN_X: u8 = 12;
pub const BTN_L: u8 = 14;
pub const BTN_R: u8 = 15;

/// Every assigned GPIO, protocol pins first.
pub const ALL: [u8; 15] = [
    LATCH, CLOCK, DATA, BTN_B, BTN_Y, BTN_SELECT, BTN_START, PAD_UP, PAD_DOWN, PAD_LEFT,
    PAD_RIGHT, BTN_A, BTN_X, BTN_L, BTN_R,
];

// A duplicated or out-of-range GPIO here is a wiring bug; fail the build.
const _: () = {
    let mut i = 0;
    while i < ALL.len() {
        assert!(ALL[i] <= 39, "not a valid ESP32 GPIO");
        let mut j = i + 1;
        while j < ALL.len() {
            assert!(ALL[i] != ALL[j], "duplicate GPIO in pin table");
            j += 1;
        }
        i += 1;
    }
};
