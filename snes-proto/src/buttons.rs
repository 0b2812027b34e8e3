//! Button identities and the SNES serial transmission order.
//!
//! The console reads a controller as 16 clocked bits; the first twelve
//! carry buttons in a fixed order, B first and R last. That order is a
//! hardware protocol invariant: `Button` discriminants ARE the shift
//! indices and must never be reordered.

use bitflags::bitflags;

/// The twelve buttons of a standard SNES controller.
///
/// Discriminants are the bit index inside the status word, which is
/// also the (0-based) clock cycle at which the button's bit leaves on
/// the data line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Button {
    B = 0,
    Y = 1,
    Select = 2,
    Start = 3,
    Up = 4,
    Down = 5,
    Left = 6,
    Right = 7,
    A = 8,
    X = 9,
    L = 10,
    R = 11,
}

impl Button {
    /// All buttons in transmission order.
    pub const ALL: [Button; 12] = [
        Button::B,
        Button::Y,
        Button::Select,
        Button::Start,
        Button::Up,
        Button::Down,
        Button::Left,
        Button::Right,
        Button::A,
        Button::X,
        Button::L,
        Button::R,
    ];

    /// Bit index inside the status word.
    pub const fn bit(self) -> u8 {
        self as u8
    }

    /// Single-bit mask inside the status word.
    pub const fn mask(self) -> u16 {
        1 << self.bit()
    }

    pub const fn name(self) -> &'static str {
        match self {
            Button::B => "B",
            Button::Y => "Y",
            Button::Select => "Select",
            Button::Start => "Start",
            Button::Up => "Up",
            Button::Down => "Down",
            Button::Left => "Left",
            Button::Right => "Right",
            Button::A => "A",
            Button::X => "X",
            Button::L => "L",
            Button::R => "R",
        }
    }
}

impl core::fmt::Display for Button {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

bitflags! {
    /// Bit-packed button state in transmission order (the status word).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ButtonSet: u16 {
        const B      = 1 << 0;
        const Y      = 1 << 1;
        const SELECT = 1 << 2;
        const START  = 1 << 3;
        const UP     = 1 << 4;
        const DOWN   = 1 << 5;
        const LEFT   = 1 << 6;
        const RIGHT  = 1 << 7;
        const A      = 1 << 8;
        const X      = 1 << 9;
        const L      = 1 << 10;
        const R      = 1 << 11;
    }
}

impl ButtonSet {
    /// Set holding exactly one button.
    pub const fn single(button: Button) -> Self {
        Self::from_bits_retain(button.mask())
    }

    pub fn press(&mut self, button: Button) {
        self.insert(Self::single(button));
    }

    pub fn release(&mut self, button: Button) {
        self.remove(Self::single(button));
    }

    pub fn pressed(self, button: Button) -> bool {
        self.contains(Self::single(button))
    }

    /// Swap Left and Right for a player-2 view of a mirrored stage.
    pub fn mirror_x(self) -> Self {
        let mut out = self & !(Self::LEFT | Self::RIGHT);
        if self.contains(Self::LEFT) {
            out |= Self::RIGHT;
        }
        if self.contains(Self::RIGHT) {
            out |= Self::LEFT;
        }
        out
    }

    /// Raw 12-bit status word.
    pub const fn word(self) -> u16 {
        self.bits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transmission_order_is_fixed() {
        let expected = [
            (Button::B, 0),
            (Button::Y, 1),
            (Button::Select, 2),
            (Button::Start, 3),
            (Button::Up, 4),
            (Button::Down, 5),
            (Button::Left, 6),
            (Button::Right, 7),
            (Button::A, 8),
            (Button::X, 9),
            (Button::L, 10),
            (Button::R, 11),
        ];
        for (button, bit) in expected {
            assert_eq!(button.bit(), bit, "{button} moved away from clock cycle {}", bit + 1);
        }
    }

    #[test]
    fn bits_cover_exactly_zero_through_eleven() {
        let mut seen = 0u16;
        for (i, button) in Button::ALL.iter().enumerate() {
            assert_eq!(button.bit() as usize, i, "ALL is not in transmission order");
            seen |= button.mask();
        }
        assert_eq!(seen, 0x0FFF, "bit positions must be {{0..=11}} with no gaps");
        assert_eq!(ButtonSet::all().word(), 0x0FFF);
    }

    #[test]
    fn set_round_trips_single_buttons() {
        for button in Button::ALL {
            let mut set = ButtonSet::empty();
            set.press(button);
            assert!(set.pressed(button));
            assert_eq!(set.word(), button.mask());
            set.release(button);
            assert_eq!(set, ButtonSet::empty());
        }
    }

    #[test]
    fn mirror_swaps_only_the_x_axis() {
        let mut set = ButtonSet::empty();
        set.press(Button::Left);
        set.press(Button::Up);
        set.press(Button::A);

        let mirrored = set.mirror_x();
        assert!(mirrored.pressed(Button::Right));
        assert!(!mirrored.pressed(Button::Left));
        assert!(mirrored.pressed(Button::Up));
        assert!(mirrored.pressed(Button::A));

        // both directions held stays both
        let both = ButtonSet::LEFT | ButtonSet::RIGHT;
        assert_eq!(both.mirror_x(), both);
        // and mirroring twice is the identity
        assert_eq!(set.mirror_x().mirror_x(), set);
    }
}
