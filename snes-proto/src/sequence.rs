//! Frame-timed input sequences.
//!
//! A sequence is a sparse list of button holds pinned to frame numbers
//! (a SNES polls the pad once per video frame, 60 per second).
//! Overlapping holds merge, so a charge move can keep Down held
//! underneath a later Up+B window. Pacing the frames out in real time
//! is the transport's job; the [`Stepper`] is pure.

use alloc::vec::Vec;

use crate::buttons::{Button, ButtonSet};

/// One button hold: `buttons` held for `hold` frames starting at `frame`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameInput {
    pub frame: u32,
    pub buttons: ButtonSet,
    pub hold: u32,
}

#[derive(Debug, Clone)]
pub struct InputSequence {
    name: &'static str,
    frames: Vec<FrameInput>,
}

impl InputSequence {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            frames: Vec::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Hold a single button from `frame` for `hold` frames.
    pub fn press(self, frame: u32, button: Button, hold: u32) -> Self {
        self.combo(frame, ButtonSet::single(button), hold)
    }

    /// Hold a button combination from `frame` for `hold` frames.
    pub fn combo(mut self, frame: u32, buttons: ButtonSet, hold: u32) -> Self {
        self.frames.push(FrameInput {
            frame,
            buttons,
            hold,
        });
        self
    }

    /// One past the last frame that holds any button.
    pub fn total_frames(&self) -> u32 {
        self.frames
            .iter()
            .map(|f| f.frame + f.hold)
            .max()
            .unwrap_or(0)
    }

    /// Union of every hold whose window covers `frame`.
    pub fn buttons_at(&self, frame: u32) -> ButtonSet {
        let mut set = ButtonSet::empty();
        for f in &self.frames {
            if f.frame <= frame && frame < f.frame + f.hold {
                set |= f.buttons;
            }
        }
        set
    }

    /// Step the sequence frame by frame.
    pub fn step(&self) -> Stepper<'_> {
        Stepper {
            seq: self,
            frame: 0,
            total: self.total_frames(),
            mirror: false,
        }
    }

    /// Step with the X axis mirrored, for player 2 facing the other way.
    pub fn step_mirrored(&self) -> Stepper<'_> {
        Stepper {
            mirror: true,
            ..self.step()
        }
    }
}

/// Iterator yielding one [`ButtonSet`] per frame, `0..total_frames()`.
#[derive(Debug, Clone)]
pub struct Stepper<'a> {
    seq: &'a InputSequence,
    frame: u32,
    total: u32,
    mirror: bool,
}

impl Iterator for Stepper<'_> {
    type Item = ButtonSet;

    fn next(&mut self) -> Option<ButtonSet> {
        if self.frame >= self.total {
            return None;
        }
        let mut set = self.seq.buttons_at(self.frame);
        if self.mirror {
            set = set.mirror_x();
        }
        self.frame += 1;
        Some(set)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.total - self.frame) as usize;
        (left, Some(left))
    }
}

// ── Stock sequences ported from the original combo library ─────────────

/// Quarter circle forward plus punch.
pub fn hadouken() -> InputSequence {
    InputSequence::new("Hadouken")
        .press(0, Button::Down, 2)
        .press(2, Button::Right, 1)
        .combo(3, ButtonSet::DOWN | ButtonSet::RIGHT, 1)
        .combo(4, ButtonSet::RIGHT | ButtonSet::Y, 2)
}

/// Forward, down, down-forward plus punch.
pub fn shoryuken() -> InputSequence {
    InputSequence::new("Shoryuken")
        .press(0, Button::Right, 1)
        .press(1, Button::Down, 1)
        .combo(2, ButtonSet::RIGHT | ButtonSet::DOWN, 1)
        .combo(3, ButtonSet::RIGHT | ButtonSet::Y, 3)
}

/// Charge down-back for half a second, then up plus kick.
pub fn flash_kick() -> InputSequence {
    InputSequence::new("Flash Kick")
        .combo(0, ButtonSet::LEFT | ButtonSet::DOWN, 30)
        .combo(30, ButtonSet::UP | ButtonSet::B, 3)
}

/// Up, up, down, down, left, right, left, right, B, A.
pub fn konami_code() -> InputSequence {
    InputSequence::new("Konami Code")
        .press(0, Button::Up, 1)
        .press(2, Button::Up, 1)
        .press(4, Button::Down, 1)
        .press(6, Button::Down, 1)
        .press(8, Button::Left, 1)
        .press(10, Button::Right, 1)
        .press(12, Button::Left, 1)
        .press(14, Button::Right, 1)
        .press(16, Button::B, 1)
        .press(18, Button::A, 1)
}

/// Alternating A and B attacks.
pub fn basic_combo() -> InputSequence {
    InputSequence::new("Basic Combo")
        .press(0, Button::A, 2)
        .press(3, Button::B, 2)
        .press(6, Button::A, 2)
        .press(9, Button::B, 2)
}

/// Jump with attack.
pub fn jump() -> InputSequence {
    InputSequence::new("Jump").combo(0, ButtonSet::UP | ButtonSet::A, 5)
}

/// Walk right for half a second.
pub fn walk_right() -> InputSequence {
    InputSequence::new("Walk Right").press(0, Button::Right, 30)
}

/// Walk left for half a second.
pub fn walk_left() -> InputSequence {
    InputSequence::new("Walk Left").press(0, Button::Left, 30)
}

/// Run right: direction plus the run button held together.
pub fn run_right() -> InputSequence {
    InputSequence::new("Run Right")
        .press(0, Button::Right, 20)
        .press(0, Button::B, 20)
}

/// Exercises every button group one after another.
pub fn button_test() -> InputSequence {
    InputSequence::new("Button Test")
        .press(0, Button::Down, 120)
        .press(120, Button::Right, 120)
        .press(240, Button::X, 5)
        .combo(250, ButtonSet::RIGHT | ButtonSet::B, 20)
        .press(255, Button::Y, 10)
        .combo(265, ButtonSet::UP | ButtonSet::LEFT, 5)
        .press(270, Button::B, 5)
        .press(275, Button::A, 10)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sequence_has_no_frames() {
        let seq = InputSequence::new("empty");
        assert_eq!(seq.total_frames(), 0);
        assert_eq!(seq.step().count(), 0);
    }

    #[test]
    fn total_frames_ends_after_the_longest_hold() {
        assert_eq!(konami_code().total_frames(), 19);
        assert_eq!(flash_kick().total_frames(), 33);
    }

    #[test]
    fn overlapping_holds_merge() {
        let seq = InputSequence::new("charge")
            .press(0, Button::Down, 10)
            .combo(5, ButtonSet::RIGHT | ButtonSet::A, 3);

        assert_eq!(seq.buttons_at(4), ButtonSet::DOWN);
        assert_eq!(
            seq.buttons_at(6),
            ButtonSet::DOWN | ButtonSet::RIGHT | ButtonSet::A
        );
        assert_eq!(seq.buttons_at(8), ButtonSet::DOWN);
        assert_eq!(seq.buttons_at(10), ButtonSet::empty());
    }

    #[test]
    fn hadouken_motion_frame_by_frame() {
        let frames: Vec<ButtonSet> = hadouken().step().collect();
        assert_eq!(
            frames,
            [
                ButtonSet::DOWN,
                ButtonSet::DOWN,
                ButtonSet::RIGHT,
                ButtonSet::DOWN | ButtonSet::RIGHT,
                ButtonSet::RIGHT | ButtonSet::Y,
                ButtonSet::RIGHT | ButtonSet::Y,
            ]
        );
    }

    #[test]
    fn mirrored_stepper_flips_charge_direction() {
        let p2: Vec<ButtonSet> = flash_kick().step_mirrored().collect();
        assert_eq!(p2[0], ButtonSet::RIGHT | ButtonSet::DOWN);
        assert_eq!(p2[30], ButtonSet::UP | ButtonSet::B);
        assert_eq!(p2.len(), 33);
    }

    #[test]
    fn stepper_yields_exactly_total_frames() {
        for seq in [konami_code(), basic_combo(), button_test(), run_right()] {
            assert_eq!(seq.step().count() as u32, seq.total_frames(), "{}", seq.name());
        }
    }

    #[test]
    fn run_right_holds_both_buttons_the_whole_way() {
        for set in run_right().step() {
            assert_eq!(set, ButtonSet::RIGHT | ButtonSet::B);
        }
    }
}
