//! Console-side shift-register report engine.
//!
//! A read cycle: the console raises LATCH, the controller loads its
//! status word and immediately drives the level for B; each CLOCK pulse
//! then shifts out the next bit. Data is active low on the wire, so a
//! pressed button reports a low level. Cycles 13-16 are the
//! standard-controller signature and always read high; between read
//! cycles the line idles high.

use crate::buttons::ButtonSet;

/// Clock cycles per report: 12 buttons + 4 signature bits.
pub const REPORT_CYCLES: u8 = 16;

/// Shift-register state machine, driven from the latch/clock edge ISRs.
///
/// Levels are reported as `true` = data line high.
#[derive(Debug, Clone, Copy)]
pub struct ShiftEngine {
    word: u16,
    cycle: u8,
}

impl ShiftEngine {
    pub const fn new() -> Self {
        // cycle past the end = idle until the first latch
        Self {
            word: 0,
            cycle: REPORT_CYCLES,
        }
    }

    /// Level for the current cycle; does not advance.
    pub const fn data_high(&self) -> bool {
        if self.cycle >= 12 {
            // signature cycles and idle both drive high
            true
        } else {
            self.word & (1 << self.cycle) == 0
        }
    }

    /// Latch pulse: snapshot the live word, restart at the first cycle
    /// (button B) and return its level.
    pub fn latch(&mut self, set: ButtonSet) -> bool {
        self.word = set.word();
        self.cycle = 0;
        self.data_high()
    }

    /// Clock pulse: advance one cycle and return the new level. Pulses
    /// past the 16th keep the line at idle.
    pub fn clock(&mut self) -> bool {
        if self.cycle < REPORT_CYCLES {
            self.cycle += 1;
        }
        self.data_high()
    }
}

impl Default for ShiftEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buttons::Button;

    /// Run one full read cycle and collect all 16 levels.
    fn read_cycle(engine: &mut ShiftEngine, set: ButtonSet) -> [bool; 16] {
        let mut levels = [false; 16];
        levels[0] = engine.latch(set);
        for level in levels.iter_mut().skip(1) {
            *level = engine.clock();
        }
        levels
    }

    #[test]
    fn idles_high_before_first_latch() {
        let engine = ShiftEngine::new();
        assert!(engine.data_high());
    }

    #[test]
    fn empty_set_reports_all_high() {
        let mut engine = ShiftEngine::new();
        let levels = read_cycle(&mut engine, ButtonSet::empty());
        assert_eq!(levels, [true; 16]);
    }

    #[test]
    fn pressed_buttons_report_low_in_their_cycle() {
        let mut engine = ShiftEngine::new();
        let mut set = ButtonSet::empty();
        set.press(Button::B);
        set.press(Button::Start);
        set.press(Button::R);

        let levels = read_cycle(&mut engine, set);
        for (cycle, &high) in levels.iter().enumerate() {
            let expected_low = cycle == 0 || cycle == 3 || cycle == 11;
            assert_eq!(!high, expected_low, "wrong level at clock cycle {}", cycle + 1);
        }
    }

    #[test]
    fn signature_cycles_stay_high_even_with_all_buttons_down() {
        let mut engine = ShiftEngine::new();
        let levels = read_cycle(&mut engine, ButtonSet::all());
        assert_eq!(&levels[..12], &[false; 12]);
        assert_eq!(&levels[12..], &[true; 4]);
    }

    #[test]
    fn extra_clocks_after_the_report_idle_high() {
        let mut engine = ShiftEngine::new();
        read_cycle(&mut engine, ButtonSet::all());
        for _ in 0..8 {
            assert!(engine.clock());
        }
    }

    #[test]
    fn relatch_mid_report_restarts_at_b() {
        let mut engine = ShiftEngine::new();
        engine.latch(ButtonSet::empty());
        engine.clock();
        engine.clock();

        let mut set = ButtonSet::empty();
        set.press(Button::B);
        assert!(!engine.latch(set), "B must drive the line low right after latch");
    }
}
