//! SNES adapter Board Support Package (BSP)
//!
//! Maps physical hardware to named subsystems so driver code doesn't
//! carry GPIO numbers around. The pin table lives in [`pins`].

pub mod pins;

use esp_hal::{
    gpio::{Input, InputConfig, Level, Output, OutputConfig, Pull},
    peripherals::Peripherals,
};

use snes_proto::{Button, ButtonSet};

/// Console-facing lines of the controller port.
///
/// Latch and clock are driven by the console; data is ours and idles
/// high (the console reads low as "pressed").
pub struct ConsoleHw {
    pub latch: Input<'static>,
    pub clock: Input<'static>,
    pub data: Output<'static>,
}

/// Physical button inputs, active LOW with internal pullups.
pub struct PadHw {
    b: Input<'static>,
    y: Input<'static>,
    select: Input<'static>,
    start: Input<'static>,
    up: Input<'static>,
    down: Input<'static>,
    left: Input<'static>,
    right: Input<'static>,
    a: Input<'static>,
    x: Input<'static>,
    l: Input<'static>,
    r: Input<'static>,
}

impl PadHw {
    /// Sample every button into a transmission-order set.
    pub fn read(&self) -> ButtonSet {
        let lines = [
            (&self.b, Button::B),
            (&self.y, Button::Y),
            (&self.select, Button::Select),
            (&self.start, Button::Start),
            (&self.up, Button::Up),
            (&self.down, Button::Down),
            (&self.left, Button::Left),
            (&self.right, Button::Right),
            (&self.a, Button::A),
            (&self.x, Button::X),
            (&self.l, Button::L),
            (&self.r, Button::R),
        ];

        let mut set = ButtonSet::empty();
        for (line, button) in lines {
            if line.is_low() {
                set.press(button);
            }
        }
        set
    }
}

/// Complete board hardware, ready for driver initialization.
pub struct Board {
    pub console: ConsoleHw,
    pub pad: PadHw,
}

impl Board {
    pub fn init(p: Peripherals) -> Self {
        let console = ConsoleHw {
            latch: Input::new(p.GPIO25, InputConfig::default().with_pull(Pull::None)),
            clock: Input::new(p.GPIO26, InputConfig::default().with_pull(Pull::None)),
            data: Output::new(p.GPIO27, Level::High, OutputConfig::default()),
        };

        let pullup = InputConfig::default().with_pull(Pull::Up);
        let pad = PadHw {
            b: Input::new(p.GPIO2, pullup),
            y: Input::new(p.GPIO4, pullup),
            select: Input::new(p.GPIO5, pullup),
            start: Input::new(p.GPIO18, pullup),
            up: Input::new(p.GPIO19, pullup),
            down: Input::new(p.GPIO21, pullup),
            left: Input::new(p.GPIO22, pullup),
            right: Input::new(p.GPIO23, pullup),
            a: Input::new(p.GPIO13, pullup),
            x: Input::new(p.GPIO12, pullup),
            l: Input::new(p.GPIO14, pullup),
            r: Input::new(p.GPIO15, pullup),
        };

        Board { console, pad }
    }
}
