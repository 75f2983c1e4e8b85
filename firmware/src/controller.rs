//! Translate button events into the state of the LEDs.
//!
//! A press toggles the LED of the button, a double press toggles both LEDs
//! of the button's column and a hold lights everything up until the next
//! press or double press.

use klik::{ButtonId, EventHandler};

use crate::control_output::{ControlOutputState, LEDS};

const COLUMNS: usize = LEDS / 2;

#[derive(Debug, Default, defmt::Format)]
pub struct Controller {
    leds: [bool; LEDS],
    holding: bool,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&self) -> ControlOutputState {
        if self.holding {
            ControlOutputState { leds: [true; LEDS] }
        } else {
            ControlOutputState { leds: self.leds }
        }
    }
}

impl EventHandler for Controller {
    fn on_press(&mut self, button: ButtonId) {
        defmt::info!("Button={:?} pressed", button);
        self.holding = false;
        let column = column(button);
        self.leds[column] = !self.leds[column];
    }

    fn on_double_press(&mut self, button: ButtonId) {
        defmt::info!("Button={:?} double pressed", button);
        self.holding = false;
        let column = column(button);
        self.leds[column] = !self.leds[column];
        self.leds[column + COLUMNS] = !self.leds[column + COLUMNS];
    }

    fn on_hold(&mut self, button: ButtonId) {
        if !self.holding {
            defmt::info!("Button={:?} held", button);
        }
        self.holding = true;
    }
}

// Buttons are numbered from 1 as printed on the panel.
fn column(button: ButtonId) -> usize {
    usize::from(button.0.saturating_sub(1)) % COLUMNS
}
