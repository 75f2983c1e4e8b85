mod buttons;

pub use self::buttons::Pins as ButtonsPins;
pub use self::buttons::BUTTONS;

use klik::{ButtonId, Event, EventHandler, Instant};

use self::buttons::Buttons;

/// Events classified during a single sample, one per button.
#[derive(Debug, Clone, Copy, defmt::Format)]
pub struct ControlInputSnapshot {
    pub events: [(ButtonId, Event); BUTTONS],
}

impl ControlInputSnapshot {
    pub fn is_empty(&self) -> bool {
        self.events.iter().all(|(_, event)| event.is_none())
    }

    pub fn dispatch<H: EventHandler + ?Sized>(&self, handler: &mut H) {
        for (button, event) in self.events {
            event.dispatch(button, handler);
        }
    }
}

pub struct ControlInputInterface {
    buttons: Buttons,
}

pub struct Config {
    pub buttons_pins: ButtonsPins,
}

impl ControlInputInterface {
    pub fn new(config: Config) -> Self {
        Self {
            buttons: Buttons::new(config.buttons_pins),
        }
    }

    /// Must be called every loop iteration, at least once per debounce time.
    pub fn sample(&mut self, now: Instant) {
        self.buttons.sample(now);
    }

    pub fn snapshot(&self) -> ControlInputSnapshot {
        ControlInputSnapshot {
            events: self.buttons.events(),
        }
    }

    pub fn pressed(&self) -> [bool; BUTTONS] {
        self.buttons.pressed()
    }
}
