use klik::{ActiveLevel, ButtonBank, ButtonId, Config, Event, Instant};

use crate::system::hal::gpio;

pub const BUTTONS: usize = 2;

// Pins are pulled up, a pressed button shorts them to the ground.
const BUTTON_CONFIG: Config = Config {
    active_level: ActiveLevel::Low,
    ..Config::DEFAULT
};

#[derive(Debug, defmt::Format)]
pub struct Buttons {
    bank: ButtonBank<BUTTONS>,
    events: [Event; BUTTONS],
    pins: Pins,
}

#[derive(Debug, defmt::Format)]
pub struct Pins {
    pub button_1: Button1Pin,
    pub button_2: Button2Pin,
}

pub type Button1Pin = gpio::gpiod::PD3<gpio::Input>;
pub type Button2Pin = gpio::gpiob::PB4<gpio::Input>;

impl Buttons {
    pub fn new(pins: Pins) -> Self {
        Self {
            bank: ButtonBank::new([
                (ButtonId(1), BUTTON_CONFIG),
                (ButtonId(2), BUTTON_CONFIG),
            ]),
            events: [Event::None; BUTTONS],
            pins,
        }
    }

    pub fn sample(&mut self, now: Instant) {
        let levels = [self.pins.button_1.is_high(), self.pins.button_2.is_high()];
        self.events = self.bank.poll(levels, now);
    }

    pub fn events(&self) -> [(ButtonId, Event); BUTTONS] {
        let ids = self.bank.ids();
        [(ids[0], self.events[0]), (ids[1], self.events[1])]
    }

    pub fn pressed(&self) -> [bool; BUTTONS] {
        [
            self.bank.classifier(0).map_or(false, |b| b.is_pressed()),
            self.bank.classifier(1).map_or(false, |b| b.is_pressed()),
        ]
    }
}
