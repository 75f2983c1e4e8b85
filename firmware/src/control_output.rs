use crate::system::hal::gpio;

pub const LEDS: usize = 4;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, defmt::Format)]
pub struct ControlOutputState {
    pub leds: [bool; LEDS],
}

pub struct ControlOutputInterface {
    pins: Pins,
}

pub struct Config {
    pub pins: Pins,
}

#[derive(Debug, defmt::Format)]
pub struct Pins {
    pub leds: (Led1, Led2, Led3, Led4),
}

type Led1 = gpio::gpiob::PB15<gpio::Output>;
type Led2 = gpio::gpiob::PB14<gpio::Output>;
type Led3 = gpio::gpiob::PB8<gpio::Output>;
type Led4 = gpio::gpiob::PB9<gpio::Output>;

impl ControlOutputInterface {
    pub fn new(config: Config) -> Self {
        Self { pins: config.pins }
    }

    pub fn set_state(&mut self, state: &ControlOutputState) {
        self.pins.leds.0.set_state(state.leds[0].into());
        self.pins.leds.1.set_state(state.leds[1].into());
        self.pins.leds.2.set_state(state.leds[2].into());
        self.pins.leds.3.set_state(state.leds[3].into());
    }
}
