#![no_main]
#![no_std]

use fugit::ExtU64;

use klik::{ButtonId, EventHandler, Instant};
use klik_firmware as _;
use klik_firmware::control_input::{ControlInputSnapshot, BUTTONS};
use klik_firmware::controller::Controller;
use klik_firmware::system::System;

// Busy wait of a millisecond at the 480 MHz system clock.
const MILLISECOND: u32 = 480_000;

struct Statistics {
    buttons: [ButtonStatistics; BUTTONS],
    controller: Controller,
}

impl Statistics {
    fn new() -> Self {
        Self {
            buttons: [ButtonStatistics::new(), ButtonStatistics::new()],
            controller: Controller::new(),
        }
    }

    fn sample(&mut self, pressed: [bool; BUTTONS], snapshot: ControlInputSnapshot) {
        for (button, pressed) in self.buttons.iter_mut().zip(pressed) {
            button.sample(pressed);
        }
        snapshot.dispatch(self);
    }

    fn button_mut(&mut self, button: ButtonId) -> Option<&mut ButtonStatistics> {
        let index = usize::from(button.0.checked_sub(1)?);
        self.buttons.get_mut(index)
    }
}

impl EventHandler for Statistics {
    fn on_press(&mut self, button: ButtonId) {
        if let Some(statistics) = self.button_mut(button) {
            statistics.presses += 1;
        }
        self.controller.on_press(button);
    }

    fn on_double_press(&mut self, button: ButtonId) {
        if let Some(statistics) = self.button_mut(button) {
            statistics.double_presses += 1;
        }
        self.controller.on_double_press(button);
    }

    fn on_hold(&mut self, button: ButtonId) {
        if let Some(statistics) = self.button_mut(button) {
            statistics.holds += 1;
        }
        self.controller.on_hold(button);
    }
}

impl defmt::Format for Statistics {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "\x1B[2J\x1b[1;1H");

        defmt::write!(fmt, "Button\tValue\tEdges(raw)\tPress\tDouble\tHold\n");
        for (i, button) in self.buttons.iter().enumerate() {
            defmt::write!(
                fmt,
                "{}\t{}\t{}\t\t{}\t{}\t{}\n",
                i + 1,
                button.value,
                button.raw_edges,
                button.presses,
                button.double_presses,
                button.holds
            );
        }
    }
}

struct ButtonStatistics {
    value: bool,
    raw_edges: u32,
    presses: u32,
    double_presses: u32,
    holds: u32,
}

impl ButtonStatistics {
    fn new() -> Self {
        Self {
            value: false,
            raw_edges: 0,
            presses: 0,
            double_presses: 0,
            holds: 0,
        }
    }

    fn sample(&mut self, value: bool) {
        if !self.value && value {
            self.raw_edges += 1;
        }
        self.value = value;
    }
}

#[cortex_m_rt::entry]
fn main() -> ! {
    defmt::println!("Running diagnostics");

    let cp = cortex_m::Peripherals::take().unwrap();
    let dp = daisy::pac::Peripherals::take().unwrap();
    let system = System::init(cp, dp);

    let mut statistics = Statistics::new();
    let mut control_input_interface = system.control_input_interface;
    let mut control_output_interface = system.control_output_interface;

    // The monotonic is not running here, the busy loop keeps the time.
    let mut now = Instant::from_ticks(0);

    loop {
        for _ in 0..100 {
            control_input_interface.sample(now);
            statistics.sample(
                control_input_interface.pressed(),
                control_input_interface.snapshot(),
            );
            control_output_interface.set_state(&statistics.controller.tick());
            cortex_m::asm::delay(MILLISECOND);
            now += 1.millis();
        }

        defmt::println!("{}", statistics);
    }
}
