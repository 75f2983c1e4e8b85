pub use stm32h7xx_hal as hal;

use daisy::led::LedUser;
use fugit::Hertz;
use hal::pac::CorePeripherals;
use hal::pac::Peripherals as DevicePeripherals;
use hal::prelude::*;
use systick_monotonic::Systick;

use crate::control_input::{
    ButtonsPins as ControlInputButtonsPins, Config as ControlInputConfig, ControlInputInterface,
};
use crate::control_output::{
    Config as ControlOutputConfig, ControlOutputInterface, Pins as ControlOutputPins,
};

pub struct System {
    pub frequency: Hertz<u32>,
    pub mono: Systick<1000>,
    pub status_led: LedUser,
    pub control_input_interface: ControlInputInterface,
    pub control_output_interface: ControlOutputInterface,
}

impl System {
    /// Initialize system abstraction.
    ///
    /// # Panics
    ///
    /// The system can be initialized only once. It panics otherwise.
    pub fn init(mut cp: CorePeripherals, dp: DevicePeripherals) -> Self {
        enable_cache(&mut cp);

        let board = daisy::Board::take().unwrap();
        let ccdr = daisy::board_freeze_clocks!(board, dp);
        let pins = daisy::board_split_gpios!(board, ccdr, dp);

        let system_frequency = ccdr.clocks.sys_ck();
        let mono = Systick::new(cp.SYST, system_frequency.raw());
        let status_led = daisy::board_split_leds!(pins).USER;
        let control_input_interface = ControlInputInterface::new(ControlInputConfig {
            buttons_pins: ControlInputButtonsPins {
                button_1: pins.GPIO.PIN_D10.into_pull_up_input(),
                button_2: pins.GPIO.PIN_D1.into_pull_up_input(),
            },
        });
        let control_output_interface = ControlOutputInterface::new(ControlOutputConfig {
            pins: ControlOutputPins {
                leds: (
                    pins.GPIO.PIN_A9.into_push_pull_output(),
                    pins.GPIO.PIN_A8.into_push_pull_output(),
                    pins.GPIO.PIN_B7.into_push_pull_output(),
                    pins.GPIO.PIN_B8.into_push_pull_output(),
                ),
            },
        });

        Self {
            frequency: system_frequency,
            mono,
            status_led,
            control_input_interface,
            control_output_interface,
        }
    }
}

/// AN5212: Improve application performance when fetching instruction and
/// data, from both internal andexternal memories.
fn enable_cache(cp: &mut CorePeripherals) {
    cp.SCB.enable_icache();
    // NOTE: This requires cache management around all use of DMA.
    cp.SCB.enable_dcache(&mut cp.CPUID);
}
