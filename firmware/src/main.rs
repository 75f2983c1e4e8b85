#![no_main]
#![no_std]

use klik_firmware as _; // Global logger and panicking behavior.

#[rtic::app(device = stm32h7xx_hal::pac, peripherals = true, dispatchers = [EXTI0, EXTI1])]
mod app {
    use fugit::ExtU64;
    use heapless::spsc::{Consumer, Producer, Queue};
    use systick_monotonic::Systick;

    use klik_firmware::control_input::ControlInputInterface;
    use klik_firmware::control_input::ControlInputSnapshot;
    use klik_firmware::control_output::ControlOutputInterface;
    use klik_firmware::controller::Controller;
    use klik_firmware::queue_utils;
    use klik_firmware::system::System;

    // 1 kHz granularity for task scheduling and button timing.
    #[monotonic(binds = SysTick, default = true)]
    type Mono = Systick<1000>;

    #[shared]
    struct Shared {}

    #[local]
    struct Local {
        control_input_interface: ControlInputInterface,
        control_output_interface: ControlOutputInterface,
        controller: Controller,
        control_input_snapshot_producer: Producer<'static, ControlInputSnapshot, 8>,
        control_input_snapshot_consumer: Consumer<'static, ControlInputSnapshot, 8>,
    }

    #[init(
        local = [
            input_snapshot_queue: Queue<ControlInputSnapshot, 8> = Queue::new(),
        ]
    )]
    fn init(mut cx: init::Context) -> (Shared, Local, init::Monotonics) {
        defmt::info!("Starting the firmware, initializing resources");

        if cfg!(feature = "idle-measuring") {
            cx.core.DCB.enable_trace();
            cx.core.DWT.enable_cycle_counter();
        }

        let (control_input_snapshot_producer, control_input_snapshot_consumer) =
            cx.local.input_snapshot_queue.split();

        let system = System::init(cx.core, cx.device);
        let mono = system.mono;
        let control_input_interface = system.control_input_interface;
        let control_output_interface = system.control_output_interface;
        let controller = Controller::new();

        defmt::info!("Spawning tasks");

        control_loop::spawn().unwrap();
        input_collection_loop::spawn().unwrap();

        (
            Shared {},
            Local {
                control_input_interface,
                control_output_interface,
                controller,
                control_input_snapshot_producer,
                control_input_snapshot_consumer,
            },
            init::Monotonics(mono),
        )
    }

    #[task(
        local = [
            control_input_interface,
            control_input_snapshot_producer,
        ],
        priority = 2,
    )]
    fn input_collection_loop(cx: input_collection_loop::Context) {
        let control_input_interface = cx.local.control_input_interface;
        let control_input_snapshot_producer = cx.local.control_input_snapshot_producer;

        control_input_interface.sample(monotonics::now());

        let snapshot = control_input_interface.snapshot();
        if !snapshot.is_empty() {
            let _ = control_input_snapshot_producer.enqueue(snapshot);
        }

        // NOTE: This must be timed at the end. Otherwise, this task may get an interrupt
        // during sampling, which would then follow by immediate second execution of this
        // task, sampling the buttons twice within the same millisecond.
        input_collection_loop::spawn_after(1.millis()).ok().unwrap();
    }

    #[task(
        local = [
            controller,
            control_output_interface,
            control_input_snapshot_consumer,
        ],
        priority = 3,
    )]
    fn control_loop(cx: control_loop::Context) {
        control_loop::spawn_after(1.millis()).ok().unwrap();

        let controller = cx.local.controller;
        let control_output_interface = cx.local.control_output_interface;
        let control_input_snapshot_consumer = cx.local.control_input_snapshot_consumer;

        queue_utils::warn_about_capacity("input_snapshot", control_input_snapshot_consumer);

        queue_utils::dequeue_all(control_input_snapshot_consumer, |snapshot| {
            snapshot.dispatch(&mut *controller);
        });

        control_output_interface.set_state(&controller.tick());
    }

    #[idle(local = [idling: u32 = 0, start: u32 = 0])]
    fn idle(cx: idle::Context) -> ! {
        if cfg!(feature = "idle-measuring") {
            use core::sync::atomic::{self, Ordering};
            use daisy::pac::DWT;

            const USECOND: u32 = 480;
            const TIME_LIMIT: u32 = USECOND * 10_000; // 0.01 second

            defmt::info!("Idle measuring is enabled");

            let idling: &'static mut u32 = cx.local.idling;
            let start: &'static mut u32 = cx.local.start;

            atomic::compiler_fence(Ordering::Acquire);
            *start = DWT::cycle_count();

            loop {
                cortex_m::interrupt::free(|_cs| {
                    cortex_m::asm::delay(USECOND);
                    *idling += USECOND;
                });

                if *idling >= TIME_LIMIT {
                    let now = DWT::cycle_count();
                    atomic::compiler_fence(Ordering::Release);

                    let elapsed = calculate_elapsed_dwt_ticks(now, start);

                    #[allow(clippy::cast_precision_loss)]
                    let idling_relative = *idling as f32 / elapsed as f32;
                    log_idle_time(idling_relative);

                    atomic::compiler_fence(Ordering::Acquire);
                    *start = DWT::cycle_count();
                    *idling = 0;
                }
            }
        } else {
            loop {
                cortex_m::asm::nop();
            }
        }
    }

    fn calculate_elapsed_dwt_ticks(now: u32, start: &mut u32) -> u32 {
        if now >= *start {
            now - *start
        } else {
            now + (u32::MAX - *start)
        }
    }

    fn log_idle_time(idling_relative: f32) {
        const IDLE_LIMIT: f32 = 0.99;
        let idling_percent = idling_relative * 100.0;
        if idling_relative < IDLE_LIMIT {
            defmt::warn!("Idle time={}% is below the limit", idling_percent);
        } else {
            defmt::debug!("Idle time={}%", idling_percent);
        }
    }
}
