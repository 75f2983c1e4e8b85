//! Turn noisy button levels into presses, double presses and holds.
//!
//! The crate is hardware agnostic. The caller samples a pin, reads its
//! monotonic clock and feeds both to [`ButtonClassifier::poll`] once per
//! control loop iteration. Resulting events can be handed to an
//! [`EventHandler`] together with the id of the button that fired.

#![no_std]

pub mod bank;
pub mod button;
pub mod dispatch;

pub use bank::ButtonBank;
pub use button::{ActiveLevel, ButtonClassifier, Config, Duration, Event, Instant};
pub use dispatch::{ButtonId, EventHandler};
