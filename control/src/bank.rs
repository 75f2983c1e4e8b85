//! Several buttons polled together, each with its own classifier.

use crate::button::{ButtonClassifier, Config, Event, Instant};
use crate::dispatch::{ButtonId, EventHandler};

#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonBank<const N: usize> {
    buttons: [(ButtonId, ButtonClassifier); N],
}

impl<const N: usize> ButtonBank<N> {
    pub fn new(buttons: [(ButtonId, Config); N]) -> Self {
        Self {
            buttons: buttons.map(|(id, config)| (id, ButtonClassifier::new(config))),
        }
    }

    /// Poll every button with its raw level, all at the same instant.
    pub fn poll(&mut self, levels: [bool; N], now: Instant) -> [Event; N] {
        let mut events = [Event::None; N];
        for ((_, classifier), (event, level)) in self
            .buttons
            .iter_mut()
            .zip(events.iter_mut().zip(levels))
        {
            *event = classifier.poll(level, now);
        }
        events
    }

    /// Poll every button and pass the resulting events to the handler in
    /// slot order.
    pub fn poll_and_dispatch<H: EventHandler + ?Sized>(
        &mut self,
        levels: [bool; N],
        now: Instant,
        handler: &mut H,
    ) {
        let events = self.poll(levels, now);
        for ((id, _), event) in self.buttons.iter().zip(events) {
            event.dispatch(*id, handler);
        }
    }

    pub fn ids(&self) -> [ButtonId; N] {
        core::array::from_fn(|i| self.buttons[i].0)
    }

    pub fn classifier(&self, index: usize) -> Option<&ButtonClassifier> {
        self.buttons.get(index).map(|(_, classifier)| classifier)
    }
}
