//! Hand classified events over to user callbacks.

use crate::button::Event;

/// Identifies the button that fired, typically its pin or slot number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonId(pub u8);

/// Callbacks for classified button events.
///
/// All methods default to doing nothing, implement only those of interest.
pub trait EventHandler {
    fn on_press(&mut self, _button: ButtonId) {}

    fn on_double_press(&mut self, _button: ButtonId) {}

    fn on_hold(&mut self, _button: ButtonId) {}
}

impl Event {
    /// Invoke the handler method matching this event, if any.
    pub fn dispatch<H: EventHandler + ?Sized>(self, button: ButtonId, handler: &mut H) {
        match self {
            Event::None => (),
            Event::Press => handler.on_press(button),
            Event::DoublePress => handler.on_double_press(button),
            Event::Hold => handler.on_hold(button),
        }
    }
}
