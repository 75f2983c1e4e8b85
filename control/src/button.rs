//! Debounce a single button and classify its presses.
//!
//! Each poll produces at most one [`Event`]. A single press is reported
//! only once the double press window expired after its release, a double
//! press is reported on the release of the second press and a hold is
//! reported while the button is still down. A press cycle that produced
//! a hold never produces a press or a double press.

use fugit::{MillisDurationU64, TimerInstantU64};

/// Instant of the 1 kHz system monotonic.
pub type Instant = TimerInstantU64<1000>;

pub type Duration = MillisDurationU64;

/// Sampled level that represents a pressed button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActiveLevel {
    High,
    /// Button shorts the pin to ground.
    #[default]
    Low,
}

impl ActiveLevel {
    pub fn is_pressed(self, raw_level: bool) -> bool {
        match self {
            ActiveLevel::High => raw_level,
            ActiveLevel::Low => !raw_level,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    #[default]
    None,
    Press,
    DoublePress,
    Hold,
}

impl Event {
    pub fn is_none(self) -> bool {
        self == Event::None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    pub active_level: ActiveLevel,
    /// Minimum quiet time after an accepted transition before the opposite
    /// transition is trusted.
    pub debounce: Duration,
    /// Maximum gap between a release and the following press for the pair
    /// to count as a double press.
    pub double_press_window: Duration,
    /// How long the button must stay down to fire a hold.
    pub hold_threshold: Duration,
}

impl Config {
    pub const DEFAULT: Self = Self {
        active_level: ActiveLevel::Low,
        debounce: Duration::from_ticks(20),
        double_press_window: Duration::from_ticks(250),
        hold_threshold: Duration::from_ticks(750),
    };
}

impl Default for Config {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonClassifier {
    config: Config,
    pressed: bool,
    was_pressed: bool,
    pressed_at: Option<Instant>,
    released_at: Option<Instant>,
    awaiting_double: bool,
    double_pending_on_release: bool,
    single_press_eligible: bool,
    suppress_next_release: bool,
    hold_fired: bool,
}

impl Default for ButtonClassifier {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl ButtonClassifier {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            pressed: false,
            was_pressed: false,
            pressed_at: None,
            released_at: None,
            awaiting_double: false,
            double_pending_on_release: false,
            single_press_eligible: false,
            suppress_next_release: false,
            hold_fired: false,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Whether the level sampled by the last poll was the active one.
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Whether a hold was already reported for the ongoing press.
    pub fn hold_fired(&self) -> bool {
        self.hold_fired
    }

    /// Feed the current raw pin level and time, get back what happened.
    ///
    /// Must be called with non-decreasing `now`, often enough to sample
    /// within the debounce time. Violating either only degrades
    /// classification, it never panics.
    pub fn poll(&mut self, raw_level: bool, now: Instant) -> Event {
        let Config {
            debounce,
            double_press_window,
            hold_threshold,
            ..
        } = self.config;

        let mut event = Event::None;
        self.pressed = self.config.active_level.is_pressed(raw_level);

        let since_release = elapsed(self.released_at, now);
        let since_press = elapsed(self.pressed_at, now);

        if self.pressed && !self.was_pressed && longer_than(since_release, debounce) {
            self.pressed_at = Some(now);
            self.suppress_next_release = false;
            self.single_press_eligible = true;
            self.hold_fired = false;

            if shorter_than(since_release, double_press_window)
                && !self.double_pending_on_release
                && self.awaiting_double
            {
                self.double_pending_on_release = true;
            } else {
                self.double_pending_on_release = false;
                self.awaiting_double = false;
            }
        } else if !self.pressed
            && self.was_pressed
            && (self.suppress_next_release || longer_than(since_press, debounce))
        {
            self.hold_fired = false;
            self.released_at = Some(now);

            // A release ending a reported hold only arms the debounce of its
            // contact bounce. Suppression stays until the next accepted press.
            if !self.suppress_next_release {
                if self.double_pending_on_release {
                    event = Event::DoublePress;
                    self.double_pending_on_release = false;
                    self.awaiting_double = false;
                    self.single_press_eligible = false;
                } else {
                    self.awaiting_double = true;
                }
            }
        }

        if !self.pressed
            && at_least(elapsed(self.released_at, now), double_press_window)
            && self.awaiting_double
            && !self.double_pending_on_release
            && self.single_press_eligible
            && event != Event::DoublePress
        {
            event = Event::Press;
            self.awaiting_double = false;
        }

        if self.pressed && at_least(elapsed(self.pressed_at, now), hold_threshold) {
            if !self.hold_fired {
                self.suppress_next_release = true;
                self.awaiting_double = false;
                self.double_pending_on_release = false;
                self.hold_fired = true;
            }

            // Re-arm, so a long hold repeats once per threshold.
            self.pressed_at = Some(now);
            event = Event::Hold;
        }

        self.was_pressed = self.pressed;

        event
    }
}

/// Time passed since `since`. `None` stands for "never happened", which is
/// treated as infinitely long ago. An instant from the future counts as zero.
fn elapsed(since: Option<Instant>, now: Instant) -> Option<Duration> {
    since.map(|since| {
        now.checked_duration_since(since)
            .unwrap_or(Duration::from_ticks(0))
    })
}

fn longer_than(elapsed: Option<Duration>, limit: Duration) -> bool {
    elapsed.map_or(true, |elapsed| elapsed > limit)
}

fn shorter_than(elapsed: Option<Duration>, limit: Duration) -> bool {
    elapsed.map_or(false, |elapsed| elapsed < limit)
}

fn at_least(elapsed: Option<Duration>, limit: Duration) -> bool {
    elapsed.map_or(true, |elapsed| elapsed >= limit)
}
