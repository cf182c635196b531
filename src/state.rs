//! The single source of truth for the current color.
//!
//! Widgets never hold channel values of their own. They write through
//! [`ColorState`] and receive a [`DisplayUpdate`] from it, so everything that
//! shows the color is refreshed from the same snapshot.

use tracing::{debug, warn};

use crate::color::{channel_value, clamp_channel_value, Channel, Rgb};
use crate::error::Result;

/// Snapshot handed to subscribers after every successful write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayUpdate {
    pub color: Rgb,
    pub hex: String,
}

impl DisplayUpdate {
    pub fn new(color: Rgb) -> Self {
        Self {
            hex: color.hex(),
            color,
        }
    }
}

type Subscriber = Box<dyn FnMut(&DisplayUpdate)>;

#[derive(Default)]
pub struct ColorState {
    color: Rgb,
    subscribers: Vec<Subscriber>,
}

impl ColorState {
    pub fn new(color: Rgb) -> Self {
        Self {
            color,
            subscribers: Vec::new(),
        }
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn get(&self, channel: Channel) -> u8 {
        self.color.get(channel)
    }

    /// Registers a change handler and immediately feeds it the current
    /// color, so a fresh subscriber never starts out of date.
    pub fn subscribe(&mut self, mut handler: impl FnMut(&DisplayUpdate) + 'static) {
        handler(&DisplayUpdate::new(self.color));
        self.subscribers.push(Box::new(handler));
    }

    /// Writes one channel. Values outside of `0..=255` are rejected and leave
    /// the state untouched.
    pub fn set_channel(&mut self, channel: Channel, value: i64) -> Result<()> {
        let value = channel_value(channel, value).inspect_err(|e| warn!("{e}"))?;
        self.color.set(channel, value);
        debug!(%channel, value, "channel changed");
        self.notify();
        Ok(())
    }

    /// Writes one channel, clamping the value into `0..=255` first.
    pub fn set_channel_clamped(&mut self, channel: Channel, value: i64) {
        let clamped = clamp_channel_value(value);
        if i64::from(clamped) != value {
            debug!(%channel, value, clamped, "channel value clamped");
        }
        self.color.set(channel, clamped);
        self.notify();
    }

    /// Replaces all three channels with a single notification.
    pub fn set_color(&mut self, color: Rgb) {
        self.color = color;
        debug!(hex = %color.hex(), "color replaced");
        self.notify();
    }

    fn notify(&mut self) {
        let update = DisplayUpdate::new(self.color);
        for subscriber in &mut self.subscribers {
            subscriber(&update);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorded(state: &mut ColorState) -> Rc<RefCell<Vec<DisplayUpdate>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        state.subscribe(move |update| sink.borrow_mut().push(update.clone()));
        log.borrow_mut().clear();
        log
    }

    #[test]
    fn starts_black() {
        let state = ColorState::default();
        assert_eq!(state.color(), Rgb::new(0, 0, 0));
    }

    #[test]
    fn subscribe_delivers_current_color() {
        let mut state = ColorState::new(Rgb::new(1, 2, 3));
        let seen = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&seen);
        state.subscribe(move |update| *sink.borrow_mut() = Some(update.hex.clone()));
        assert_eq!(seen.borrow().as_deref(), Some("#010203"));
    }

    #[test]
    fn valid_write_notifies_once_with_matching_hex() {
        let mut state = ColorState::default();
        let log = recorded(&mut state);

        state.set_channel(Channel::Green, 255).unwrap();

        let log = log.borrow();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].color, Rgb::new(0, 255, 0));
        assert_eq!(log[0].hex, "#00FF00");
    }

    #[test]
    fn rejected_write_changes_nothing() {
        let mut state = ColorState::new(Rgb::new(10, 20, 30));
        let log = recorded(&mut state);

        let err = state.set_channel(Channel::Blue, 256).unwrap_err();

        assert!(matches!(
            err,
            Error::ChannelOutOfRange { channel: Channel::Blue, value: 256 }
        ));
        assert_eq!(state.color(), Rgb::new(10, 20, 30));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn negative_write_is_rejected() {
        let mut state = ColorState::default();
        assert!(state.set_channel(Channel::Red, -1).is_err());
        assert_eq!(state.get(Channel::Red), 0);
    }

    #[test]
    fn clamped_write_saturates() {
        let mut state = ColorState::default();
        let log = recorded(&mut state);

        state.set_channel_clamped(Channel::Red, 400);
        state.set_channel_clamped(Channel::Green, -5);

        assert_eq!(state.color(), Rgb::new(255, 0, 0));
        assert_eq!(log.borrow().last().unwrap().hex, "#FF0000");
    }

    #[test]
    fn rewriting_same_value_still_notifies() {
        let mut state = ColorState::default();
        let log = recorded(&mut state);

        state.set_channel(Channel::Red, 0).unwrap();
        state.set_channel(Channel::Red, 0).unwrap();

        assert_eq!(log.borrow().len(), 2);
    }

    #[test]
    fn set_color_notifies_once() {
        let mut state = ColorState::default();
        let log = recorded(&mut state);

        state.set_color(Rgb::new(15, 16, 1));

        let log = log.borrow();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].hex, "#0F1001");
    }

    #[test]
    fn last_write_wins_per_channel() {
        let mut state = ColorState::default();
        for value in [10, 200, 42] {
            state.set_channel(Channel::Blue, value).unwrap();
        }
        assert_eq!(state.color(), Rgb::new(0, 0, 42));
    }
}
