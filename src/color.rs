//! Channel values and the canonical `#RRGGBB` hex code.

use std::fmt;

use eframe::egui::Color32;

use crate::constants::*;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Prefix shown in the channel's text field, e.g. `R:`.
    pub fn prefix(&self) -> &'static str {
        match self {
            Channel::Red => "R:",
            Channel::Green => "G:",
            Channel::Blue => "B:",
        }
    }

    /// Pure color used to tint the channel's slider.
    pub fn tint(&self) -> Color32 {
        match self {
            Channel::Red => RED_COLOR,
            Channel::Green => GREEN_COLOR,
            Channel::Blue => BLUE_COLOR,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    pub fn get(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
        }
    }

    pub fn set(&mut self, channel: Channel, value: u8) {
        match channel {
            Channel::Red => self.red = value,
            Channel::Green => self.green = value,
            Channel::Blue => self.blue = value,
        }
    }

    pub fn hex(&self) -> String {
        hex_color_code(self.red, self.green, self.blue)
    }

    pub fn to_color32(&self) -> Color32 {
        Color32::from_rgb(self.red, self.green, self.blue)
    }
}

/// Formats the three channels as `#RRGGBB` with uppercase, zero-padded digits.
pub fn hex_color_code(red: u8, green: u8, blue: u8) -> String {
    format!("#{:02X}{:02X}{:02X}", red, green, blue)
}

/// Parses `#RRGGBB` (either case) back into channel values.
pub fn parse_hex_color_code(input: &str) -> Result<Rgb> {
    let invalid = || Error::InvalidHexCode(input.to_string());

    let digits = input.strip_prefix('#').ok_or_else(invalid)?;
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let parse = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())
    };
    Ok(Rgb::new(parse(0..2)?, parse(2..4)?, parse(4..6)?))
}

/// Checks a raw value against the channel range.
pub fn channel_value(channel: Channel, value: i64) -> Result<u8> {
    if (CHANNEL_MIN..=CHANNEL_MAX).contains(&value) {
        Ok(value as u8)
    } else {
        Err(Error::ChannelOutOfRange { channel, value })
    }
}

pub fn clamp_channel_value(value: i64) -> u8 {
    value.clamp(CHANNEL_MIN, CHANNEL_MAX) as u8
}
