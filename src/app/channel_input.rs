use eframe::egui::{CursorIcon, Response, Slider, TextEdit, Ui};
use tracing::warn;

use crate::app::parse_input::*;
use crate::color::Channel;
use crate::constants::*;
use crate::error::Result;
use crate::state::ColorState;

/// Text shown in a channel's entry field. Kept apart from the channel value
/// so the user can type freely until pressing "Apply".
pub struct ChannelInputData {
    pub channel: Channel,
    pub text: String,
}

impl ChannelInputData {
    pub fn new(channel: Channel, value: u8) -> Self {
        Self {
            channel,
            text: Self::format(channel, value),
        }
    }

    pub fn sync(&mut self, value: u8) {
        self.text = Self::format(self.channel, value);
    }

    /// Parses the field and writes it through the state. On failure the
    /// field is marked invalid and the state keeps its value.
    pub fn apply(&mut self, state: &mut ColorState) -> Result<()> {
        let prefix = self.channel.prefix();
        let result = parse_input(prefix, &self.text)
            .and_then(|value| state.set_channel(self.channel, value));
        match &result {
            Ok(()) => self.sync(state.get(self.channel)),
            Err(e) => {
                warn!(channel = %self.channel, "rejected input: {e}");
                self.text = format!("{prefix} Invalid!");
            }
        }
        result
    }

    fn format(channel: Channel, value: u8) -> String {
        format!("{} {}", channel.prefix(), value)
    }
}

/// One column: a vertical slider tinted by its channel, the entry field and
/// its apply button.
pub fn channel_input(ui: &mut Ui, data: &mut ChannelInputData, state: &mut ColorState, custom_cursors: bool) {
    let channel = data.channel;
    ui.vertical(|ui| {
        ui.spacing_mut().slider_width = GUI_SLIDER_LENGTH;
        ui.spacing_mut().interact_size.y = GUI_SLIDER_WIDTH;
        ui.visuals_mut().selection.bg_fill = channel.tint();
        ui.visuals_mut().override_text_color = Some(channel.tint());

        let mut value = state.get(channel);
        let mut slider: Response = ui.add(
            Slider::new(&mut value, 0..=u8::MAX)
                .vertical()
                .trailing_fill(true),
        );
        if custom_cursors {
            slider = slider.on_hover_cursor(CursorIcon::ResizeVertical);
        }
        if slider.changed() {
            state.set_channel_clamped(channel, i64::from(value));
            data.sync(state.get(channel));
        }

        ui.add(TextEdit::singleline(&mut data.text).desired_width(GUI_CHANNEL_INPUT_WIDTH));
        let mut apply = ui.button("Apply");
        if custom_cursors {
            apply = apply.on_hover_cursor(CursorIcon::PointingHand);
        }
        if apply.clicked() {
            let _ = data.apply(state);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    #[test]
    fn shows_prefixed_value() {
        let data = ChannelInputData::new(Channel::Green, 7);
        assert_eq!(data.text, "G: 7");
    }

    #[test]
    fn apply_writes_valid_value() {
        let mut state = ColorState::default();
        let mut data = ChannelInputData::new(Channel::Blue, 0);
        data.text = "  200".to_string();

        data.apply(&mut state).unwrap();

        assert_eq!(state.color(), Rgb::new(0, 0, 200));
        assert_eq!(data.text, "B: 200");
    }

    #[test]
    fn apply_rejects_out_of_range_value() {
        let mut state = ColorState::new(Rgb::new(5, 5, 5));
        let mut data = ChannelInputData::new(Channel::Red, 5);
        data.text = "R: 256".to_string();

        assert!(data.apply(&mut state).is_err());
        assert_eq!(state.color(), Rgb::new(5, 5, 5));
        assert_eq!(data.text, "R: Invalid!");
    }

    #[test]
    fn apply_rejects_garbage() {
        let mut state = ColorState::default();
        let mut data = ChannelInputData::new(Channel::Green, 0);
        data.text = "lots".to_string();

        assert!(data.apply(&mut state).is_err());
        assert_eq!(data.text, "G: Invalid!");
    }
}
