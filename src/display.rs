use eframe::egui::Color32;

use crate::state::DisplayUpdate;

/// What the window shows for the current color: the swatch fill and the hex
/// label. Both fields are only written together, from one [`DisplayUpdate`].
#[derive(Debug, Clone, PartialEq)]
pub struct Display {
    swatch_fill: Color32,
    hex_label: String,
}

impl Default for Display {
    fn default() -> Self {
        Self::from(&DisplayUpdate::new(Default::default()))
    }
}

impl From<&DisplayUpdate> for Display {
    fn from(update: &DisplayUpdate) -> Self {
        Self {
            swatch_fill: update.color.to_color32(),
            hex_label: format!("Hex: {}", update.hex),
        }
    }
}

impl Display {
    pub fn apply(&mut self, update: &DisplayUpdate) {
        *self = Self::from(update);
    }

    pub fn swatch_fill(&self) -> Color32 {
        self.swatch_fill
    }

    pub fn hex_label(&self) -> &str {
        &self.hex_label
    }
}
