use eframe::egui::Color32;

pub const GUI_WINDOW_TITLE: &str = "Color Generator";
pub const GUI_WINDOW_WIDTH: f32 = 600.0;
pub const GUI_WINDOW_HEIGHT: f32 = 400.0;
pub const GUI_PADDING: f32 = 25.0;

pub const GUI_SLIDER_LENGTH: f32 = 230.0;
pub const GUI_SLIDER_WIDTH: f32 = 25.0;
pub const GUI_SLIDER_SPACING: f32 = 20.0;
pub const GUI_CHANNEL_INPUT_WIDTH: f32 = 60.0;

pub const GUI_SWATCH_WIDTH: f32 = 250.0;
pub const GUI_SWATCH_HEIGHT: f32 = 200.0;

pub const GUI_DEFAULT_FONT_SIZE: f32 = 20.0;
pub const GUI_HEX_FONT_SIZE: f32 = 25.0;

pub const INFO_TEXT: &str = "Move any of the sliders to\nchange the color of the box.";

pub const RED_COLOR: Color32 = Color32::from_rgb(0xFF, 0x00, 0x00);
pub const GREEN_COLOR: Color32 = Color32::from_rgb(0x00, 0xFF, 0x00);
pub const BLUE_COLOR: Color32 = Color32::from_rgb(0x00, 0x00, 0xFF);

pub const CHANNEL_MIN: i64 = 0;
pub const CHANNEL_MAX: i64 = 255;
