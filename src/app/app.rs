use std::cell::RefCell;
use std::rc::Rc;

use eframe::{App as EguiApp, Frame};
use eframe::egui::{Align, CentralPanel, Context, CursorIcon, FontId, Layout, RichText, Sense, Ui, Vec2};
use tracing::info;

use crate::app::channel_input::*;
use crate::color::{Channel, Rgb};
use crate::config::Variant;
use crate::constants::*;
use crate::display::Display;
use crate::random::randomize;
use crate::state::ColorState;

pub struct App {
    variant: Variant,
    state: ColorState,
    display: Rc<RefCell<Display>>,
    inputs: [ChannelInputData; 3],
}

impl Default for App {
    fn default() -> Self {
        Self::new(Variant::default(), Rgb::default())
    }
}

impl EguiApp for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        CentralPanel::default()
            .show(ctx, |ui| {
                self.central_panel_content(ui);
            });
    }
}

impl App {
    pub fn new(variant: Variant, initial: Rgb) -> Self {
        let mut state = ColorState::new(initial);
        let display = Rc::new(RefCell::new(Display::default()));

        let sink = Rc::clone(&display);
        state.subscribe(move |update| sink.borrow_mut().apply(update));

        let inputs = Channel::ALL.map(|channel| ChannelInputData::new(channel, initial.get(channel)));

        info!(?variant, hex = %initial.hex(), "color generator ready");
        Self {
            variant,
            state,
            display,
            inputs,
        }
    }

    fn custom_cursors(&self) -> bool {
        self.variant == Variant::Randomizer
    }

    /// Applies a fresh random color and brings the entry fields in line.
    pub fn randomize(&mut self) {
        randomize(&mut self.state, &mut rand::thread_rng());
        self.sync_inputs();
    }

    fn sync_inputs(&mut self) {
        for input in &mut self.inputs {
            input.sync(self.state.get(input.channel));
        }
    }

    pub fn central_panel_content(&mut self, ui: &mut Ui) {
        let default_font = FontId::monospace(GUI_DEFAULT_FONT_SIZE);
        let hex_font = FontId::monospace(GUI_HEX_FONT_SIZE);

        ui.vertical_centered(|ui| {
            ui.label(RichText::new(INFO_TEXT).font(default_font.clone()).strong());
        });
        ui.add_space(GUI_PADDING);

        // Channel inputs come first so the swatch and label below are painted
        // from the display after this frame's writes.
        ui.horizontal_top(|ui| {
            ui.add_space(GUI_PADDING);
            let custom_cursors = self.custom_cursors();
            for input in &mut self.inputs {
                channel_input(ui, input, &mut self.state, custom_cursors);
                ui.add_space(GUI_SLIDER_SPACING);
            }

            ui.with_layout(Layout::top_down(Align::Center), |ui| {
                if self.variant == Variant::Randomizer {
                    let button = ui
                        .button(RichText::new("Randomize").font(default_font.clone()))
                        .on_hover_cursor(CursorIcon::PointingHand);
                    if button.clicked() {
                        self.randomize();
                    }
                }
                self.swatch(ui);
                ui.label(RichText::new(self.display.borrow().hex_label()).font(hex_font).strong());
            });
        });
    }

    fn swatch(&self, ui: &mut Ui) {
        let size = Vec2::new(GUI_SWATCH_WIDTH, GUI_SWATCH_HEIGHT);
        let (rect, response) = ui.allocate_exact_size(size, Sense::hover());
        if self.custom_cursors() && response.hovered() {
            ui.ctx().set_cursor_icon(CursorIcon::Crosshair);
        }
        ui.painter().rect_filled(rect, 0.0, self.display.borrow().swatch_fill());
    }
}
