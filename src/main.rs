mod app;
mod color;
mod config;
mod constants;
mod display;
mod error;
mod logging;
mod random;
mod state;

use clap::Parser;
use constants::*;
use eframe::{NativeOptions, run_native};
use eframe::egui::{Vec2, ViewportBuilder};

use app::App;
use config::Config;

fn main() -> error::Result<()> {
    let config = Config::parse();
    logging::init(config.verbose);

    let options = NativeOptions {
        viewport: ViewportBuilder {
            title: Some(GUI_WINDOW_TITLE.to_string()),
            inner_size: Some(Vec2::new(GUI_WINDOW_WIDTH, GUI_WINDOW_HEIGHT)),
            resizable: Some(false),
            maximize_button: Some(false),
            ..Default::default()
        },
        ..Default::default()
    };

    let Config { variant, initial, .. } = config;
    run_native(
        GUI_WINDOW_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(variant, initial)))),
    )?;
    Ok(())
}
