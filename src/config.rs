use clap::{ArgAction, Parser, ValueEnum};

use crate::color::{parse_hex_color_code, Rgb};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Variant {
    /// Sliders, swatch and hex label.
    #[default]
    Basic,
    /// Adds a randomize button and cursor icons.
    Randomizer,
}

#[derive(Debug, Parser)]
#[command(name = "color-generator", version, about = "Mix a color with three sliders and read its hex code")]
pub struct Config {
    /// Which window layout to open
    #[arg(long, value_enum, default_value_t = Variant::Basic)]
    pub variant: Variant,

    /// Starting color as #RRGGBB
    #[arg(long, value_parser = parse_initial_color, default_value = "#000000")]
    pub initial: Rgb,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

fn parse_initial_color(input: &str) -> Result<Rgb, String> {
    parse_hex_color_code(input).map_err(|e| e.to_string())
}
