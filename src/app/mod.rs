mod app;
mod channel_input;
mod parse_input;

pub use app::App;
