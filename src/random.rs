use rand::Rng;
use tracing::debug;

use crate::color::Rgb;
use crate::state::ColorState;

/// Draws each channel independently and uniformly from `0..=255`.
pub fn random_color<R: Rng>(rng: &mut R) -> Rgb {
    Rgb::new(rng.gen(), rng.gen(), rng.gen())
}

/// Overwrites the state with a random color, notifying subscribers once just
/// like a slider change would.
pub fn randomize<R: Rng>(state: &mut ColorState, rng: &mut R) -> Rgb {
    let color = random_color(rng);
    debug!(hex = %color.hex(), "randomized");
    state.set_color(color);
    color
}
