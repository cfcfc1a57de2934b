//! Background star field.
//!
//! Purely decorative and the only random element of the dashboard. The caller
//! supplies the RNG; nothing here feeds back into a profile.

use crate::config::StarFieldConfig;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub id: usize,
    /// Horizontal position, percent of viewport width
    pub x: f64,
    /// Vertical position, percent of viewport height
    pub y: f64,
    /// Diameter in pixels, 1-3
    pub size: f64,
    /// Twinkle period in seconds, 2-5
    pub duration: f64,
    /// Twinkle start delay in seconds, 0-5
    pub delay: f64,
}

/// Scatter stars for a viewport of the given width.
pub fn generate_stars<R: Rng>(
    rng: &mut R,
    config: &StarFieldConfig,
    viewport_width_px: u32,
) -> Vec<Star> {
    (0..config.star_count(viewport_width_px))
        .map(|id| Star {
            id,
            x: rng.gen_range(0.0..100.0),
            y: rng.gen_range(0.0..100.0),
            size: rng.gen_range(1.0..3.0),
            duration: rng.gen_range(2.0..5.0),
            delay: rng.gen_range(0.0..5.0),
        })
        .collect()
}
