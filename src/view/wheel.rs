//! Zodiac wheel state.

use crate::cosmos::Zodiac;

/// Distance of each sign from the wheel's center, in pixels.
pub const WHEEL_RADIUS: f64 = 100.0;
/// Degrees between neighbouring signs.
pub const DEGREES_PER_SIGN: f64 = 30.0;

/// The wheel opens on the address's sign and turns to whatever sign is clicked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZodiacWheel {
    active: Zodiac,
}

impl ZodiacWheel {
    pub fn new(initial: Zodiac) -> Self {
        Self { active: initial }
    }

    pub fn active(&self) -> Zodiac {
        self.active
    }

    pub fn select(&mut self, sign: Zodiac) {
        self.active = sign;
    }

    /// Wheel rotation in degrees that brings the active sign to the top.
    pub fn rotation(&self) -> f64 {
        -(self.active.index() as f64) * DEGREES_PER_SIGN
    }

    /// Pixel offset of a sign from the wheel's center; Aries sits at 12 o'clock.
    pub fn placement(sign: Zodiac) -> (f64, f64) {
        let angle = (sign.index() as f64 * DEGREES_PER_SIGN - 90.0).to_radians();
        (angle.cos() * WHEEL_RADIUS, angle.sin() * WHEEL_RADIUS)
    }

    pub fn description(&self) -> String {
        format!(
            "This wallet resonates with the energy of {}, channeling {} element traits in its on-chain activities.",
            self.active.name(),
            self.active.element().as_str().to_lowercase()
        )
    }
}
