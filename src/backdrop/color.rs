//! Particle colors, drawn from three HSL hue bands.

use std::fmt;

use rand::Rng;

/// Saturation shared by every particle color, percent.
pub const SATURATION: f64 = 70.0;
/// Lightness shared by every particle color, percent.
pub const LIGHTNESS: f64 = 60.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl Hsl {
    pub fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({:.1}, {:.0}%, {:.0}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

/// Draw a particle color: blue/cyan with probability 0.3, purple 0.3,
/// pink 0.4, all at fixed saturation and lightness.
pub fn particle_color(rng: &mut impl Rng) -> Hsl {
    let roll: f64 = rng.gen_range(0.0..1.0);
    let hue = if roll > 0.7 {
        rng.gen_range(200.0..260.0) // blue / cyan
    } else if roll > 0.4 {
        rng.gen_range(280.0..320.0) // purple
    } else {
        rng.gen_range(300.0..320.0) // pink
    };
    Hsl::new(hue, SATURATION, LIGHTNESS)
}
