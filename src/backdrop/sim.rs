//! Display-free starfield simulation.
//!
//! All randomness flows through a seeded [`SmallRng`] and the drawing area is
//! passed in as a plain [`Viewport`] value, so every update rule here can be
//! driven deterministically from native tests. The DOM layer in the parent
//! module mirrors each tick's [`FrameReport`] into the element tree.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::color::{self, Hsl};

/// Number of floating particles seeded at mount.
pub const PARTICLE_COUNT: usize = 50;
/// Opacity lost by a shooting star on every tick.
pub const STAR_FADE_STEP: f64 = 0.008;
/// A star may drift this far past the viewport edge before it is retired.
pub const STAR_EXIT_MARGIN: f64 = 50.0;
/// Per-tick probability of spawning a new shooting star.
pub const STAR_SPAWN_CHANCE: f64 = 0.005;
/// New stars start this far outside their spawn edge.
pub const STAR_SPAWN_INSET: f64 = 20.0;
/// Shooting star speed range, px per tick.
pub const STAR_MIN_SPEED: f64 = 3.0;
pub const STAR_MAX_SPEED: f64 = 8.0;

/// Drawing-area dimensions. Re-read from the host on every tick rather than
/// tracked through resize events.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Wrap `v` into `[0, limit)` so leaving one edge re-enters the opposite one.
/// A degenerate limit collapses the coordinate to 0 instead of failing.
pub fn wrap(v: f64, limit: f64) -> f64 {
    if limit > 0.0 { v.rem_euclid(limit) } else { 0.0 }
}

fn uniform(rng: &mut impl Rng, limit: f64) -> f64 {
    if limit > 0.0 {
        rng.gen_range(0.0..limit)
    } else {
        0.0
    }
}

/// A floating dust particle. Lives for the whole backdrop lifetime.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub color: Hsl,
}

impl Particle {
    fn random(viewport: Viewport, rng: &mut impl Rng) -> Self {
        Self {
            x: uniform(rng, viewport.width),
            y: uniform(rng, viewport.height),
            vx: rng.gen_range(-1.0..1.0),
            vy: rng.gen_range(-1.0..1.0),
            color: color::particle_color(rng),
        }
    }

    /// Advance one tick with toroidal wraparound.
    pub fn step(&mut self, viewport: Viewport) {
        self.x = wrap(self.x + self.vx, viewport.width);
        self.y = wrap(self.y + self.vy, viewport.height);
    }
}

/// A short-lived glowing streak crossing the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShootingStar {
    pub id: u64,
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub opacity: f64,
}

impl ShootingStar {
    /// Pick a spawn edge uniformly, start just outside it at a random offset,
    /// and aim into a 90-degree arc for that edge (screen coordinates, y
    /// grows downward) at a random speed.
    pub fn spawn(id: u64, viewport: Viewport, rng: &mut impl Rng) -> Self {
        use std::f64::consts::PI;
        let speed = rng.gen_range(STAR_MIN_SPEED..STAR_MAX_SPEED);
        let (x, y, angle) = match rng.gen_range(0u8..4) {
            // left edge: 45..135 degrees
            0 => (
                -STAR_SPAWN_INSET,
                uniform(rng, viewport.height),
                rng.gen_range(0.25 * PI..0.75 * PI),
            ),
            // top edge: 90..180 degrees
            1 => (
                uniform(rng, viewport.width),
                -STAR_SPAWN_INSET,
                rng.gen_range(0.5 * PI..PI),
            ),
            // right edge: 180..270 degrees
            2 => (
                viewport.width + STAR_SPAWN_INSET,
                uniform(rng, viewport.height),
                rng.gen_range(PI..1.5 * PI),
            ),
            // bottom edge: 270..360 degrees
            _ => (
                uniform(rng, viewport.width),
                viewport.height + STAR_SPAWN_INSET,
                rng.gen_range(1.5 * PI..2.0 * PI),
            ),
        };
        Self {
            id,
            x,
            y,
            vx: angle.cos() * speed,
            vy: angle.sin() * speed,
            opacity: 1.0,
        }
    }

    /// Candidate state one tick ahead. The caller decides whether to commit
    /// it or retire the star.
    pub fn advanced(mut self) -> Self {
        self.x += self.vx;
        self.y += self.vy;
        self.opacity -= STAR_FADE_STEP;
        self
    }

    /// True once the star has fully faded or left the viewport by more than
    /// [`STAR_EXIT_MARGIN`] on any side.
    pub fn expired(&self, viewport: Viewport) -> bool {
        self.opacity <= 0.0
            || self.x < -STAR_EXIT_MARGIN
            || self.x > viewport.width + STAR_EXIT_MARGIN
            || self.y < -STAR_EXIT_MARGIN
            || self.y > viewport.height + STAR_EXIT_MARGIN
    }
}

/// What changed during one tick, for mirroring into the display tree.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameReport {
    /// Pre-step indices of retired stars, ascending. Remove paired elements
    /// in reverse so the remaining indices stay valid.
    pub retired: Vec<usize>,
    /// A new star was appended to the live set this tick.
    pub spawned: bool,
}

/// The backdrop's entity collections plus the RNG driving them.
pub struct Starfield {
    particles: Vec<Particle>,
    stars: Vec<ShootingStar>,
    next_star_id: u64,
    rng: SmallRng,
}

impl Starfield {
    /// Seed [`PARTICLE_COUNT`] particles uniformly over the viewport.
    pub fn new(viewport: Viewport, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let particles = (0..PARTICLE_COUNT)
            .map(|_| Particle::random(viewport, &mut rng))
            .collect();
        Self {
            particles,
            stars: Vec::new(),
            next_star_id: 0,
            rng,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn stars(&self) -> &[ShootingStar] {
        &self.stars
    }

    /// Insert a star directly, bypassing the random spawner.
    pub fn add_star(&mut self, star: ShootingStar) {
        self.stars.push(star);
    }

    /// One animation tick, in strict order: advance particles, retire or
    /// advance shooting stars, then maybe spawn a new star.
    pub fn step(&mut self, viewport: Viewport) -> FrameReport {
        for particle in &mut self.particles {
            particle.step(viewport);
        }
        let retired = self.advance_stars(viewport);
        let spawned = self.maybe_spawn(viewport);
        FrameReport { retired, spawned }
    }

    fn advance_stars(&mut self, viewport: Viewport) -> Vec<usize> {
        let mut retired = Vec::new();
        let mut survivors = Vec::with_capacity(self.stars.len());
        for (idx, star) in std::mem::take(&mut self.stars).into_iter().enumerate() {
            let next = star.advanced();
            if next.expired(viewport) {
                retired.push(idx);
            } else {
                survivors.push(next);
            }
        }
        self.stars = survivors;
        retired
    }

    fn maybe_spawn(&mut self, viewport: Viewport) -> bool {
        if !self.rng.gen_bool(STAR_SPAWN_CHANCE) {
            return false;
        }
        let id = self.next_star_id;
        self.next_star_id += 1;
        let star = ShootingStar::spawn(id, viewport, &mut self.rng);
        self.stars.push(star);
        true
    }
}
