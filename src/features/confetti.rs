//! Confetti particle field
//!
//! One-shot (non-recycling) emission: pieces are spawned along the top edge,
//! ramped in over [`EMISSION_RAMP`], fall under gravity with friction, and are
//! dropped once they leave the field. When all pieces have been emitted and
//! none remain, the field is finished and stays empty.
//!
//! Physics constants are per 60 Hz frame and scaled by elapsed time.
//! `ConfettiParams::recycle` is carried for the renderer contract but the
//! field always behaves as non-recycling.

use std::time::Duration;

use rand::Rng;

use super::celebration::ConfettiParams;
use super::palette::{self, PaletteColor};

/// Time over which the emitted count ramps from 0 to the particle count
pub const EMISSION_RAMP: Duration = Duration::from_millis(5000);

const GRAVITY: f32 = 0.1;
const WIND: f32 = 0.0;
const FRICTION: f32 = 0.99;
const INITIAL_VELOCITY_X: f32 = 4.0;
const INITIAL_VELOCITY_Y: f32 = 10.0;
/// Frames per second the physics constants are tuned for
const REFERENCE_FPS: f32 = 60.0;
/// Large frame gaps (window hidden, debugger) are clamped
const MAX_STEP: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleShape {
    Square,
    Circle,
    Strip,
}

#[derive(Debug, Clone)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub width: f32,
    pub height: f32,
    /// Rotation in radians
    pub angle: f32,
    pub spin: f32,
    pub shape: ParticleShape,
    pub color: PaletteColor,
}

impl Particle {
    fn spawn(params: &ConfettiParams, index: u32, rng: &mut impl Rng) -> Self {
        let color = palette::cyclic(params.colors, rng.random_range(0..params.colors.len().max(1)))
            .unwrap_or(PaletteColor::Pink);
        let shape = match index % 3 {
            0 => ParticleShape::Square,
            1 => ParticleShape::Circle,
            _ => ParticleShape::Strip,
        };
        let width = rng.random_range(5.0..20.0);
        let height = match shape {
            ParticleShape::Strip => width * 0.4,
            _ => width,
        };
        Self {
            x: rng.random_range(0.0..=params.width.max(1) as f32),
            y: -height,
            vx: rng.random_range(-INITIAL_VELOCITY_X..=INITIAL_VELOCITY_X),
            vy: rng.random_range(-INITIAL_VELOCITY_Y..=0.0),
            width,
            height,
            angle: rng.random_range(0.0..std::f32::consts::TAU),
            spin: rng.random_range(-0.2..=0.2),
            shape,
            color,
        }
    }

    fn step(&mut self, frames: f32) {
        self.x += self.vx * frames;
        self.y += self.vy * frames;
        self.vy += GRAVITY * frames;
        self.vx += WIND * frames;
        let damping = FRICTION.powf(frames);
        self.vx *= damping;
        self.vy *= damping;
        self.angle += self.spin * frames;
    }

    /// Fully below the field (pieces never come back up once falling)
    fn is_gone(&self, field_height: f32) -> bool {
        self.y - self.width.max(self.height) > field_height
    }
}

/// Live particle field sized to the viewport
#[derive(Debug, Clone)]
pub struct ConfettiField {
    params: ConfettiParams,
    particles: Vec<Particle>,
    emitted: u32,
    elapsed: Duration,
}

impl ConfettiField {
    pub fn new(params: ConfettiParams) -> Self {
        tracing::info!(
            "Starting confetti: {}x{}, {} pieces, recycle={}",
            params.width,
            params.height,
            params.particle_count,
            params.recycle
        );
        Self {
            particles: Vec::with_capacity(params.particle_count as usize),
            params,
            emitted: 0,
            elapsed: Duration::ZERO,
        }
    }

    #[cfg(test)]
    pub fn params(&self) -> &ConfettiParams {
        &self.params
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[cfg(test)]
    pub fn emitted(&self) -> u32 {
        self.emitted
    }

    /// Track a new viewport size. Existing pieces keep their positions.
    pub fn resize(&mut self, width: u32, height: u32) {
        if (self.params.width, self.params.height) != (width, height) {
            tracing::debug!("Confetti field resized to {}x{}", width, height);
            self.params.width = width;
            self.params.height = height;
        }
    }

    /// All pieces emitted and fallen out of view
    pub fn is_finished(&self) -> bool {
        self.emitted >= self.params.particle_count && self.particles.is_empty()
    }

    /// Advance using the thread-local RNG
    pub fn advance(&mut self, dt: Duration) {
        let mut rng = rand::rng();
        self.advance_with(dt, &mut rng);
    }

    /// Advance the simulation by `dt`, spawning according to the ramp
    pub fn advance_with(&mut self, dt: Duration, rng: &mut impl Rng) {
        if self.is_finished() {
            return;
        }
        let dt = dt.min(MAX_STEP);
        self.elapsed += dt;

        let target = self.target_emitted();
        let mut spawned = 0;
        while self.emitted < target {
            self.particles
                .push(Particle::spawn(&self.params, self.emitted, rng));
            self.emitted += 1;
            spawned += 1;
        }

        let frames = dt.as_secs_f32() * REFERENCE_FPS;
        let height = self.params.height as f32;
        for particle in &mut self.particles {
            particle.step(frames);
        }
        self.particles.retain(|p| !p.is_gone(height));

        if spawned > 0 {
            tracing::trace!(
                "Confetti spawned {} (emitted {}/{}, live {})",
                spawned,
                self.emitted,
                self.params.particle_count,
                self.particles.len()
            );
        }
        if self.is_finished() {
            tracing::debug!("Confetti finished");
        }
    }

    fn target_emitted(&self) -> u32 {
        let ramp = EMISSION_RAMP.as_secs_f32();
        let progress = if ramp > 0.0 {
            (self.elapsed.as_secs_f32() / ramp).clamp(0.0, 1.0)
        } else {
            1.0
        };
        (self.params.particle_count as f32 * progress).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn params(width: u32, height: u32) -> ConfettiParams {
        ConfettiParams {
            width,
            height,
            recycle: false,
            particle_count: 500,
            colors: palette::CONFETTI_PALETTE,
        }
    }

    fn frame() -> Duration {
        Duration::from_millis(16)
    }

    #[test]
    fn test_emission_ramps_up() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut field = ConfettiField::new(params(800, 600));
        assert_eq!(field.emitted(), 0);

        field.advance_with(Duration::from_millis(1000), &mut rng);
        // Clamped to MAX_STEP (100ms) of a 5s ramp
        assert_eq!(field.emitted(), 10);

        for _ in 0..60 {
            field.advance_with(Duration::from_millis(100), &mut rng);
        }
        assert_eq!(field.emitted(), 500, "never more than the particle count");
    }

    #[test]
    fn test_particles_use_palette_and_start_in_field() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut field = ConfettiField::new(params(800, 600));
        field.advance_with(Duration::from_millis(100), &mut rng);

        assert!(!field.particles().is_empty());
        for p in field.particles() {
            assert!(palette::CONFETTI_PALETTE.contains(&p.color));
            assert!(p.x >= -INITIAL_VELOCITY_X * 6.0 && p.x <= 800.0 + INITIAL_VELOCITY_X * 6.0);
        }
    }

    #[test]
    fn test_particles_fall() {
        let mut particle = Particle {
            x: 0.0,
            y: 0.0,
            vx: 0.0,
            vy: 0.0,
            width: 10.0,
            height: 10.0,
            angle: 0.0,
            spin: 0.0,
            shape: ParticleShape::Square,
            color: PaletteColor::Blue,
        };
        for _ in 0..60 {
            particle.step(1.0);
        }
        assert!(particle.y > 0.0);
        assert!(particle.vy > 0.0);
    }

    #[test]
    fn test_field_finishes_without_recycling() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut field = ConfettiField::new(ConfettiParams {
            particle_count: 20,
            ..params(200, 100)
        });

        let mut steps = 0;
        while !field.is_finished() {
            field.advance_with(frame(), &mut rng);
            steps += 1;
            assert!(steps < 10_000, "confetti never finished");
        }
        assert_eq!(field.emitted(), 20);
        assert!(field.particles().is_empty());

        // Stays empty afterwards
        field.advance_with(frame(), &mut rng);
        assert!(field.particles().is_empty());
    }

    #[test]
    fn test_resize_updates_params() {
        let mut field = ConfettiField::new(params(800, 600));
        field.resize(1200, 900);
        assert_eq!(field.params().width, 1200);
        assert_eq!(field.params().height, 900);
    }

    #[test]
    fn test_zero_sized_field_does_not_panic() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut field = ConfettiField::new(params(0, 0));
        for _ in 0..10 {
            field.advance_with(frame(), &mut rng);
        }
    }
}
