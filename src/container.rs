use eframe::epaint::Vec2;
use rand::Rng;

use crate::bounds::Bounds;
use crate::error::SimulationError;
use crate::particle::{Particle, ParticleKind};
use crate::partner::{FirstMatch, PartnerSearch, PartnerSelection};
use crate::spawn::{SpawnSettings, spawn_particles};
use crate::statistics::SpeedStatistics;

// ===================================================================================
// Gas container
// ===================================================================================

/// The box of gas: owns the particles and advances them one frame at a time.
///
/// A frame visits the particles in storage order. For each one it
/// 1) asks the partner search for a colliding particle and, if found,
///    resolves the elastic collision for both,
/// 2) otherwise reflects off a wall, vertical walls taking priority,
/// 3) records the particle's speed by kind,
/// 4) moves the particle by its velocity.
///
/// Collisions are O(n^2) per frame; the particle counts this is meant for
/// are small.
pub struct GasContainer {
    bounds: Bounds,
    particles: Vec<Particle>,
    speeds: SpeedStatistics,
    partner_search: Box<dyn PartnerSearch>,
    frame: u64,
}

impl GasContainer {
    /// Builds a container around explicitly supplied particles.
    pub fn with_particles(bounds: Bounds, particles: Vec<Particle>) -> Self {
        log::info!(
            "gas container {} x {} with {} particles",
            bounds.width(),
            bounds.height(),
            particles.len()
        );
        Self {
            bounds,
            particles,
            speeds: SpeedStatistics::new(),
            partner_search: Box::new(FirstMatch),
            frame: 0,
        }
    }

    /// Builds a container filled with randomly placed particles.
    pub fn spawn(
        bounds: Bounds,
        settings: &SpawnSettings,
        rng: &mut impl Rng,
    ) -> Result<Self, SimulationError> {
        let particles = spawn_particles(&bounds, settings, rng)?;
        Ok(Self::with_particles(bounds, particles))
    }

    /// Replaces the collision partner search.
    pub fn with_partner_search(mut self, search: impl PartnerSearch + 'static) -> Self {
        self.partner_search = Box::new(search);
        self
    }

    pub fn with_partner_selection(mut self, selection: PartnerSelection) -> Self {
        self.partner_search = selection.strategy();
        self
    }

    /// Advances the simulation by one frame.
    pub fn advance_one_frame(&mut self) {
        self.speeds.clear();

        for i in 0..self.particles.len() {
            match self.partner_search.find_partner(i, &self.particles) {
                Some(j) => {
                    let (particle, partner) = pair_mut(&mut self.particles, i, j);
                    if particle.collide_with(partner) {
                        log::debug!("frame {}: particle {} collided with {}", self.frame, i, j);
                    }
                }
                None => self.reflect_off_walls(i),
            }

            let particle = &mut self.particles[i];
            self.speeds.record(particle.kind(), particle.speed());
            particle.advance();
        }

        self.frame += 1;
    }

    fn reflect_off_walls(&mut self, index: usize) {
        let particle = &mut self.particles[index];
        if self.bounds.touches_vertical_wall(particle) {
            particle.reflect_off_vertical_wall();
        } else if self.bounds.touches_horizontal_wall(particle) {
            particle.reflect_off_horizontal_wall();
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn top_left(&self) -> Vec2 {
        self.bounds.top_left()
    }

    pub fn bottom_right(&self) -> Vec2 {
        self.bounds.bottom_right()
    }

    pub fn width(&self) -> f32 {
        self.bounds.width()
    }

    pub fn height(&self) -> f32 {
        self.bounds.height()
    }

    /// Speeds recorded during the last frame.
    pub fn speed_statistics(&self) -> &SpeedStatistics {
        &self.speeds
    }

    pub fn speeds(&self, kind: ParticleKind) -> &[f32] {
        self.speeds.get(kind)
    }

    /// Number of frames advanced so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn total_kinetic_energy(&self) -> f32 {
        self.particles.iter().map(Particle::kinetic_energy).sum()
    }

    pub fn total_momentum(&self) -> Vec2 {
        self.particles
            .iter()
            .fold(Vec2::ZERO, |acc, p| acc + p.momentum())
    }
}

/// Mutable references to two distinct particles.
fn pair_mut(particles: &mut [Particle], i: usize, j: usize) -> (&mut Particle, &mut Particle) {
    assert_ne!(i, j, "a particle can't collide with itself");
    if i < j {
        let (head, tail) = particles.split_at_mut(j);
        (&mut head[i], &mut tail[0])
    } else {
        let (head, tail) = particles.split_at_mut(i);
        (&mut tail[0], &mut head[j])
    }
}
