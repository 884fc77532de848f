//! Random initial state.
//!
//! Only used when a container is built; the physics never draws random
//! numbers. The generator is passed in so a seed fully determines the layout.

use eframe::epaint::Vec2;
/// The `rand` crate for random number generation.
use rand::Rng;

use crate::bounds::Bounds;
use crate::error::SimulationError;
use crate::particle::{Particle, ParticleKind};

/// How many particles to place and how.
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnSettings {
    pub count: usize,
    /// Distance kept clear of every wall when choosing positions.
    pub margin: f32,
    /// Each velocity component is drawn uniformly from `[-max, max]`.
    pub max_velocity_component: f32,
}

impl Default for SpawnSettings {
    fn default() -> Self {
        Self {
            count: 30,
            margin: 50.0,
            max_velocity_component: 7.0,
        }
    }
}

impl SpawnSettings {
    pub fn validate(&self, bounds: &Bounds) -> Result<(), SimulationError> {
        let fits = |extent: f32| extent - 2.0 * self.margin > 0.0;
        if !(self.margin.is_finite() && self.margin >= 0.0)
            || !fits(bounds.width())
            || !fits(bounds.height())
        {
            return Err(SimulationError::MarginTooLarge {
                margin: self.margin,
                width: bounds.width(),
                height: bounds.height(),
            });
        }
        let max = self.max_velocity_component;
        if !(max.is_finite() && max >= 0.0) {
            return Err(SimulationError::InvalidVelocityRange(max));
        }
        Ok(())
    }
}

/// Places `settings.count` particles inside `bounds`, cycling through the
/// particle kinds by index.
pub fn spawn_particles(
    bounds: &Bounds,
    settings: &SpawnSettings,
    rng: &mut impl Rng,
) -> Result<Vec<Particle>, SimulationError> {
    settings.validate(bounds)?;

    let min = bounds.top_left() + Vec2::splat(settings.margin);
    let max = bounds.bottom_right() - Vec2::splat(settings.margin);
    let v = settings.max_velocity_component;

    let particles = (0..settings.count)
        .map(|i| {
            let kind = ParticleKind::ALL[i % ParticleKind::ALL.len()];
            let position = Vec2::new(rng.random_range(min.x..max.x), rng.random_range(min.y..max.y));
            let velocity = Vec2::new(rng.random_range(-v..=v), rng.random_range(-v..=v));
            Particle::of_kind(kind, position, velocity)
        })
        .collect();

    Ok(particles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn bounds() -> Bounds {
        Bounds::new(Vec2::new(100.0, 100.0), Vec2::new(300.0, 400.0)).unwrap()
    }

    #[test]
    fn particles_stay_inside_margin() {
        let settings = SpawnSettings::default();
        let mut rng = StdRng::seed_from_u64(225);
        let particles = spawn_particles(&bounds(), &settings, &mut rng).unwrap();

        assert_eq!(particles.len(), 30);
        for p in &particles {
            let pos = p.position();
            assert!(pos.x >= 150.0 && pos.x < 350.0);
            assert!(pos.y >= 150.0 && pos.y < 450.0);
            assert!(p.velocity().x.abs() <= 7.0);
            assert!(p.velocity().y.abs() <= 7.0);
        }
    }

    #[test]
    fn kinds_cycle_by_index() {
        let mut rng = StdRng::seed_from_u64(1);
        let settings = SpawnSettings { count: 5, ..Default::default() };
        let kinds: Vec<_> = spawn_particles(&bounds(), &settings, &mut rng)
            .unwrap()
            .iter()
            .map(Particle::kind)
            .collect();

        use ParticleKind::*;
        assert_eq!(kinds, vec![Blue, Red, Green, Blue, Red]);
    }

    #[test]
    fn same_seed_same_layout() {
        let settings = SpawnSettings::default();
        let a = spawn_particles(&bounds(), &settings, &mut StdRng::seed_from_u64(7)).unwrap();
        let b = spawn_particles(&bounds(), &settings, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn oversized_margin_is_rejected() {
        let settings = SpawnSettings { margin: 150.0, ..Default::default() };
        let err = spawn_particles(&bounds(), &settings, &mut StdRng::seed_from_u64(1)).unwrap_err();
        assert!(matches!(err, SimulationError::MarginTooLarge { .. }));
    }

    #[test]
    fn negative_velocity_range_is_rejected() {
        let settings = SpawnSettings { max_velocity_component: -1.0, ..Default::default() };
        let err = spawn_particles(&bounds(), &settings, &mut StdRng::seed_from_u64(1)).unwrap_err();
        assert_eq!(err, SimulationError::InvalidVelocityRange(-1.0));
    }
}
