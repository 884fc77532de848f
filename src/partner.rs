//! Collision partner selection.
//!
//! Each frame the container asks a [`PartnerSearch`] which particle, if any,
//! the particle at a given index collides with. Two policies are provided:
//!
//! - [`FirstMatch`]: the first particle in storage order that is touching and
//!   approaching. This is the default and the results depend on storage order.
//! - [`Nearest`]: the nearest other particle, accepted only if it is touching
//!   and approaching.

use serde::Deserialize;

use crate::particle::Particle;

/// Strategy for choosing the collision partner of `particles[index]`.
pub trait PartnerSearch {
    /// Returns the index of the partner, never `index` itself.
    fn find_partner(&self, index: usize, particles: &[Particle]) -> Option<usize>;
}

/// A pair is only resolved while the discs overlap and are closing in.
fn is_colliding(a: &Particle, b: &Particle) -> bool {
    a.is_touching(b) && a.is_approaching(b)
}

/// First touching-and-approaching particle in storage order.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstMatch;

impl PartnerSearch for FirstMatch {
    fn find_partner(&self, index: usize, particles: &[Particle]) -> Option<usize> {
        let current = &particles[index];
        particles
            .iter()
            .enumerate()
            .find(|&(j, other)| j != index && is_colliding(other, current))
            .map(|(j, _)| j)
    }
}

/// Nearest other particle, if it is touching and approaching.
#[derive(Debug, Default, Clone, Copy)]
pub struct Nearest;

impl PartnerSearch for Nearest {
    fn find_partner(&self, index: usize, particles: &[Particle]) -> Option<usize> {
        let nearest = nearest_index(index, particles)?;
        is_colliding(&particles[nearest], &particles[index]).then_some(nearest)
    }
}

/// Index of the particle closest to `particles[index]`, excluding itself.
/// Ties go to the lower index. `None` if there is no other particle.
pub fn nearest_index(index: usize, particles: &[Particle]) -> Option<usize> {
    let origin = particles[index].position();
    let mut best: Option<(usize, f32)> = None;

    for (j, other) in particles.iter().enumerate() {
        if j == index {
            continue;
        }
        let distance = (other.position() - origin).length();
        if best.is_none_or(|(_, d)| distance < d) {
            best = Some((j, distance));
        }
    }

    best.map(|(j, _)| j)
}

/// Configurable choice of partner search, as it appears in config files and
/// on the command line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum PartnerSelection {
    #[default]
    FirstMatch,
    Nearest,
}

impl PartnerSelection {
    pub fn strategy(self) -> Box<dyn PartnerSearch> {
        match self {
            PartnerSelection::FirstMatch => Box::new(FirstMatch),
            PartnerSelection::Nearest => Box::new(Nearest),
        }
    }
}
