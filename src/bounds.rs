use eframe::epaint::Vec2;

use crate::error::SimulationError;
use crate::particle::Particle;

/// Axis-aligned rectangle the gas is confined to. Screen convention: `y` grows
/// downwards, so `top_left` holds the minimum of both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    top_left: Vec2,
    bottom_right: Vec2,
}

impl Bounds {
    /// Builds the rectangle spanning `dimensions` (width, height) from `top_left`.
    pub fn new(top_left: Vec2, dimensions: Vec2) -> Result<Self, SimulationError> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !(valid(dimensions.x) && valid(dimensions.y)) || !top_left.is_finite() {
            return Err(SimulationError::InvalidBounds {
                width: dimensions.x,
                height: dimensions.y,
            });
        }
        Ok(Self {
            top_left,
            bottom_right: top_left + dimensions,
        })
    }

    pub fn top_left(&self) -> Vec2 {
        self.top_left
    }

    pub fn bottom_right(&self) -> Vec2 {
        self.bottom_right
    }

    pub fn width(&self) -> f32 {
        self.bottom_right.x - self.top_left.x
    }

    pub fn height(&self) -> f32 {
        self.bottom_right.y - self.top_left.y
    }

    /// True if the particle reaches the left or right wall.
    pub fn touches_vertical_wall(&self, particle: &Particle) -> bool {
        let x = particle.position().x;
        let r = particle.radius();
        x - r <= self.top_left.x || x + r >= self.bottom_right.x
    }

    /// True if the particle reaches the top or bottom wall.
    pub fn touches_horizontal_wall(&self, particle: &Particle) -> bool {
        let y = particle.position().y;
        let r = particle.radius();
        y - r <= self.top_left.y || y + r >= self.bottom_right.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::ParticleKind;

    fn at(x: f32, y: f32) -> Particle {
        Particle::new(
            Vec2::new(x, y),
            Vec2::ZERO,
            1.0,
            10.0,
            ParticleKind::Red.color(),
            ParticleKind::Red,
        )
        .unwrap()
    }

    #[test]
    fn corners_and_size() {
        let b = Bounds::new(Vec2::new(9.0, 11.0), Vec2::new(30.0, 40.0)).unwrap();
        assert_eq!(b.top_left(), Vec2::new(9.0, 11.0));
        assert_eq!(b.bottom_right(), Vec2::new(39.0, 51.0));
        assert_eq!(b.width(), 30.0);
        assert_eq!(b.height(), 40.0);
    }

    #[test]
    fn rejects_empty_or_inverted_dimensions() {
        assert!(Bounds::new(Vec2::ZERO, Vec2::new(0.0, 10.0)).is_err());
        assert!(Bounds::new(Vec2::ZERO, Vec2::new(10.0, -1.0)).is_err());
        assert!(Bounds::new(Vec2::ZERO, Vec2::new(f32::INFINITY, 1.0)).is_err());
    }

    #[test]
    fn wall_contact_is_inclusive() {
        let b = Bounds::new(Vec2::ZERO, Vec2::new(100.0, 100.0)).unwrap();

        assert!(b.touches_vertical_wall(&at(10.0, 50.0)));
        assert!(b.touches_vertical_wall(&at(90.0, 50.0)));
        assert!(!b.touches_vertical_wall(&at(50.0, 50.0)));

        assert!(b.touches_horizontal_wall(&at(50.0, 10.0)));
        assert!(b.touches_horizontal_wall(&at(50.0, 95.0)));
        assert!(!b.touches_horizontal_wall(&at(50.0, 50.0)));
    }
}
