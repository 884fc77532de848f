/// The `egui` colour type, used as the opaque display attribute of a particle.
use eframe::egui::Color32;
/// 2D vector type from eframe's geometry crate.
use eframe::epaint::Vec2;

use crate::error::SimulationError;

// ===================================================================================
// Particle kinds
// ===================================================================================

/// The category a particle belongs to. Kinds carry the spawn presets (mass,
/// radius, colour) and are the key for speed statistics; the physics itself
/// only ever looks at a particle's own mass and radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ParticleKind {
    Blue,
    Red,
    Green,
}

impl ParticleKind {
    /// All kinds, in spawn order.
    pub const ALL: [ParticleKind; 3] = [ParticleKind::Blue, ParticleKind::Red, ParticleKind::Green];

    pub fn mass(self) -> f32 {
        match self {
            ParticleKind::Blue => 5.0,
            ParticleKind::Red => 7.0,
            ParticleKind::Green => 10.0,
        }
    }

    pub fn radius(self) -> f32 {
        match self {
            ParticleKind::Blue => 20.0,
            ParticleKind::Red => 25.0,
            ParticleKind::Green => 30.0,
        }
    }

    pub fn color(self) -> Color32 {
        match self {
            ParticleKind::Blue => Color32::BLUE,
            ParticleKind::Red => Color32::RED,
            ParticleKind::Green => Color32::GREEN,
        }
    }

    /// Human readable label, used for plot titles.
    pub fn label(self) -> &'static str {
        match self {
            ParticleKind::Blue => "Blue",
            ParticleKind::Red => "Red",
            ParticleKind::Green => "Green",
        }
    }
}

// ===================================================================================
// Particle
// ===================================================================================

/// A disc-shaped gas particle.
///
/// Position and velocity change every frame. Mass, radius, colour and kind
/// are fixed at construction, which is also where they are validated.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    position: Vec2,
    velocity: Vec2,
    mass: f32,
    radius: f32,
    color: Color32,
    kind: ParticleKind,
}

impl Particle {
    /// Creates a particle, rejecting non-positive or non-finite mass and radius.
    pub fn new(
        position: Vec2,
        velocity: Vec2,
        mass: f32,
        radius: f32,
        color: Color32,
        kind: ParticleKind,
    ) -> Result<Self, SimulationError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(SimulationError::InvalidRadius(radius));
        }
        if !(mass.is_finite() && mass > 0.0) {
            return Err(SimulationError::InvalidMass(mass));
        }
        Ok(Self {
            position,
            velocity,
            mass,
            radius,
            color,
            kind,
        })
    }

    /// Creates a particle using the mass, radius and colour presets of `kind`.
    pub fn of_kind(kind: ParticleKind, position: Vec2, velocity: Vec2) -> Self {
        Self {
            position,
            velocity,
            mass: kind.mass(),
            radius: kind.radius(),
            color: kind.color(),
            kind,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn kind(&self) -> ParticleKind {
        self.kind
    }

    /// Euclidean norm of the velocity.
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass * self.velocity.length_sq()
    }

    pub fn momentum(&self) -> Vec2 {
        self.velocity * self.mass
    }

    /// Integrates position by one step of velocity. No bounds checking: wall
    /// collisions must already have been resolved for this frame.
    pub fn advance(&mut self) {
        self.position += self.velocity;
    }

    /// True if the discs overlap or just touch.
    pub fn is_touching(&self, other: &Particle) -> bool {
        (self.position - other.position).length() <= self.radius + other.radius
    }

    /// True if `other` gets strictly closer after one step, seen from this
    /// particle's rest frame.
    pub fn is_approaching(&self, other: &Particle) -> bool {
        let relative_position = other.position - self.position;
        let relative_velocity = other.velocity - self.velocity;

        let current = relative_position.length();
        let next = (relative_position + relative_velocity).length();
        next < current
    }

    pub fn reflect_off_vertical_wall(&mut self) {
        self.velocity.x = -self.velocity.x;
    }

    pub fn reflect_off_horizontal_wall(&mut self) {
        self.velocity.y = -self.velocity.y;
    }

    /// Velocity this particle would have after an elastic collision with
    /// `other`, impulse along the line of centres:
    ///
    /// `v1' = v1 - 2 m2 / (m1 + m2) * <v1 - v2, x1 - x2> / |x1 - x2|^2 * (x1 - x2)`
    ///
    /// Returns `None` when the centres coincide, since the line of centres is
    /// undefined.
    pub fn collision_velocity(&self, other: &Particle) -> Option<Vec2> {
        let offset = self.position - other.position;
        let distance_sq = offset.length_sq();
        if distance_sq == 0.0 {
            return None;
        }

        let mass_factor = 2.0 * other.mass / (self.mass + other.mass);
        let projection = (self.velocity - other.velocity).dot(offset) / distance_sq;
        Some(self.velocity - offset * (mass_factor * projection))
    }

    /// Resolves an elastic collision between `self` and `other`.
    ///
    /// Both velocities are computed from the pre-collision state before
    /// either is written. Returns false, leaving both untouched, if the
    /// centres coincide.
    pub fn collide_with(&mut self, other: &mut Particle) -> bool {
        let (Some(own), Some(theirs)) = (self.collision_velocity(other), other.collision_velocity(self))
        else {
            log::warn!(
                "skipping collision between coincident particles at ({}, {})",
                self.position.x,
                self.position.y
            );
            return false;
        };

        self.velocity = own;
        other.velocity = theirs;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn approx_eq(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < EPS
    }

    fn particle(pos: (f32, f32), vel: (f32, f32), mass: f32, radius: f32) -> Particle {
        Particle::new(
            Vec2::new(pos.0, pos.1),
            Vec2::new(vel.0, vel.1),
            mass,
            radius,
            Color32::WHITE,
            ParticleKind::Blue,
        )
        .unwrap()
    }

    #[test]
    fn construction_keeps_attributes() {
        let p = Particle::new(
            Vec2::new(2.0, 3.0),
            Vec2::new(4.0, 5.0),
            1.0,
            10.0,
            Color32::RED,
            ParticleKind::Red,
        )
        .unwrap();

        assert_eq!(p.position(), Vec2::new(2.0, 3.0));
        assert_eq!(p.velocity(), Vec2::new(4.0, 5.0));
        assert_eq!(p.radius(), 10.0);
        assert_eq!(p.color(), Color32::RED);
        assert_eq!(p.kind(), ParticleKind::Red);
    }

    #[test]
    fn construction_rejects_bad_radius_and_mass() {
        let make = |mass, radius| {
            Particle::new(Vec2::ZERO, Vec2::ZERO, mass, radius, Color32::WHITE, ParticleKind::Blue)
        };
        assert_eq!(make(1.0, 0.0), Err(SimulationError::InvalidRadius(0.0)));
        assert_eq!(make(1.0, -3.0), Err(SimulationError::InvalidRadius(-3.0)));
        assert_eq!(make(0.0, 1.0), Err(SimulationError::InvalidMass(0.0)));
        assert!(matches!(make(f32::NAN, 1.0), Err(SimulationError::InvalidMass(_))));
    }

    #[test]
    fn kind_presets() {
        let p = Particle::of_kind(ParticleKind::Green, Vec2::ZERO, Vec2::ZERO);
        assert_eq!(p.mass(), 10.0);
        assert_eq!(p.radius(), 30.0);
        assert_eq!(p.color(), Color32::GREEN);
    }

    #[test]
    fn advance_adds_velocity() {
        let mut p = particle((2.0, 3.0), (4.0, 5.0), 1.0, 10.0);
        p.advance();
        assert_eq!(p.position(), Vec2::new(6.0, 8.0));
        p.advance();
        assert_eq!(p.position(), Vec2::new(10.0, 13.0));
    }

    #[test]
    fn touching_is_inclusive_and_symmetric() {
        let a = particle((0.0, 0.0), (0.0, 0.0), 1.0, 10.0);
        let b = particle((20.0, 0.0), (0.0, 0.0), 1.0, 10.0);
        let c = particle((20.1, 0.0), (0.0, 0.0), 1.0, 10.0);

        assert!(a.is_touching(&b));
        assert!(b.is_touching(&a));
        assert!(!a.is_touching(&c));
    }

    #[test]
    fn approaching_depends_on_relative_motion() {
        let a = particle((50.0, 50.0), (2.0, -2.0), 1.0, 10.0);
        let towards = particle((55.0, 56.0), (-3.0, -3.0), 1.0, 10.0);
        let away = particle((55.0, 56.0), (5.0, 3.0), 1.0, 10.0);

        assert!(a.is_approaching(&towards));
        assert!(towards.is_approaching(&a));
        assert!(!a.is_approaching(&away));
    }

    #[test]
    fn perpendicular_relative_motion_is_not_approaching() {
        let a = particle((110.0, 110.0), (3.0, -3.0), 10.0, 10.0);
        let b = particle((111.0, 111.0), (-3.0, 3.0), 15.0, 10.0);
        assert!(!a.is_approaching(&b));
    }

    #[test]
    fn wall_reflection_flips_one_component() {
        let mut p = particle((0.0, 0.0), (1.5, -2.5), 1.0, 1.0);
        p.reflect_off_vertical_wall();
        assert_eq!(p.velocity(), Vec2::new(-1.5, -2.5));
        p.reflect_off_horizontal_wall();
        assert_eq!(p.velocity(), Vec2::new(-1.5, 2.5));
    }

    #[test]
    fn head_on_unequal_masses() {
        let mut a = particle((100.0, 150.0), (2.0, 0.0), 10.0, 10.0);
        let mut b = particle((115.0, 150.0), (-2.0, 0.0), 15.0, 10.0);

        assert!(a.collide_with(&mut b));
        assert!(approx_eq(a.velocity(), Vec2::new(-2.8, 0.0)));
        assert!(approx_eq(b.velocity(), Vec2::new(1.2, 0.0)));
    }

    #[test]
    fn equal_masses_exchange_normal_components() {
        let mut a = particle((0.0, 0.0), (1.0, 0.5), 3.0, 1.0);
        let mut b = particle((1.0, 0.0), (-1.0, 0.25), 3.0, 1.0);

        a.collide_with(&mut b);
        assert!(approx_eq(a.velocity(), Vec2::new(-1.0, 0.5)));
        assert!(approx_eq(b.velocity(), Vec2::new(1.0, 0.25)));
    }

    #[test]
    fn oblique_collision_conserves_momentum_and_energy() {
        let mut a = particle((50.0, 50.0), (2.0, -2.0), 4.0, 10.0);
        let mut b = particle((55.0, 56.0), (-3.0, 3.0), 9.0, 10.0);

        let momentum = a.momentum() + b.momentum();
        let energy = a.kinetic_energy() + b.kinetic_energy();

        assert!(a.collide_with(&mut b));
        assert!(approx_eq(a.momentum() + b.momentum(), momentum));
        assert!((a.kinetic_energy() + b.kinetic_energy() - energy).abs() < 1e-3);
    }

    #[test]
    fn coincident_centres_are_skipped() {
        let mut a = particle((5.0, 5.0), (1.0, 0.0), 1.0, 1.0);
        let mut b = particle((5.0, 5.0), (-1.0, 0.0), 1.0, 1.0);

        assert_eq!(a.collision_velocity(&b), None);
        assert!(!a.collide_with(&mut b));
        assert_eq!(a.velocity(), Vec2::new(1.0, 0.0));
        assert_eq!(b.velocity(), Vec2::new(-1.0, 0.0));
    }
}
