//! Error types for the gas simulation.
//!
//! Everything here is raised eagerly while a container is being built. Once a
//! simulation is running, the physics never fails; degenerate cases are
//! skipped inside the frame update instead.

use std::fmt;

/// Errors that can occur while constructing particles, bounds or a container.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// A particle was given a radius that is not a positive, finite number.
    InvalidRadius(f32),
    /// A particle was given a mass that is not a positive, finite number.
    InvalidMass(f32),
    /// Container dimensions must be positive and finite on both axes.
    InvalidBounds { width: f32, height: f32 },
    /// The spawn margin leaves no room inside the container.
    MarginTooLarge { margin: f32, width: f32, height: f32 },
    /// Velocity components are sampled from `[-max, max]`, so `max` can't be negative.
    InvalidVelocityRange(f32),
    /// Histograms need at least one bin.
    ZeroBins,
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::InvalidRadius(r) => {
                write!(f, "Particle radius must be positive and finite, got {}", r)
            }
            SimulationError::InvalidMass(m) => {
                write!(f, "Particle mass must be positive and finite, got {}", m)
            }
            SimulationError::InvalidBounds { width, height } => write!(
                f,
                "Container dimensions must be positive, got {} x {}",
                width, height
            ),
            SimulationError::MarginTooLarge { margin, width, height } => write!(
                f,
                "Spawn margin {} leaves no room in a {} x {} container",
                margin, width, height
            ),
            SimulationError::InvalidVelocityRange(max) => write!(
                f,
                "Maximum velocity component must be non-negative and finite, got {}",
                max
            ),
            SimulationError::ZeroBins => write!(f, "Histogram bin count must be at least 1"),
        }
    }
}

impl std::error::Error for SimulationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        let msg = SimulationError::InvalidRadius(-2.0).to_string();
        assert!(msg.contains("-2"));

        let msg = SimulationError::InvalidBounds { width: 0.0, height: 30.0 }.to_string();
        assert!(msg.contains("0 x 30"));
    }
}
