//! A 2D ideal gas: disc-shaped particles bouncing elastically inside a box,
//! with per-kind speed statistics for live histograms.

pub mod app;
pub mod bounds;
pub mod config;
pub mod container;
pub mod error;
pub mod histogram;
pub mod particle;
pub mod partner;
pub mod spawn;
pub mod statistics;

pub use bounds::Bounds;
pub use config::{ConfigError, SimulationConfig};
pub use container::GasContainer;
pub use error::SimulationError;
pub use histogram::{Histogram, compute_bins};
pub use particle::{Particle, ParticleKind};
pub use partner::{FirstMatch, Nearest, PartnerSearch, PartnerSelection, nearest_index};
pub use spawn::{SpawnSettings, spawn_particles};
pub use statistics::SpeedStatistics;
