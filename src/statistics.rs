use std::collections::BTreeMap;

use crate::particle::ParticleKind;

/// Speeds observed during the current frame, grouped by particle kind.
///
/// This is not a history: the container clears it at the start of every frame
/// and refills it in particle storage order.
#[derive(Debug, Clone, Default)]
pub struct SpeedStatistics {
    speeds: BTreeMap<ParticleKind, Vec<f32>>,
}

impl SpeedStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empties every per-kind sequence, keeping the allocations.
    pub fn clear(&mut self) {
        for samples in self.speeds.values_mut() {
            samples.clear();
        }
    }

    pub fn record(&mut self, kind: ParticleKind, speed: f32) {
        self.speeds.entry(kind).or_default().push(speed);
    }

    /// Speeds recorded for `kind` this frame. Empty if none were recorded.
    pub fn get(&self, kind: ParticleKind) -> &[f32] {
        self.speeds.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of samples across all kinds.
    pub fn len(&self) -> usize {
        self.speeds.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_keeps_insertion_order_per_kind() {
        let mut stats = SpeedStatistics::new();
        stats.record(ParticleKind::Red, 3.0);
        stats.record(ParticleKind::Blue, 1.0);
        stats.record(ParticleKind::Red, 2.0);

        assert_eq!(stats.get(ParticleKind::Red), &[3.0, 2.0]);
        assert_eq!(stats.get(ParticleKind::Blue), &[1.0]);
        assert!(stats.get(ParticleKind::Green).is_empty());
        assert_eq!(stats.len(), 3);
    }

    #[test]
    fn clear_then_get_is_empty_for_every_kind() {
        let mut stats = SpeedStatistics::new();
        for kind in ParticleKind::ALL {
            stats.record(kind, 4.0);
        }
        stats.clear();

        for kind in ParticleKind::ALL {
            assert!(stats.get(kind).is_empty());
        }
        assert!(stats.is_empty());
    }
}
