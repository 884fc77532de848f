//! Frequency tables for the speed plots.

use crate::error::SimulationError;

/// Bin counts for one speed sample, plus the display width of each bar.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Histogram {
    /// Lower edge of the first bin (the sample minimum).
    pub min: f32,
    /// Width of every bin in speed units. Zero when all samples are equal.
    pub bin_size: f32,
    pub bins: Vec<u32>,
    /// Width of one bar in display units.
    pub bar_width: f32,
}

impl Histogram {
    /// Lower edge of bin `i`.
    pub fn bin_start(&self, i: usize) -> f32 {
        self.min + i as f32 * self.bin_size
    }

    pub fn total(&self) -> u32 {
        self.bins.iter().sum()
    }
}

/// Sorts `samples` into equal-width bins spanning their observed range.
///
/// The bin width is `(max - min) / num_bins`. Samples are walked in ascending
/// order and a new bin is opened each time a value reaches the upper edge of
/// the current one, so gaps in the data show up as empty bins and the
/// maximum lands in a bin of its own when it sits exactly on an edge. Every
/// sample is counted exactly once.
///
/// An empty sample yields no bins. If every sample is equal they all land
/// in bin 0.
pub fn compute_bins(
    samples: &[f32],
    num_bins: usize,
    display_width: f32,
) -> Result<Histogram, SimulationError> {
    if num_bins == 0 {
        return Err(SimulationError::ZeroBins);
    }
    let bar_width = display_width / num_bins as f32;

    let mut sorted = samples.to_vec();
    sorted.sort_by(f32::total_cmp);

    let (Some(&min), Some(&max)) = (sorted.first(), sorted.last()) else {
        return Ok(Histogram {
            bar_width,
            ..Default::default()
        });
    };

    let bin_size = (max - min) / num_bins as f32;
    let mut bins = vec![0u32];
    let mut upper = min + bin_size;

    for value in sorted {
        if bin_size > 0.0 {
            while value >= upper {
                bins.push(0);
                upper = min + bins.len() as f32 * bin_size;
            }
        }
        if let Some(count) = bins.last_mut() {
            *count += 1;
        }
    }

    Ok(Histogram {
        min,
        bin_size,
        bins,
        bar_width,
    })
}
