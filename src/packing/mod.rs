//! First-fit bin packing.
//!
//! Places each item into the first bin with room for it, scanning bins in
//! creation order, and opens a new bin when none fits. O(n · k) for n
//! items over k bins. A snapshot of all bins is recorded after every item
//! so the packing can be replayed step by step.

use serde::Serialize;
use thiserror::Error;

/// Rejected bin-packing input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PackingError {
    /// Bin capacity must be positive.
    #[error("bin capacity must be positive")]
    ZeroCapacity,
    /// An item exceeds the bin capacity and can never be placed.
    #[error("item {index} has size {size} exceeding the bin capacity")]
    ItemTooLarge {
        /// Index of the item in the input.
        index: usize,
        /// The oversized item.
        size: u32,
    },
}

/// Usage statistics for a finished packing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PackingStats {
    /// Number of items packed.
    pub total_items: usize,
    /// Bin capacity.
    pub bin_capacity: u32,
    /// Bins opened.
    pub total_bins: usize,
    /// Sum of all item sizes.
    pub used_space: u32,
    /// Capacity opened but left unfilled.
    pub wasted_space: u32,
    /// Mean fill per bin.
    pub average_fill: f64,
    /// `100 * used / (bins * capacity)`; 100 for an empty packing.
    pub efficiency_percent: f64,
}

/// The result of a first-fit run: final bins plus a snapshot per item.
///
/// # Examples
///
/// ```
/// use greedy_spanner::packing::first_fit;
///
/// let run = first_fit(&[6, 5, 4, 3, 2, 5, 4, 6], 10).unwrap();
/// assert_eq!(run.num_bins(), 4);
/// assert_eq!(run.snapshots().len(), 8);
/// assert_eq!(run.stats().wasted_space, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PackingRun {
    capacity: u32,
    bins: Vec<Vec<u32>>,
    snapshots: Vec<Vec<Vec<u32>>>,
}

impl PackingRun {
    /// Bin capacity the run was packed with.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Final bins, each a list of item sizes in placement order.
    pub fn bins(&self) -> &[Vec<u32>] {
        &self.bins
    }

    /// Number of bins opened.
    pub fn num_bins(&self) -> usize {
        self.bins.len()
    }

    /// Bin states after each item, in input order.
    pub fn snapshots(&self) -> &[Vec<Vec<u32>>] {
        &self.snapshots
    }

    /// Computes usage statistics over the final bins.
    pub fn stats(&self) -> PackingStats {
        let total_bins = self.bins.len();
        let used_space: u32 = self.bins.iter().flatten().sum();
        let total_capacity = self.capacity * total_bins as u32;
        let (average_fill, efficiency_percent) = if total_bins == 0 {
            (0.0, 100.0)
        } else {
            (
                f64::from(used_space) / total_bins as f64,
                100.0 * f64::from(used_space) / f64::from(total_capacity),
            )
        };
        PackingStats {
            total_items: self.snapshots.len(),
            bin_capacity: self.capacity,
            total_bins,
            used_space,
            wasted_space: total_capacity - used_space,
            average_fill,
            efficiency_percent,
        }
    }
}

/// Packs items into capacity-bounded bins with the first-fit rule.
///
/// Items are processed in input order; each goes into the first bin whose
/// remaining capacity fits it, or a fresh bin if none does. Rejects a zero
/// capacity and any item larger than the capacity up front.
pub fn first_fit(items: &[u32], capacity: u32) -> Result<PackingRun, PackingError> {
    if capacity == 0 {
        return Err(PackingError::ZeroCapacity);
    }
    if let Some((index, &size)) = items.iter().enumerate().find(|&(_, &s)| s > capacity) {
        return Err(PackingError::ItemTooLarge { index, size });
    }

    let mut bins: Vec<Vec<u32>> = Vec::new();
    let mut loads: Vec<u32> = Vec::new();
    let mut snapshots = Vec::with_capacity(items.len());

    for &item in items {
        match loads.iter().position(|&load| load + item <= capacity) {
            Some(i) => {
                bins[i].push(item);
                loads[i] += item;
            }
            None => {
                bins.push(vec![item]);
                loads.push(item);
            }
        }
        snapshots.push(bins.clone());
    }

    Ok(PackingRun {
        capacity,
        bins,
        snapshots,
    })
}
