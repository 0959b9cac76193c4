//! Sweep & Prune broad phase.
//!
//! Keeps one list of object indices per axis, sorted by box minimum.
//! Objects move only a little between steps, so each list stays nearly
//! sorted and an adjacent-swap (bubble) sort with early exit restores
//! order in close to linear time. A forward scan over each sorted list
//! marks the pairs whose intervals overlap on that axis; a pair is a
//! candidate iff it is marked on all three axes.

use prism_math::{Aabb, Axis};
use tracing::trace;

use crate::broad::{BroadPhase, CandidatePair};
use crate::overlap::OverlapMatrix;

/// Work done by one axis re-sort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortStats {
    /// Full passes over the list, including the final swap-free pass.
    pub passes: u32,
    /// Adjacent swaps performed.
    pub swaps: u32,
}

/// Incremental three-axis Sweep & Prune.
#[derive(Debug, Clone, Default)]
pub struct SweepAndPrune {
    boxes: Vec<Aabb>,
    lists: [Vec<u32>; 3],
    matrices: [OverlapMatrix; 3],
    last_swaps: u32,
}

impl SweepAndPrune {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets every list to identity order for `n` objects.
    fn reset(&mut self, n: usize) {
        for list in &mut self.lists {
            list.clear();
            list.extend(0..n as u32);
        }
        for matrix in &mut self.matrices {
            matrix.resize(n);
        }
    }

    /// Number of tracked objects.
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Object indices on `axis` in current sorted order.
    pub fn sorted(&self, axis: Axis) -> &[u32] {
        &self.lists[axis.index()]
    }

    /// Per-axis overlap flags from the last scan.
    pub fn matrix(&self, axis: Axis) -> &OverlapMatrix {
        &self.matrices[axis.index()]
    }

    /// Bubble-sorts the list for `axis` by box minimum, stopping after the
    /// first pass with no swap. Equal minima are never swapped.
    pub fn resort(&mut self, axis: Axis) -> SortStats {
        let boxes = &self.boxes;
        let list = &mut self.lists[axis.index()];
        let mut stats = SortStats::default();

        loop {
            stats.passes += 1;
            let mut swapped = 0;
            for k in 1..list.len() {
                let prev = boxes[list[k - 1] as usize].min_on(axis);
                let next = boxes[list[k] as usize].min_on(axis);
                if prev > next {
                    list.swap(k - 1, k);
                    swapped += 1;
                }
            }
            stats.swaps += swapped;
            if swapped == 0 {
                break;
            }
        }
        stats
    }

    /// Marks overlapping pairs on `axis` into that axis' matrix.
    ///
    /// For each object in sorted order, walks forward while the next
    /// object's minimum does not exceed the current maximum. Touching
    /// intervals count as overlapping.
    pub fn scan_axis(&mut self, axis: Axis) {
        let boxes = &self.boxes;
        let list = &self.lists[axis.index()];
        let matrix = &mut self.matrices[axis.index()];

        for (k, &current) in list.iter().enumerate() {
            let max = boxes[current as usize].max_on(axis);
            for &other in list[k + 1..]
                .iter()
                .take_while(|&&other| boxes[other as usize].min_on(axis) <= max)
            {
                matrix.set(current as usize, other as usize);
            }
        }
    }
}

impl BroadPhase for SweepAndPrune {
    fn update(&mut self, boxes: &[Aabb]) {
        if boxes.len() != self.boxes.len() {
            self.reset(boxes.len());
        }
        self.boxes.clear();
        self.boxes.extend_from_slice(boxes);

        let mut swaps = 0;
        for axis in Axis::ALL {
            let stats = self.resort(axis);
            trace!(axis = axis.name(), passes = stats.passes, swaps = stats.swaps, "SAP resort");
            swaps += stats.swaps;
        }
        self.last_swaps = swaps;

        for matrix in &mut self.matrices {
            matrix.clear();
        }
        for axis in Axis::ALL {
            self.scan_axis(axis);
        }
    }

    fn query_pairs(&self, out: &mut Vec<CandidatePair>) {
        let [mx, my, mz] = &self.matrices;
        let n = self.boxes.len();
        for i in 0..n {
            for j in 0..i {
                if mx.get(i, j) && my.get(i, j) && mz.get(i, j) {
                    out.push(CandidatePair::new(i as u32, j as u32));
                }
            }
        }
    }

    fn sort_swaps(&self) -> u32 {
        self.last_swaps
    }

    fn name(&self) -> &str {
        "sweep_and_prune"
    }
}
