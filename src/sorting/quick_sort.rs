use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::util;

/// Chooses a pivot index within `low..=high`.
///
/// The sort takes the source by `&mut` so one instance serves the whole
/// call chain, and tests can drive the partition with a deterministic
/// choice instead of a random one.
pub trait PivotSource {
    fn pick(&mut self, low: usize, high: usize) -> usize;
}

/// Uniformly random pivot choice backed by a `rand` generator.
pub struct RandomPivot<R: Rng> {
    rng: R,
}

impl RandomPivot<StdRng> {
    /// Seeds once from OS entropy. Sharing the seeded generator across
    /// every partition call is what keeps adversarial inputs from
    /// forcing the quadratic worst case.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl<R: Rng> RandomPivot<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> PivotSource for RandomPivot<R> {
    fn pick(&mut self, low: usize, high: usize) -> usize {
        self.rng.gen_range(low..=high)
    }
}

/// In-place sort with randomized pivot selection. Expected O(n log n);
/// not stable.
pub fn quick_sort<T: Ord, P: PivotSource>(arr: &mut [T], pivots: &mut P) {
    if arr.len() <= 1 {
        return;
    }
    let pivot = partition(arr, pivots);
    let (left, right) = arr.split_at_mut(pivot);
    quick_sort(left, pivots);
    // right[0] is the pivot, already in its final position.
    quick_sort(&mut right[1..], pivots);
}

// Lomuto partition: the chosen pivot is parked at the end, everything
// less than or equal to it grows a left region, then the pivot is
// swapped into the boundary. Returns the pivot's final index.
fn partition<T: Ord, P: PivotSource>(arr: &mut [T], pivots: &mut P) -> usize {
    let last = arr.len() - 1;
    let chosen = pivots.pick(0, last);
    arr.swap(chosen, last);

    let mut i = 0;
    for j in 0..last {
        if arr[j] <= arr[last] {
            arr.swap(i, j);
            i += 1;
        }
    }
    arr.swap(i, last);
    i
}

pub fn demonstration() {
    log::info!("Starting quick sort demonstration");

    let mut arr = [
        23, 87, 12, 45, 39, 94, 68, 33, 7, 56, 78, 29, 11, 50, 67, 22, 99, 83,
        16, 44, 62, 30, 21, 73, 88, 14, 95, 41, 10, 38, 57, 80, 61, 3, 71, 26,
        90, 15, 47, 19, 5, 34, 81, 8, 96, 53, 25, 66, 48, 6,
    ];

    log::info!("Before sorting:");
    log::info!("{}", util::comma_separated(&arr));

    let mut pivots = RandomPivot::from_entropy();
    quick_sort(&mut arr, &mut pivots);

    log::info!("After sorting:");
    log::info!("{}", util::comma_separated(&arr));
}
