use crate::util;

/// Stable divide-and-conquer sort. O(n log n) time, O(n) auxiliary
/// space for the merge buffers, so not in place.
pub fn merge_sort<T: Ord + Clone>(arr: &mut [T]) {
    if arr.len() <= 1 {
        return;
    }
    let mid = arr.len() / 2;
    {
        let (left, right) = arr.split_at_mut(mid);
        merge_sort(left);
        merge_sort(right);
    }
    merge(arr, mid);
}

// Both halves of `arr` are already sorted; interleave them back by
// repeatedly taking the smaller front element. Ties take the left
// element, which is what keeps the sort stable.
fn merge<T: Ord + Clone>(arr: &mut [T], mid: usize) {
    let left = arr[..mid].to_vec();
    let right = arr[mid..].to_vec();

    let (mut i, mut j, mut k) = (0, 0, 0);
    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            arr[k] = left[i].clone();
            i += 1;
        } else {
            arr[k] = right[j].clone();
            j += 1;
        }
        k += 1;
    }
    while i < left.len() {
        arr[k] = left[i].clone();
        i += 1;
        k += 1;
    }
    while j < right.len() {
        arr[k] = right[j].clone();
        j += 1;
        k += 1;
    }
}

pub fn demonstration() {
    log::info!("Starting Merge Sort demonstration");

    let mut data = vec![
        42, 17, 89, 56, 23, 74, 31, 98, 15, 67, 8, 29, 60, 77, 91, 34, 3, 50,
        12, 85,
    ];
    log::info!(
        "Unsorted vector size: {}. Unsorted vector contents: {}",
        data.len(),
        util::comma_separated(&data)
    );

    log::info!("Sorting the data using Merge Sort");
    merge_sort(&mut data);

    log::info!(
        "Sorted vector size: {}. Sorted vector contents: {}",
        data.len(),
        util::comma_separated(&data)
    );
}
