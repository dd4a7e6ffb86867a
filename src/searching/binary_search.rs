use std::cmp::Ordering;

use crate::util;

/// Iterative search over a non-decreasing slice. Returns the index of
/// some occurrence of `target`, not necessarily the first.
pub fn binary_search<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    let (mut low, mut high) = (0, arr.len());
    while low < high {
        // `low + (high - low) / 2` rather than `(low + high) / 2`,
        // which can overflow on huge slices.
        let mid = low + (high - low) / 2;
        match arr[mid].cmp(target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }
    None
}

/// Same bound-narrowing as [`binary_search`], expressed as recursion over
/// subslices. The empty slice is the not-found base case; hits in the
/// right half are rebased to the caller's frame.
pub fn binary_search_recursive<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    if arr.is_empty() {
        return None;
    }
    let mid = arr.len() / 2;
    match arr[mid].cmp(target) {
        Ordering::Equal => Some(mid),
        Ordering::Greater => binary_search_recursive(&arr[..mid], target),
        Ordering::Less => {
            binary_search_recursive(&arr[mid + 1..], target).map(|i| mid + 1 + i)
        }
    }
}

fn verdict(result: Option<usize>) -> String {
    match result {
        Some(i) => format!("found at index {i}"),
        None => "not found".to_string(),
    }
}

/// Runs both forms over a sorted list, looking for a present and an
/// absent value.
pub fn demonstration() {
    log::info!("{}", util::section_banner("Binary Search"));

    let sorted_list = [1, 4, 8, 23, 46, 400, 2364];
    log::info!("Sorted array: {}", util::comma_separated(&sorted_list));

    for target in [4, 55] {
        log::info!("Looking for {target} iteratively");
        log::info!("Result: {}", verdict(binary_search(&sorted_list, &target)));
    }

    for target in [4, 55] {
        log::info!("Looking for {target} recursively");
        log::info!(
            "Result: {}",
            verdict(binary_search_recursive(&sorted_list, &target))
        );
    }
}
