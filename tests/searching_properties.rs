//! Property tests for binary search: a hit indexes an equal element, a
//! miss means the target is absent, and the iterative and recursive
//! forms agree on presence for every input.

use proptest::prelude::*;

use algo_demos::searching::binary_search::{binary_search, binary_search_recursive};

proptest! {
    #[test]
    fn hit_indexes_an_equal_element(
        mut v in prop::collection::vec(-1000..1000i32, 0..100),
        target in -1000..1000i32,
    ) {
        v.sort();
        for result in [binary_search(&v, &target), binary_search_recursive(&v, &target)] {
            match result {
                Some(i) => prop_assert_eq!(v[i], target),
                None => prop_assert!(!v.contains(&target)),
            }
        }
    }

    #[test]
    fn both_forms_agree_on_presence(
        mut v in prop::collection::vec(-1000..1000i32, 0..100),
        target in -1000..1000i32,
    ) {
        v.sort();
        let iterative = binary_search(&v, &target);
        let recursive = binary_search_recursive(&v, &target);
        // Duplicates allow different matching indices, but found /
        // not-found must always coincide.
        prop_assert_eq!(iterative.is_some(), recursive.is_some());
    }

    #[test]
    fn every_present_element_is_found(
        mut v in prop::collection::vec(-1000..1000i32, 1..100),
        pick in any::<prop::sample::Index>(),
    ) {
        v.sort();
        let target = v[pick.index(v.len())];
        prop_assert!(binary_search(&v, &target).is_some());
        prop_assert!(binary_search_recursive(&v, &target).is_some());
    }
}
