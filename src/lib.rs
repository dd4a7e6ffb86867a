//! # algo-demos
//!
//! Classic algorithms organized by category, each paired with a
//! demonstration routine that narrates its behavior through the log stream.
//!
//! ## Modules
//!
//! - `searching` – Binary search (iterative and recursive)
//! - `sorting` – Merge sort (stable) and quick sort (randomized pivot, in place)
//! - `recursion` – Digit sum and string reversal exercises
//! - `bit_mask` – Set / clear / toggle / check primitives over an integer operand
//! - `util` – Section banner and list formatting for demo output
//! - `logging` – Async log sink lifecycle
//!
//! ---
//!
//! ## Usage Example
//!
//! ```rust
//! use algo_demos::sorting::merge_sort::merge_sort;
//!
//! let mut data = vec![3, 1, 2];
//! merge_sort(&mut data);
//! assert_eq!(data, vec![1, 2, 3]);
//! ```

pub mod bit_mask;
pub mod logging;
pub mod recursion;
pub mod searching;
pub mod sorting;
pub mod util;
