use anyhow::Result;

use algo_demos::{bit_mask, logging, recursion, searching, sorting};

fn main() -> Result<()> {
    // The session guard flushes the async log writer on drop, after the
    // last demonstration has issued its records.
    let _log_session = logging::init()?;

    searching::binary_search::demonstration();
    sorting::quick_sort::demonstration();
    recursion::demonstration();
    sorting::merge_sort::demonstration();
    bit_mask::demonstration();

    Ok(())
}
