pub mod digit_sum;
pub mod reverse_string;

use crate::util;

pub fn demonstration() {
    log::info!("{}", util::section_banner("Recursion"));

    let digits = 15827;
    log::info!("Adding the digits: {digits}");
    log::info!("Result: {}", digit_sum::add_digits(digits));

    let s = "Hello Friend";
    log::info!("Reversing: \"{s}\"");
    log::info!("Result: \"{}\"", reverse_string::reverse_string(s));
}
