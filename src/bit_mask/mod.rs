//! Bitwise mutation and query primitives over `(value, mask)` pairs.
//!
//! Every set bit in the mask designates a position of `value` to act
//! on; zero bits leave the position untouched. All four operations are
//! pure and total. The 4-bit width used by the demonstration is a
//! display concern only, never a constraint on the arithmetic.

use crate::util;

/// Bitwise OR: every masked position ends up set.
pub fn set_bits(value: u32, mask: u32) -> u32 {
    value | mask
}

/// AND with the mask's complement: every masked position ends up clear.
pub fn clear_bits(value: u32, mask: u32) -> u32 {
    value & !mask
}

/// Bitwise XOR: every masked position is flipped.
pub fn toggle_bits(value: u32, mask: u32) -> u32 {
    value ^ mask
}

/// Bitwise AND. Nonzero iff at least one masked bit is set in `value`;
/// to test one specific bit, the mask must isolate exactly that bit.
pub fn check_bits(value: u32, mask: u32) -> u32 {
    value & mask
}

/// Two-line decimal / zero-padded binary rendering, for display only.
pub fn decimal_and_binary(value: u32, width: usize) -> String {
    format!(
        "\tDecimal representation: {value}\n\tBinary representation: {value:0width$b}"
    )
}

const BIT_WIDTH: usize = 4;

fn log_operand(label: &str, value: u32, mask: u32) {
    log::info!(
        "{label} bits on the num:\n{}\nwith the mask:\n{}",
        decimal_and_binary(value, BIT_WIDTH),
        decimal_and_binary(mask, BIT_WIDTH)
    );
}

/// Walks one value through set, clear, toggle, and two check calls,
/// logging each step as a decimal/binary pair.
pub fn demonstration() {
    log::info!("{}", util::section_banner("Bit Mask"));

    let mut number = 0b0100;
    log::info!(
        "Starting with an initial number:\n{}",
        decimal_and_binary(number, BIT_WIDTH)
    );

    let mut mask = 0b0110;
    log_operand("Setting", number, mask);
    number = set_bits(number, mask);
    log::info!(
        "Result of setting bits:\n{}",
        decimal_and_binary(number, BIT_WIDTH)
    );

    mask = 0b0100;
    log_operand("Clearing", number, mask);
    number = clear_bits(number, mask);
    log::info!(
        "Result of clearing bits:\n{}",
        decimal_and_binary(number, BIT_WIDTH)
    );

    mask = 0b0110;
    log_operand("Toggling", number, mask);
    number = toggle_bits(number, mask);
    log::info!(
        "Result of toggling bits:\n{}",
        decimal_and_binary(number, BIT_WIDTH)
    );

    for mask in [0b0100, 0b0010] {
        log_operand("Checking", number, mask);
        let check_result = check_bits(number, mask);
        log::info!(
            "Result of checking bits:\n{}",
            decimal_and_binary(check_result, BIT_WIDTH)
        );
        if check_result != 0 {
            log::info!("The bit was set");
        } else {
            log::info!("The bit wasn't set");
        }
    }
}
