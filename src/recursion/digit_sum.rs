/// Sum of the decimal digits of `n`. The modulo strips the 1s digit,
/// the division reduces `n` by a factor of 10 until a single digit is
/// left (the base case).
pub fn add_digits(n: u64) -> u64 {
    if n < 10 {
        return n;
    }
    n % 10 + add_digits(n / 10)
}
