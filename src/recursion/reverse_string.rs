/// Reverses a string by moving its last character to the front of the
/// reversed remainder. Base case: length <= 1 returns the string
/// unchanged. Splits on char boundaries, so any UTF-8 input is fine.
pub fn reverse_string(s: &str) -> String {
    if s.len() <= 1 {
        return s.to_string();
    }
    let (rest, last) = split_last_char(s);
    let mut reversed = String::with_capacity(s.len());
    reversed.push_str(last);
    reversed.push_str(&reverse_string(rest));
    reversed
}

fn split_last_char(s: &str) -> (&str, &str) {
    let idx = s.char_indices().next_back().map(|(i, _)| i).unwrap_or(0);
    s.split_at(idx)
}
