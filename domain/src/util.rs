//! Log-friendly previews of subjects and raw model output

/// Single-line excerpt of `text`, at most `max_chars` characters plus `...`
///
/// Whitespace runs (newlines included) collapse to one space, so a
/// pretty-printed JSON reply fits on one log line.
pub fn preview(text: &str, max_chars: usize) -> String {
    let mut out = String::new();
    let mut taken = 0;
    for word in text.split_whitespace() {
        if taken > 0 {
            if taken == max_chars {
                out.push_str("...");
                return out;
            }
            out.push(' ');
            taken += 1;
        }
        for ch in word.chars() {
            if taken == max_chars {
                out.push_str("...");
                return out;
            }
            out.push(ch);
            taken += 1;
        }
    }
    out
}
