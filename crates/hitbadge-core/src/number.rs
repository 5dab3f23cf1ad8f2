//! Integer parsing and human-readable formatting for counts.

/// Parse a base-10 unsigned integer, rejecting signs, blanks and trailing junk.
/// Surrounding whitespace is ignored.
pub fn parse_count(raw: &str) -> Option<u64> {
    let raw = raw.trim();
    if raw.starts_with('+') {
        return None;
    }
    raw.parse::<u64>().ok()
}

/// Parse a base-10 signed integer delta.
pub fn parse_delta(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

/// Apply a signed delta to a count without wrapping.
pub fn apply_delta(count: u64, delta: i64) -> i128 {
    count as i128 + delta as i128
}

/// Format an integer with `,` thousands separators (`1234567` -> `1,234,567`).
pub fn group_thousands(value: i128) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    let lead = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - lead) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
