//! Shared utility functions.

/// Truncate a string to approximately `max_bytes` without splitting a UTF-8
/// character boundary.
///
/// Returns a sub-slice of the original string. If the string is shorter than
/// `max_bytes`, the entire string is returned unchanged.
pub fn truncate_str(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_ascii() {
        assert_eq!(truncate_str("Can I ride bike?", 6), "Can I ");
    }

    #[test]
    fn truncate_no_op_when_short() {
        assert_eq!(truncate_str("RTI", 10), "RTI");
    }

    #[test]
    fn truncate_tamil_boundary() {
        // Each Tamil code point here is 3 bytes
        let s = "தமிழ்"; // த ம ி ழ ் = 15 bytes
        assert_eq!(truncate_str(s, 4), "த");
        assert_eq!(truncate_str(s, 6), "தம");
        assert_eq!(truncate_str(s, 15), s);
    }

    #[test]
    fn truncate_empty() {
        assert_eq!(truncate_str("", 10), "");
    }
}
