//! Internal text-scanning primitives for field extraction.
//!
//! This module is `pub(crate)` so the normalizer and future sibling modules
//! share the same low-level routines without exposing them as public API.

/// Extracts the digit string from `text` and parses it as a base-10 integer.
///
/// All non-digit characters are discarded: `"Rp1.250.000"` yields
/// `Some(1_250_000)`, `"100+ terjual"` yields `Some(100)`. Returns `None`
/// when `text` contains no ASCII digits, or when the digit run overflows
/// `u64` (21+ digits is garbage input, not a price).
///
/// This is the single place sold-count and price digit semantics live.
/// Locale magnitude suffixes are NOT interpreted: `"1rb+"` (meaning ~1000)
/// parses as `1`. TODO: expand "rb"/"jt" suffixes here once the report
/// consumers agree on the corrected volume scale.
pub(crate) fn digits(text: &str) -> Option<u64> {
    let digit_string: String = text.chars().filter(char::is_ascii_digit).collect();
    if digit_string.is_empty() {
        return None;
    }
    digit_string.parse::<u64>().ok()
}

/// Scans `text` for the first integer-or-decimal number and parses it.
///
/// Handles ratings embedded among other text: `"4.9 | Jakarta Barat"`
/// yields `Some(4.9)`. A bare trailing dot is not consumed (`"4."` parses
/// as `4.0` because the number ends at the digit run).
pub(crate) fn first_decimal(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    let len = bytes.len();
    let mut i = 0usize;

    while i < len {
        if bytes[i].is_ascii_digit()
            || (bytes[i] == b'.' && i + 1 < len && bytes[i + 1].is_ascii_digit())
        {
            let num_start = i;
            let mut has_dot = false;
            while i < len && (bytes[i].is_ascii_digit() || (bytes[i] == b'.' && !has_dot)) {
                if bytes[i] == b'.' {
                    has_dot = true;
                }
                i += 1;
            }
            // A dot with no digits after it belongs to the surrounding text,
            // not the number ("4. | sold" -> 4).
            let mut num_end = i;
            if has_dot && bytes[num_end - 1] == b'.' {
                num_end -= 1;
            }
            if let Ok(v) = text[num_start..num_end].parse::<f64>() {
                return Some(v);
            }
        } else {
            i += 1;
        }
    }
    None
}
