//! Hexadecimal helpers for EF payloads.
//!
//! `+CRSM` returns file contents as an upper-case hex string. The decoder
//! works on that text directly (two characters per byte), so most helpers
//! here operate on `&str` rather than on bytes.

use crate::{Error, Result};

/// Convert a byte slice to an upper-case hex string without separators, the
/// form the modem uses.
///
/// Example: `&[0xde, 0xad]` -> `"DEAD"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        use std::fmt::Write;
        // write! never fails writing to a String
        let _ = write!(&mut s, "{:02X}", b);
    }
    s
}

/// Parse a hex string into bytes.
///
/// Accepts strings with or without ASCII whitespace.
pub fn parse_hex(s: &str) -> Result<Vec<u8>> {
    let cleaned: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    ensure_hex(&cleaned)?;

    cleaned
        .as_bytes()
        .chunks(2)
        .map(|pair| {
            // ensure_hex guarantees ASCII hex digits in pairs
            let text = std::str::from_utf8(pair).map_err(|e| Error::malformed(e.to_string()))?;
            u8::from_str_radix(text, 16)
                .map_err(|e| Error::malformed(format!("invalid hex pair '{}': {}", text, e)))
        })
        .collect()
}

/// Check that `s` is a whole number of hex-encoded bytes.
pub fn ensure_hex(s: &str) -> Result<()> {
    if s.len() % 2 != 0 {
        return Err(Error::malformed(format!(
            "hex payload has odd length {}",
            s.len()
        )));
    }
    if let Some(c) = s.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(Error::malformed(format!(
            "non-hex character '{}' in payload",
            c
        )));
    }
    Ok(())
}

/// Split a hex string into its two-character octets.
///
/// Example: `"0829F5"` -> `["08", "29", "F5"]`
pub fn octets(hex: &str) -> Vec<&str> {
    hex.as_bytes()
        .chunks(2)
        .filter_map(|pair| std::str::from_utf8(pair).ok())
        .collect()
}

/// Swap the two nibbles of every octet: the semi-octet reading order used by
/// telephony BCD fields.
///
/// Example: `"9821F3"` -> `"89123F"`
pub fn swap_nibbles(hex: &str) -> String {
    let mut out = String::with_capacity(hex.len());
    for pair in hex.as_bytes().chunks(2) {
        match pair {
            [hi, lo] => {
                out.push(*lo as char);
                out.push(*hi as char);
            }
            [single] => out.push(*single as char),
            _ => {}
        }
    }
    out
}

/// Drop BCD filler nibbles (`F`) from the end of a digit string.
pub fn trim_filler(digits: &str) -> &str {
    digits.trim_end_matches(['F', 'f'])
}
