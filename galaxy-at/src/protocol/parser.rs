// galaxy-at-rs/galaxy-at/src/protocol/parser.rs

use crate::{Error, Result};

/// Drop the `+CMD:` prefix from a reply line and return the rest. Colons
/// inside the data are kept.
///
/// `+DEVCONINFO: MN(SM-G950F);TIME(12:00)` -> `MN(SM-G950F);TIME(12:00)`
pub fn strip_echo(line: &str) -> Result<&str> {
    match line.split_once(':') {
        Some((_, rest)) => Ok(rest.trim()),
        None => Err(Error::malformed(format!("no ':' in reply line '{}'", line))),
    }
}

/// The text between the first pair of double quotes, if there is one.
pub fn quoted_payload(text: &str) -> Option<&str> {
    let start = text.find('"')? + 1;
    let len = text[start..].find('"')?;
    Some(&text[start..start + len])
}

/// Remove every double quote.
pub fn unquote(text: &str) -> String {
    text.replace('"', "")
}

/// Parse a decimal field (`144`, ` 0`) from a comma list.
pub fn decimal_field<T: std::str::FromStr>(field: &str, what: &str) -> Result<T> {
    field
        .trim()
        .parse()
        .map_err(|_| Error::malformed(format!("invalid {} '{}'", what, field.trim())))
}

/// Ensure a hex payload holds at least `bytes` bytes.
pub fn ensure_hex_len(payload: &str, bytes: usize) -> Result<()> {
    let have = payload.len() / 2;
    if have < bytes {
        return Err(Error::malformed(format!(
            "payload holds {} bytes, {} required",
            have, bytes
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_echo_keeps_inner_colons() {
        assert_eq!(
            strip_echo("+DEVCONINFO: MN(SM-G950F);TIME(12:00)").unwrap(),
            "MN(SM-G950F);TIME(12:00)"
        );
    }

    #[test]
    fn strip_echo_without_colon() {
        match strip_echo("RING") {
            Err(Error::MalformedResponse(_)) => {}
            other => panic!("expected MalformedResponse, got: {:?}", other),
        }
    }

    #[test]
    fn quoted_payload_cases() {
        assert_eq!(quoted_payload("144,0,\"0829\""), Some("0829"));
        assert_eq!(quoted_payload("144,0,\"\""), Some(""));
        assert_eq!(quoted_payload("106,130"), None);
        assert_eq!(quoted_payload("144,0,\"0829"), None);
    }

    #[test]
    fn decimal_field_parses_and_rejects() {
        let v: u8 = decimal_field(" 144", "sw1").unwrap();
        assert_eq!(v, 144);
        assert!(decimal_field::<u8>("x", "sw1").is_err());
        assert!(decimal_field::<u8>("300", "sw1").is_err());
    }

    #[test]
    fn ensure_hex_len_short() {
        assert!(ensure_hex_len("0829", 2).is_ok());
        match ensure_hex_len("0829", 3) {
            Err(Error::MalformedResponse(m)) => assert!(m.contains("3 required")),
            other => panic!("expected MalformedResponse, got: {:?}", other),
        }
    }
}
