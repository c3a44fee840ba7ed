// galaxy-at-rs/galaxy-at/src/protocol/crsm.rs

use crate::constants::{CRSM_TOKEN, SW_SUCCESS};
use crate::protocol::command::AtCommand;
use crate::protocol::parser;
use crate::protocol::response::AtResponse;
use crate::protocol::session::AtSession;
use crate::types::FileId;
use crate::utils::{CancelToken, RetryPolicy, ensure_hex};
use crate::{Error, Result};

/// Parsed `+CRSM: <sw1>,<sw2>[,"<data>"]` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrsmResponse {
    pub sw1: u8,
    pub sw2: u8,
    pub payload: Option<String>,
}

impl CrsmResponse {
    /// Status words 0x90 0x00
    pub fn is_success(&self) -> bool {
        (self.sw1, self.sw2) == SW_SUCCESS
    }
}

/// The reply line for our own command. The modem interleaves unsolicited
/// notifications (`+CIEV`, `RING`, ...) with command output, and the echo
/// (`AT+CRSM=...`) carries the token too, so only a line opening with
/// `+CRSM:` counts.
pub fn find_crsm_line(resp: &AtResponse) -> Option<&str> {
    resp.lines()
        .iter()
        .map(|l| l.as_str())
        .find(|l| l.strip_prefix(CRSM_TOKEN).is_some_and(|rest| rest.starts_with(':')))
}

/// Parse a `+CRSM:` reply line.
pub fn parse_crsm_line(line: &str) -> Result<CrsmResponse> {
    let body = parser::strip_echo(line)?;

    let (status_part, payload) = match parser::quoted_payload(body) {
        Some(data) => {
            // quoted_payload found a quote, so the split cannot fail
            let (status, _) = body.split_once('"').unwrap_or((body, ""));
            ensure_hex(data)?;
            (status, Some(data.to_ascii_uppercase()))
        }
        None => (body, None),
    };

    let mut words = status_part.split(',').filter(|w| !w.trim().is_empty());
    let sw1 = match words.next() {
        Some(w) => parser::decimal_field(w, "sw1")?,
        None => return Err(Error::malformed(format!("no status words in '{}'", line))),
    };
    let sw2 = match words.next() {
        Some(w) => parser::decimal_field(w, "sw2")?,
        None => return Err(Error::malformed(format!("no sw2 in '{}'", line))),
    };

    Ok(CrsmResponse { sw1, sw2, payload })
}

/// Send READ BINARY for `file` until our `+CRSM:` line shows up, resending
/// at most `policy.max_attempts()` times.
pub fn read_record(
    session: &mut AtSession,
    file: FileId,
    policy: &RetryPolicy,
    cancel: &CancelToken,
) -> Result<CrsmResponse> {
    let cmd = AtCommand::crsm_read(file);

    for attempt in policy.attempts() {
        cancel.check()?;
        match session.send(&cmd) {
            Ok(resp) => {
                if let Some(line) = find_crsm_line(&resp) {
                    let parsed = parse_crsm_line(line)?;
                    if !parsed.is_success() {
                        log::warn!(
                            "{} read returned status {},{}",
                            file,
                            parsed.sw1,
                            parsed.sw2
                        );
                    }
                    return Ok(parsed);
                }
                log::debug!(
                    "no +CRSM line for {} on attempt {}, got {:?}",
                    file,
                    attempt,
                    resp.text()
                );
            }
            Err(e) if e.is_transient() => {
                log::debug!("{} read attempt {} failed: {}", file, attempt, e);
            }
            Err(e) => return Err(e),
        }
        if attempt < policy.max_attempts() {
            policy.pause(cancel)?;
        }
    }

    Err(Error::malformed(format!(
        "no +CRSM reply for {} after {} attempts",
        file,
        policy.max_attempts()
    )))
}

/// Read `file` and return its contents as upper-case hex.
pub fn read_ef(
    session: &mut AtSession,
    file: FileId,
    policy: &RetryPolicy,
    cancel: &CancelToken,
) -> Result<String> {
    let record = read_record(session, file, policy, cancel)?;
    record.payload.ok_or_else(|| {
        Error::malformed(format!(
            "{} returned status {},{} without data",
            file, record.sw1, record.sw2
        ))
    })
}
