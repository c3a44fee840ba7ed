// galaxy-at-rs/galaxy-at/src/protocol/response.rs

use crate::constants::{TOKEN_ERROR, TOKEN_OK};
use crate::protocol::command::AtCommand;
use crate::{Error, Result};

/// How a command's reply ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResponseStatus {
    /// A line carried `OK`
    Ok,
    /// A line carried `ERROR` (`ERROR`, `+CME ERROR: ...`)
    Error,
    /// Line budget exhausted without a terminal token
    Timeout,
    /// No terminal token, and at least one line could not be decoded
    Malformed,
}

/// Terminal status carried by one line, if any.
///
/// A line terminates the reply when `OK` or `ERROR` appears in it as a
/// word: `OK`, `#OK#`, `+CME ERROR: SIM busy`. Text that merely contains
/// the letters (`BOOKMARK`, `TERRORS`) does not.
pub fn classify_line(line: &str) -> Option<ResponseStatus> {
    let mut status = None;
    for word in line.split(|c: char| !c.is_ascii_alphanumeric()) {
        if word == TOKEN_ERROR {
            return Some(ResponseStatus::Error);
        }
        if word == TOKEN_OK {
            status = Some(ResponseStatus::Ok);
        }
    }
    status
}

/// Ordered reply lines (trimmed, blank lines dropped) plus the status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtResponse {
    lines: Vec<String>,
    status: ResponseStatus,
}

impl AtResponse {
    pub fn new(lines: Vec<String>, status: ResponseStatus) -> Self {
        Self { lines, status }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn status(&self) -> ResponseStatus {
        self.status
    }

    pub fn is_ok(&self) -> bool {
        self.status == ResponseStatus::Ok
    }

    /// Nothing at all came back.
    pub fn is_silent(&self) -> bool {
        self.lines.is_empty()
    }

    /// The reply as one trimmed string, lines joined with `\n`.
    pub fn text(&self) -> String {
        self.lines.join("\n").trim().to_string()
    }

    /// Lines starting with `prefix` (e.g. `+CPBR:`), in order. A command
    /// echo (`AT+CPBR=...`) never matches.
    pub fn lines_with_prefix<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a str> {
        self.lines
            .iter()
            .map(|l| l.as_str())
            .filter(move |l| l.starts_with(prefix))
    }

    #[cfg(feature = "diagnostics")]
    fn describe(&self, cmd: &AtCommand) -> String {
        if self.lines.is_empty() {
            cmd.payload().to_string()
        } else {
            format!("{} (got {:?})", cmd.payload(), self.lines)
        }
    }

    #[cfg(not(feature = "diagnostics"))]
    fn describe(&self, cmd: &AtCommand) -> String {
        cmd.payload().to_string()
    }

    /// Turn a non-OK reply into the matching error.
    pub fn into_result(self, cmd: &AtCommand) -> Result<Self> {
        match self.status {
            ResponseStatus::Ok => Ok(self),
            ResponseStatus::Error => {
                let reason = self
                    .lines
                    .iter()
                    .rev()
                    .find(|l| classify_line(l) == Some(ResponseStatus::Error))
                    .cloned()
                    .unwrap_or_else(|| TOKEN_ERROR.to_string());
                Err(Error::CommandRejected {
                    command: cmd.payload().to_string(),
                    reason,
                })
            }
            ResponseStatus::Timeout => Err(Error::CommandTimeout {
                command: self.describe(cmd),
            }),
            ResponseStatus::Malformed => Err(Error::malformed(format!(
                "undecodable reply to {}: {}",
                cmd,
                self.text()
            ))),
        }
    }
}
