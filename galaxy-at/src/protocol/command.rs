// galaxy-at-rs/galaxy-at/src/protocol/command.rs

use std::time::Duration;

use derive_more::Display;

use crate::constants::{
    AT_PREFIX, CRLF, CRSM_READ_BINARY, DEVCONINFO, PHONEBOOK_MAX_ENTRIES, PHONEBOOK_READ, PING,
    VERBOSE_ERROR,
};
use crate::types::FileId;
use crate::utils::timeout::{
    DEVCONINFO_TIMEOUT_MS, PHONEBOOK_TIMEOUT_MS, PING_TIMEOUT_MS, SHORT_TIMEOUT_MS,
};
use crate::utils::{default_read_timeout, ms, worst_case};

/// Lines read for a command unless it says otherwise
pub const DEFAULT_MAX_LINES: usize = 5;

/// An AT request: payload without the `AT` prefix plus the read budget for
/// its reply.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display(fmt = "AT{}", payload)]
pub struct AtCommand {
    payload: String,
    max_lines: usize,
    timeout: Duration,
}

impl AtCommand {
    pub fn new(payload: impl Into<String>, max_lines: usize, timeout: Duration) -> Self {
        Self {
            payload: payload.into(),
            max_lines,
            timeout,
        }
    }

    /// Arbitrary payload with the default budget (5 lines, 500 ms each).
    pub fn raw(payload: impl Into<String>) -> Self {
        Self::new(payload, DEFAULT_MAX_LINES, default_read_timeout())
    }

    /// Bare `AT`
    pub fn ping() -> Self {
        Self::new(PING, DEFAULT_MAX_LINES, ms(PING_TIMEOUT_MS))
    }

    /// `AT+CMEE=2`
    pub fn verbose_errors() -> Self {
        Self::new(VERBOSE_ERROR, DEFAULT_MAX_LINES, ms(SHORT_TIMEOUT_MS))
    }

    /// `AT+CRSM=176,<file>,0,0,0`. The file id goes on the wire in decimal.
    pub fn crsm_read(file: FileId) -> Self {
        Self::new(
            format!("+CRSM={},{},0,0,0", CRSM_READ_BINARY, file.as_u16()),
            DEFAULT_MAX_LINES,
            ms(SHORT_TIMEOUT_MS),
        )
    }

    /// `AT+CPBR=1,250`. Blank lines and the echo count against the budget,
    /// so a full phonebook needs room for a separator per entry plus the
    /// echo and the final `OK`.
    pub fn phonebook_read() -> Self {
        Self::new(
            PHONEBOOK_READ,
            PHONEBOOK_MAX_ENTRIES * 2 + 4,
            ms(PHONEBOOK_TIMEOUT_MS),
        )
    }

    /// `AT+DEVCONINFO`
    pub fn devconinfo() -> Self {
        Self::new(DEVCONINFO, DEFAULT_MAX_LINES, ms(DEVCONINFO_TIMEOUT_MS))
    }

    pub fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = max_lines;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }

    pub fn max_lines(&self) -> usize {
        self.max_lines
    }

    /// Per-line read timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Longest the command can block: `max_lines * timeout`
    pub fn worst_case(&self) -> Duration {
        worst_case(self.max_lines, self.timeout)
    }

    /// Wire form: `AT<payload>\r\n`
    pub fn line(&self) -> String {
        format!("{}{}{}", AT_PREFIX, self.payload, CRLF)
    }
}
