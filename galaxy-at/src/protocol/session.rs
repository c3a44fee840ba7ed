// galaxy-at-rs/galaxy-at/src/protocol/session.rs

use crate::config::HandshakePolicy;
use crate::protocol::command::AtCommand;
use crate::protocol::response::{AtResponse, ResponseStatus, classify_line};
use crate::transport::PortConnector;
use crate::utils::WaitContext;
use crate::{Error, Result};

/// AT command session over a connector that opens the serial node once per
/// command. The connection lives only inside `send`; it is dropped on
/// every exit path, so a vanished node never leaves a handle behind.
pub struct AtSession {
    connector: Box<dyn PortConnector>,
    trace_io: bool,
}

impl AtSession {
    pub fn new(connector: Box<dyn PortConnector>) -> Self {
        Self {
            connector,
            trace_io: false,
        }
    }

    /// Log traffic at `info` instead of `debug`.
    pub fn with_trace_io(mut self, trace_io: bool) -> Self {
        self.trace_io = trace_io;
        self
    }

    pub fn connector(&self) -> &dyn PortConnector {
        &*self.connector
    }

    /// Send `cmd` and collect its reply.
    ///
    /// Reads at most `cmd.max_lines()` lines, each bounded by
    /// `cmd.timeout()`, and stops at the first line that itself carries
    /// `OK` or `ERROR`; earlier lines are not re-scanned. A failed read
    /// counts against the line budget but contributes nothing. Opening or
    /// writing the port are the only hard errors.
    pub fn send(&mut self, cmd: &AtCommand) -> Result<AtResponse> {
        self.log_io(format_args!("-> {}", cmd));

        let mut link = self.connector.open(cmd.timeout())?;
        link.write_line(&cmd.line())?;

        let mut lines = Vec::new();
        let mut status = ResponseStatus::Timeout;
        let mut undecodable = false;
        for _ in 0..cmd.max_lines() {
            match link.read_line(cmd.timeout()) {
                Ok(raw) => {
                    let line = raw.trim();
                    if line.is_empty() {
                        continue;
                    }
                    let terminal = classify_line(line);
                    lines.push(line.to_string());
                    if let Some(s) = terminal {
                        status = s;
                        break;
                    }
                }
                Err(Error::MalformedResponse(msg)) => {
                    log::debug!("{}: {}", cmd, msg);
                    undecodable = true;
                }
                Err(e) => log::trace!("{}: read failed: {}", cmd, e),
            }
        }
        drop(link);

        if status == ResponseStatus::Timeout && undecodable {
            status = ResponseStatus::Malformed;
        }
        let response = AtResponse::new(lines, status);
        self.log_io(format_args!("<- {:?} {:?}", status, response.text()));
        Ok(response)
    }

    /// `send` followed by `AtResponse::into_result`.
    pub fn execute(&mut self, cmd: &AtCommand) -> Result<AtResponse> {
        self.send(cmd)?.into_result(cmd)
    }

    /// Ping with bare `AT` until a reply carries `OK`.
    ///
    /// A ping fails when the port cannot be opened or written, or when
    /// nothing at all comes back. Any reply resets the failure streak; a
    /// locked phone answers, just not with `OK`. Reaching
    /// `max_consecutive_failures` means the USB link itself dropped, and the
    /// caller should redo the mode switch.
    pub fn handshake(&mut self, policy: &HandshakePolicy, ctx: &mut WaitContext) -> Result<()> {
        let ping = AtCommand::ping();
        let mut failures = 0usize;

        for attempt in 1..=policy.max_attempts.max(1) {
            ctx.cancel.check()?;
            ctx.progress
                .tick("Pinging AT, wait 30s and unlock phone to proceed");

            match self.send(&ping) {
                Ok(resp) if resp.is_ok() => {
                    ctx.progress.finish("AT returned OK");
                    log::info!("AT handshake succeeded after {} pings", attempt);
                    return Ok(());
                }
                Ok(resp) if resp.is_silent() => {
                    failures += 1;
                    log::debug!("ping {} unanswered ({} in a row)", attempt, failures);
                }
                Ok(resp) => {
                    failures = 0;
                    log::debug!("ping {} answered without OK: {:?}", attempt, resp.text());
                }
                Err(e) if e.is_transient() => {
                    failures += 1;
                    log::debug!("ping {} failed ({} in a row): {}", attempt, failures, e);
                }
                Err(e) => return Err(e),
            }

            if failures >= policy.max_consecutive_failures {
                log::warn!("connection to serial device lost, USB reset required");
                return Err(Error::HandshakeFailed {
                    attempts: attempt,
                    failures,
                });
            }

            ctx.cancel.check()?;
            if !policy.delay.is_zero() {
                std::thread::sleep(policy.delay);
            }
        }

        Err(Error::HandshakeFailed {
            attempts: policy.max_attempts.max(1),
            failures,
        })
    }

    fn log_io(&self, msg: std::fmt::Arguments<'_>) {
        if self.trace_io {
            log::info!("{}", msg);
        } else {
            log::debug!("{}", msg);
        }
    }
}
