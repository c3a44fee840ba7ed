//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common mock setup so tests across the crate and
//! the tests/ directory script the handset the same way.
#![allow(dead_code)]

use crate::config::SessionConfig;
use crate::device::{Modem, Ready};
use crate::sim::EF_TABLE;
use crate::transport::mock::{MockConnector, MockUsbBus};
use crate::utils::CancelToken;
use crate::Result;

/// A `+CRSM:` success line carrying `payload`.
#[doc(hidden)]
pub fn crsm_line(payload: &str) -> String {
    format!("+CRSM: 144,0,\"{}\"", payload)
}

/// Queue a successful READ BINARY reply.
#[doc(hidden)]
pub fn push_crsm_reply(port: &MockConnector, payload: &str) {
    port.push_lines(&[&crsm_line(payload), "OK"]);
}

/// Queue one zero-filled reply per `EF_TABLE` entry, in dump order.
#[doc(hidden)]
pub fn push_network_dump(port: &MockConnector) {
    for ef in EF_TABLE {
        push_crsm_reply(port, &"00".repeat(ef.max_offset()));
    }
}

/// Mock backends for a phone already in modem mode, with the handshake and
/// `+CMEE=2` replies queued.
#[doc(hidden)]
pub fn connected_mocks() -> (MockUsbBus, MockConnector) {
    let bus = MockUsbBus::new(crate::constants::TARGET_CONFIGURATION);
    let port = MockConnector::new(crate::constants::DEFAULT_SERIAL_PORT);
    port.push_lines(&["OK", "OK"]);
    (bus, port)
}

/// Convenience: a `Modem<Ready>` on the given mocks with every wait set to
/// zero delay.
#[doc(hidden)]
pub fn ready_mock_modem(bus: &MockUsbBus, port: &MockConnector) -> Result<Modem<Ready>> {
    Modem::new(
        SessionConfig::default().without_delays(3),
        Box::new(bus.clone()),
        Box::new(port.clone()),
        CancelToken::new(),
    )
    .connect()
}
