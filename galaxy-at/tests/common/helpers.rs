// helpers.rs — mock wiring shared by the integration tests

use galaxy_at::device::{Modem, Ready};
use galaxy_at::transport::mock::{MockConnector, MockUsbBus};
use galaxy_at::{CancelToken, Result, SessionConfig};

pub use galaxy_at::test_support::{connected_mocks, push_crsm_reply, push_network_dump};

pub fn quick_config() -> SessionConfig {
    SessionConfig::default().without_delays(3)
}

pub fn disconnected(bus: &MockUsbBus, port: &MockConnector) -> Modem {
    Modem::new(
        quick_config(),
        Box::new(bus.clone()),
        Box::new(port.clone()),
        CancelToken::new(),
    )
}

/// A ready modem plus handles on its mock backends.
pub fn ready() -> Result<(Modem<Ready>, MockUsbBus, MockConnector)> {
    let (bus, port) = connected_mocks();
    let modem = galaxy_at::test_support::ready_mock_modem(&bus, &port)?;
    Ok((modem, bus, port))
}
