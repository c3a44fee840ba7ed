#[path = "../common/mod.rs"]
mod common;

use galaxy_at::device::ModemBuilder;
use galaxy_at::transport::mock::{MockConnector, MockUsbBus};

#[test]
fn builder_then_connect_gives_ready_modem() {
    let port = MockConnector::new("/dev/ttyACM0");
    port.push_lines(&["OK", "OK"]);

    let modem = ModemBuilder::new()
        .with_config(common::helpers::quick_config())
        .with_bus(Box::new(MockUsbBus::new(2)))
        .with_connector(Box::new(port.clone()))
        .build()
        .unwrap();

    // Only the Ready state exposes commands; connect() is the transition.
    let mut ready = modem.connect().unwrap();
    port.push_line("OK");
    let resp = ready
        .execute(&galaxy_at::AtCommand::raw("+CGMI"))
        .unwrap();
    assert!(resp.is_ok());
}

#[test]
fn disconnect_and_reconnect() {
    let (modem, bus, port) = common::helpers::ready().unwrap();
    let disconnected = modem.disconnect();
    port.push_lines(&["OK", "OK"]);

    let _ready = disconnected.connect().unwrap();
    // node still present, so no USB traffic
    assert_eq!(bus.finds(), 0);
    assert_eq!(port.written().len(), 4);
}
