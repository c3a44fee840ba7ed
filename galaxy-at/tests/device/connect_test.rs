#[path = "../common/mod.rs"]
mod common;

use galaxy_at::Error;
use galaxy_at::transport::mock::{MockConnector, MockUsbBus};

#[test]
fn full_cycle_from_mtp_mode() {
    let bus = MockUsbBus::new(1);
    bus.appear_after(2);
    bus.set_switch_after(Some(2));
    let port = MockConnector::new("/dev/ttyACM0");
    port.appear_after(3);
    port.push_lines(&["+CME ERROR: phone locked", "OK", "OK"]);

    let modem = common::helpers::disconnected(&bus, &port);
    let ready = modem.connect();
    assert!(ready.is_ok());
    assert_eq!(bus.configuration(), 2);
    assert_eq!(bus.finds(), 3);
    assert_eq!(bus.set_configuration_calls().len(), 3);
    assert_eq!(port.written()[2], "AT+CMEE=2\r\n");
}

#[test]
fn configuration_never_sticks() {
    let bus = MockUsbBus::new(1);
    bus.set_switch_after(None);
    let port = MockConnector::new("/dev/ttyACM0");
    port.never_appear();

    match common::helpers::disconnected(&bus, &port).connect() {
        Err(Error::ConfigurationSwitchFailed { attempts }) => assert_eq!(attempts, 3),
        Err(e) => panic!("expected ConfigurationSwitchFailed, got {:?}", e),
        Ok(_) => panic!("expected ConfigurationSwitchFailed, got a ready modem"),
    }
    assert_eq!(port.opened(), 0);
}

#[test]
fn link_drop_triggers_new_switch_cycle() {
    let (bus, port) = (MockUsbBus::new(2), MockConnector::new("/dev/ttyACM0"));
    port.set_open_failures(9);
    port.push_lines(&["OK", "OK"]);

    common::helpers::disconnected(&bus, &port).connect().unwrap_or_else(|e| {
        panic!("connect failed: {}", e)
    });
    assert_eq!(bus.finds(), 1);
}
