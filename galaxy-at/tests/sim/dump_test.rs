#[path = "../common/mod.rs"]
mod common;

use galaxy_at::sim::EF_TABLE;
use galaxy_at::{Error, FileId};

#[test]
fn network_dump_over_ready_modem() {
    let (mut modem, _bus, port) = common::helpers::ready().unwrap();
    common::helpers::push_network_dump(&port);

    let dump = modem.dump_network_info().unwrap();
    assert_eq!(dump.len(), EF_TABLE.len());
    assert_eq!(dump[0].file, FileId::IMSI);
    // handshake, +CMEE=2, one read per file
    assert_eq!(port.written().len(), 2 + EF_TABLE.len());
}

#[test]
fn dump_fails_without_partial_output() {
    let (mut modem, _bus, port) = common::helpers::ready().unwrap();
    common::helpers::push_crsm_reply(&port, &common::fixtures::imsi_payload());
    port.push_lines(&["+CRSM: 106,130", "OK"]);

    match modem.dump_network_info() {
        Err(Error::MalformedResponse(m)) => assert!(m.contains("106,130")),
        other => panic!("expected MalformedResponse, got {:?}", other),
    }
}

#[test]
fn iccid_number() {
    let (mut modem, _bus, port) = common::helpers::ready().unwrap();
    common::helpers::push_crsm_reply(&port, &common::fixtures::iccid_payload());

    let iccid = modem.read_iccid().unwrap();
    assert_eq!(iccid.swapped(), "8901910000002143657F");
    assert_eq!(iccid.number(), "8901910000002143657");
}

#[test]
fn phonebook_and_device_info() {
    let (mut modem, _bus, port) = common::helpers::ready().unwrap();
    port.push_lines(&common::fixtures::phonebook_lines());
    port.push_lines(&[common::fixtures::DEVCONINFO_LINE]);

    let entries = modem.phonebook().unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[1].name, "Doe, John");

    let info = modem.device_info().unwrap();
    assert_eq!(info.get("MN"), Some("SM-G950F"));
    assert_eq!(info.get("LOCK"), Some("NONE"));
}
