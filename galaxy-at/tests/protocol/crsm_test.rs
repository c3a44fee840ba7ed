#[path = "../common/mod.rs"]
mod common;

use galaxy_at::protocol::{AtSession, crsm};
use galaxy_at::transport::mock::MockConnector;
use galaxy_at::{CancelToken, FileId, RetryPolicy};

#[test]
fn notifications_before_reply_are_skipped() {
    let port = MockConnector::new("/dev/ttyACM0");
    let reply = common::fixtures::crsm_ok(&common::fixtures::imsi_payload());
    port.push_lines(&["+CIEV: 10,1", "+CREG: 1", &reply, "OK"]);
    let mut session = AtSession::new(Box::new(port.clone()));

    let payload = crsm::read_ef(
        &mut session,
        FileId::IMSI,
        &RetryPolicy::immediate(3),
        &CancelToken::new(),
    )
    .unwrap();
    assert_eq!(payload, common::fixtures::imsi_payload());
    assert_eq!(port.written().len(), 1);
}

#[test]
fn reply_in_a_later_send_is_found() {
    let port = MockConnector::new("/dev/ttyACM0");
    port.push_lines(&["+CIEV: 10,1", "+CREG: 1", "OK"]);
    let reply = common::fixtures::crsm_ok(&common::fixtures::loci_payload());
    port.push_lines(&[&reply, "OK"]);
    let mut session = AtSession::new(Box::new(port.clone()));

    let payload = crsm::read_ef(
        &mut session,
        FileId::LOCI,
        &RetryPolicy::immediate(3),
        &CancelToken::new(),
    )
    .unwrap();
    assert_eq!(payload, common::fixtures::loci_payload());
    assert_eq!(
        port.written(),
        vec![
            "AT+CRSM=176,28542,0,0,0\r\n".to_string(),
            "AT+CRSM=176,28542,0,0,0\r\n".to_string()
        ]
    );
}

#[test]
fn cancelled_read_stops_resending() {
    let port = MockConnector::new("/dev/ttyACM0");
    let mut session = AtSession::new(Box::new(port.clone()));
    let cancel = CancelToken::new();
    cancel.cancel();

    assert!(matches!(
        crsm::read_ef(&mut session, FileId::KC, &RetryPolicy::immediate(3), &cancel),
        Err(galaxy_at::Error::Cancelled)
    ));
    assert!(port.written().is_empty());
}
