#[path = "../common/mod.rs"]
mod common;

use galaxy_at::protocol::{AtCommand, AtSession, ResponseStatus};
use galaxy_at::transport::mock::{MockConnector, MockReply};
use galaxy_at::utils::WaitContext;
use galaxy_at::{Error, HandshakePolicy};

#[test]
fn reply_ends_at_newest_terminal_line() {
    let port = MockConnector::new("/dev/ttyACM0");
    port.push_lines(&common::fixtures::phonebook_lines());
    let mut session = AtSession::new(Box::new(port.clone()));

    let resp = session.send(&AtCommand::phonebook_read()).unwrap();
    assert_eq!(resp.status(), ResponseStatus::Ok);
    assert_eq!(resp.lines().len(), 4);
    assert_eq!(port.written(), vec!["AT+CPBR=1,250\r\n".to_string()]);
}

#[test]
fn every_command_releases_the_port() {
    let port = MockConnector::new("/dev/ttyACM0");
    port.push_line("OK");
    port.push(MockReply::ReadError);
    let mut session = AtSession::new(Box::new(port.clone()));

    session.send(&AtCommand::ping()).unwrap();
    session.send(&AtCommand::ping()).unwrap();
    assert_eq!(port.opened(), 2);
    assert_eq!(port.closed(), 2);
}

#[test]
fn silent_link_fails_handshake_after_nine() {
    let port = MockConnector::new("/dev/ttyACM0");
    let mut session = AtSession::new(Box::new(port.clone()));
    let mut ctx = WaitContext::quiet();

    match session.handshake(&HandshakePolicy::immediate(9, 50), &mut ctx) {
        Err(Error::HandshakeFailed { attempts, failures }) => {
            assert_eq!(failures, 9);
            assert_eq!(attempts, 9);
        }
        other => panic!("expected HandshakeFailed, got {:?}", other),
    }
    assert_eq!(port.written().len(), 9);
}

#[test]
fn locked_phone_keeps_handshake_alive() {
    let port = MockConnector::new("/dev/ttyACM0");
    for _ in 0..12 {
        port.push_line("+CME ERROR: phone locked");
    }
    port.push_line("OK");
    let mut session = AtSession::new(Box::new(port.clone()));
    let mut ctx = WaitContext::quiet();

    session
        .handshake(&HandshakePolicy::immediate(9, 50), &mut ctx)
        .unwrap();
    assert_eq!(port.written().len(), 13);
}
