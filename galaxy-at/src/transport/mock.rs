// galaxy-at-rs/galaxy-at/src/transport/mock.rs

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::Duration;

use crate::constants::{CRLF, GALAXY_PRODUCT_ID, GALAXY_VENDOR_ID};
use crate::transport::traits::{LineTransport, PortConnector, UsbBus, UsbDevice};
use crate::types::{DeviceId, DeviceIdentity};
use crate::{Error, Result};

/// One scripted event on the mock serial link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockReply {
    /// A line as the device sends it (terminator included)
    Line(String),
    /// The read fails with an I/O error
    ReadError,
    /// The read times out
    Silence,
}

#[derive(Debug)]
struct SerialState {
    replies: VecDeque<MockReply>,
    written: Vec<String>,
    open_failures: usize,
    write_failures: usize,
    opened: usize,
    closed: usize,
    present: bool,
    absent_probes: usize,
    probes: usize,
}

impl Default for SerialState {
    fn default() -> Self {
        Self {
            replies: VecDeque::new(),
            written: Vec::new(),
            open_failures: 0,
            write_failures: 0,
            opened: 0,
            closed: 0,
            present: true,
            absent_probes: 0,
            probes: 0,
        }
    }
}

/// Mock serial connector for unit tests. Clones share the same script and
/// recordings, so a test can keep one handle and give the other away.
#[derive(Debug, Clone)]
pub struct MockConnector {
    path: PathBuf,
    state: Rc<RefCell<SerialState>>,
}

impl MockConnector {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            state: Rc::new(RefCell::new(SerialState::default())),
        }
    }

    /// Queue a line; CRLF is appended like the modem does.
    pub fn push_line(&self, line: &str) {
        self.push(MockReply::Line(format!("{}{}", line, CRLF)));
    }

    pub fn push_lines(&self, lines: &[&str]) {
        for l in lines {
            self.push_line(l);
        }
    }

    pub fn push(&self, reply: MockReply) {
        self.state.borrow_mut().replies.push_back(reply);
    }

    /// Make the next `n` open calls fail as if the node vanished.
    pub fn set_open_failures(&self, n: usize) {
        self.state.borrow_mut().open_failures = n;
    }

    /// Make the next `n` writes fail.
    pub fn set_write_failures(&self, n: usize) {
        self.state.borrow_mut().write_failures = n;
    }

    /// The node is missing for the next `probes` presence checks, then
    /// shows up.
    pub fn appear_after(&self, probes: usize) {
        let mut s = self.state.borrow_mut();
        s.present = true;
        s.absent_probes = probes;
    }

    /// The node never shows up.
    pub fn never_appear(&self) {
        self.state.borrow_mut().present = false;
    }

    pub fn written(&self) -> Vec<String> {
        self.state.borrow().written.clone()
    }

    pub fn opened(&self) -> usize {
        self.state.borrow().opened
    }

    pub fn closed(&self) -> usize {
        self.state.borrow().closed
    }

    pub fn probes(&self) -> usize {
        self.state.borrow().probes
    }

    /// Scripted replies not consumed yet
    pub fn remaining(&self) -> usize {
        self.state.borrow().replies.len()
    }
}

impl PortConnector for MockConnector {
    fn path(&self) -> &Path {
        &self.path
    }

    fn open(&mut self, _timeout: Duration) -> Result<Box<dyn LineTransport>> {
        let mut s = self.state.borrow_mut();
        if s.open_failures > 0 {
            s.open_failures -= 1;
            return Err(Error::Io(io::Error::new(
                io::ErrorKind::NotFound,
                "mock port missing",
            )));
        }
        s.opened += 1;
        Ok(Box::new(MockPort {
            state: Rc::clone(&self.state),
        }))
    }

    fn port_present(&self) -> bool {
        let mut s = self.state.borrow_mut();
        s.probes += 1;
        if s.absent_probes > 0 {
            s.absent_probes -= 1;
            return false;
        }
        s.present
    }
}

/// Connection handed out by `MockConnector::open`. Records its own close.
struct MockPort {
    state: Rc<RefCell<SerialState>>,
}

impl LineTransport for MockPort {
    fn write_line(&mut self, line: &str) -> Result<()> {
        let mut s = self.state.borrow_mut();
        if s.write_failures > 0 {
            s.write_failures -= 1;
            return Err(Error::Io(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "mock write failed",
            )));
        }
        s.written.push(line.to_string());
        Ok(())
    }

    fn read_line(&mut self, _timeout: Duration) -> Result<String> {
        match self.state.borrow_mut().replies.pop_front() {
            Some(MockReply::Line(l)) => Ok(l),
            Some(MockReply::ReadError) => Err(Error::Io(io::Error::other("mock read failed"))),
            Some(MockReply::Silence) | None => Err(Error::Io(io::Error::new(
                io::ErrorKind::TimedOut,
                "mock read timed out",
            ))),
        }
    }
}

impl Drop for MockPort {
    fn drop(&mut self) {
        self.state.borrow_mut().closed += 1;
    }
}

#[derive(Debug)]
struct UsbState {
    id: DeviceId,
    configuration: u8,
    missing_finds: usize,
    present: bool,
    /// `Some(n)`: the n+1-th SET_CONFIGURATION takes effect, earlier ones
    /// fail like a re-enumerating device. `None`: requests are accepted
    /// but ignored.
    switch_after: Option<usize>,
    reset_failures: usize,
    finds: usize,
    resets: usize,
    set_calls: Vec<u8>,
}

/// Mock USB bus holding a single device.
#[derive(Debug, Clone)]
pub struct MockUsbBus {
    state: Rc<RefCell<UsbState>>,
}

impl MockUsbBus {
    /// A Galaxy device running `configuration`, switchable on first request.
    pub fn new(configuration: u8) -> Self {
        Self::with_id(
            DeviceId::new(GALAXY_VENDOR_ID, GALAXY_PRODUCT_ID),
            configuration,
        )
    }

    pub fn with_id(id: DeviceId, configuration: u8) -> Self {
        Self {
            state: Rc::new(RefCell::new(UsbState {
                id,
                configuration,
                missing_finds: 0,
                present: true,
                switch_after: Some(0),
                reset_failures: 0,
                finds: 0,
                resets: 0,
                set_calls: Vec::new(),
            })),
        }
    }

    /// Nothing ever enumerates.
    pub fn empty() -> Self {
        let bus = Self::new(1);
        bus.state.borrow_mut().present = false;
        bus
    }

    /// The device enumerates after `finds` unsuccessful scans.
    pub fn appear_after(&self, finds: usize) {
        self.state.borrow_mut().missing_finds = finds;
    }

    pub fn set_switch_after(&self, switch_after: Option<usize>) {
        self.state.borrow_mut().switch_after = switch_after;
    }

    pub fn set_reset_failures(&self, n: usize) {
        self.state.borrow_mut().reset_failures = n;
    }

    /// Simulate the phone falling back to another configuration.
    pub fn force_configuration(&self, value: u8) {
        self.state.borrow_mut().configuration = value;
    }

    pub fn configuration(&self) -> u8 {
        self.state.borrow().configuration
    }

    pub fn finds(&self) -> usize {
        self.state.borrow().finds
    }

    pub fn resets(&self) -> usize {
        self.state.borrow().resets
    }

    pub fn set_configuration_calls(&self) -> Vec<u8> {
        self.state.borrow().set_calls.clone()
    }
}

impl UsbBus for MockUsbBus {
    fn find(&mut self, id: DeviceId) -> Result<Option<Box<dyn UsbDevice>>> {
        let mut s = self.state.borrow_mut();
        s.finds += 1;
        if !s.present || s.id != id {
            return Ok(None);
        }
        if s.missing_finds > 0 {
            s.missing_finds -= 1;
            return Ok(None);
        }
        Ok(Some(Box::new(MockUsbDevice {
            state: Rc::clone(&self.state),
        })))
    }
}

struct MockUsbDevice {
    state: Rc<RefCell<UsbState>>,
}

impl UsbDevice for MockUsbDevice {
    fn identity(&mut self) -> Result<DeviceIdentity> {
        let s = self.state.borrow();
        Ok(DeviceIdentity {
            id: s.id,
            configuration: s.configuration,
        })
    }

    fn active_configuration(&mut self) -> Result<u8> {
        Ok(self.state.borrow().configuration)
    }

    fn reset(&mut self) -> Result<()> {
        let mut s = self.state.borrow_mut();
        s.resets += 1;
        if s.reset_failures > 0 {
            s.reset_failures -= 1;
            return Err(Error::Io(io::Error::new(
                io::ErrorKind::NotConnected,
                "mock device re-enumerating",
            )));
        }
        Ok(())
    }

    fn set_configuration(&mut self, value: u8) -> Result<()> {
        let mut s = self.state.borrow_mut();
        s.set_calls.push(value);
        match s.switch_after {
            Some(0) => {
                s.configuration = value;
                Ok(())
            }
            Some(n) => {
                s.switch_after = Some(n - 1);
                Err(Error::Io(io::Error::new(
                    io::ErrorKind::NotConnected,
                    "mock device re-enumerating",
                )))
            }
            None => Ok(()),
        }
    }
}
