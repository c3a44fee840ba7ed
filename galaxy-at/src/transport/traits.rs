// galaxy-at-rs/galaxy-at/src/transport/traits.rs

use std::path::Path;
use std::time::Duration;

use crate::Result;
use crate::types::{DeviceId, DeviceIdentity};

/// An open serial connection carrying AT lines. Dropping the value closes
/// the underlying port.
pub trait LineTransport {
    /// Write a full request line (terminator included).
    fn write_line(&mut self, line: &str) -> Result<()>;

    /// Read one line, waiting at most `timeout`. The returned text keeps
    /// whatever line terminator the device sent.
    fn read_line(&mut self, timeout: Duration) -> Result<String>;
}

/// Opens a fresh `LineTransport` per command.
pub trait PortConnector {
    /// OS path of the serial node
    fn path(&self) -> &Path;

    /// Open the port with `timeout` as the initial read timeout.
    fn open(&mut self, timeout: Duration) -> Result<Box<dyn LineTransport>>;

    /// Whether the serial node currently exists. Default checks the
    /// filesystem.
    fn port_present(&self) -> bool {
        self.path().exists()
    }
}

impl<T: PortConnector + ?Sized> PortConnector for Box<T> {
    fn path(&self) -> &Path {
        (**self).path()
    }

    fn open(&mut self, timeout: Duration) -> Result<Box<dyn LineTransport>> {
        (**self).open(timeout)
    }

    fn port_present(&self) -> bool {
        (**self).port_present()
    }
}

/// A USB device handle as far as the mode switch cares.
pub trait UsbDevice {
    /// Ids and current configuration
    fn identity(&mut self) -> Result<DeviceIdentity>;

    /// `bConfigurationValue` of the active configuration
    fn active_configuration(&mut self) -> Result<u8>;

    /// Port reset. The device may re-enumerate; implementations are
    /// expected to reacquire their handle when that happens.
    fn reset(&mut self) -> Result<()>;

    /// SET_CONFIGURATION request
    fn set_configuration(&mut self, value: u8) -> Result<()>;
}

/// Enumerates the bus.
pub trait UsbBus {
    /// Open the first device matching `id`, `Ok(None)` when nothing matches.
    fn find(&mut self, id: DeviceId) -> Result<Option<Box<dyn UsbDevice>>>;
}
