// galaxy-at-rs/galaxy-at/src/transport/mod.rs

pub mod mock;
#[cfg(feature = "serial")]
pub mod serial;
pub mod traits;
#[cfg(feature = "usb")]
pub mod usb;

pub use mock::{MockConnector, MockUsbBus};
#[cfg(feature = "serial")]
pub use serial::SerialConnector;
pub use traits::{LineTransport, PortConnector, UsbBus, UsbDevice};
#[cfg(feature = "usb")]
pub use usb::RusbBus;
