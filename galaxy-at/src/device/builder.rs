// galaxy-at-rs/galaxy-at/src/device/builder.rs

use crate::config::SessionConfig;
use crate::device::handle::{Disconnected, Modem, Ready};
use crate::transport::{PortConnector, UsbBus};
use crate::utils::CancelToken;
use crate::Result;

/// Helper to construct a Modem. Backends default to libusb and the
/// `serialport` crate when those features are enabled.
pub struct ModemBuilder {
    config: SessionConfig,
    bus: Option<Box<dyn UsbBus>>,
    connector: Option<Box<dyn PortConnector>>,
    cancel: Option<CancelToken>,
}

impl ModemBuilder {
    pub fn new() -> Self {
        Self {
            config: SessionConfig::default(),
            bus: None,
            connector: None,
            cancel: None,
        }
    }

    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    /// Provide a USB bus (e.g. `MockUsbBus`)
    pub fn with_bus(mut self, bus: Box<dyn UsbBus>) -> Self {
        self.bus = Some(bus);
        self
    }

    /// Provide a serial connector (e.g. `MockConnector`)
    pub fn with_connector(mut self, connector: Box<dyn PortConnector>) -> Self {
        self.connector = Some(connector);
        self
    }

    pub fn with_cancel_token(mut self, cancel: CancelToken) -> Self {
        self.cancel = Some(cancel);
        self
    }

    /// Consume the builder and return a disconnected Modem. Without a
    /// backend for either side this returns DeviceNotFound.
    pub fn build(self) -> Result<Modem<Disconnected>> {
        let bus = match self.bus {
            Some(b) => b,
            None => default_bus(&self.config)?,
        };
        let connector = match self.connector {
            Some(c) => c,
            None => default_connector(&self.config)?,
        };
        Ok(Modem::new(
            self.config,
            bus,
            connector,
            self.cancel.unwrap_or_default(),
        ))
    }

    /// `build` followed by `Modem::connect`.
    pub fn connect(self) -> Result<Modem<Ready>> {
        self.build()?.connect()
    }
}

impl Default for ModemBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "usb")]
fn default_bus(config: &SessionConfig) -> Result<Box<dyn UsbBus>> {
    Ok(Box::new(
        crate::transport::RusbBus::new()?
            .with_target_configuration(config.target_configuration),
    ))
}

#[cfg(not(feature = "usb"))]
fn default_bus(_config: &SessionConfig) -> Result<Box<dyn UsbBus>> {
    Err(crate::Error::DeviceNotFound)
}

#[cfg(feature = "serial")]
fn default_connector(config: &SessionConfig) -> Result<Box<dyn PortConnector>> {
    Ok(Box::new(crate::transport::SerialConnector::new(
        config.port.clone(),
        config.baud_rate,
    )))
}

#[cfg(not(feature = "serial"))]
fn default_connector(_config: &SessionConfig) -> Result<Box<dyn PortConnector>> {
    Err(crate::Error::DeviceNotFound)
}
