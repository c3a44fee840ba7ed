// galaxy-at-rs/galaxy-at/src/transport/usb/mod.rs

#![cfg(feature = "usb")]

use crate::constants::TARGET_CONFIGURATION;
use crate::transport::traits::{UsbBus, UsbDevice};
use crate::types::{DeviceId, DeviceIdentity};
use crate::{Error, Result};

use rusb::{Context, DeviceHandle, UsbContext};

mod descriptor;
pub use descriptor::{configuration_values, has_acm_interface};

/// libusb-backed bus. Feature-gated behind `--features usb` and requires
/// the `rusb` crate.
pub struct RusbBus {
    ctx: Context,
    target: u8,
}

impl RusbBus {
    pub fn new() -> Result<Self> {
        Ok(Self {
            ctx: Context::new()?,
            target: TARGET_CONFIGURATION,
        })
    }

    /// Configuration expected to carry the CDC interface. Only used to warn
    /// about handsets that do not advertise it.
    pub fn with_target_configuration(mut self, target: u8) -> Self {
        self.target = target;
        self
    }

    pub fn target_configuration(&self) -> u8 {
        self.target
    }
}

/// Open the first device matching `id`. Shared by `find` and by the
/// handle recovery after a reset.
fn open_matching(
    ctx: &Context,
    id: DeviceId,
    target: u8,
) -> Result<Option<DeviceHandle<Context>>> {
    for device in ctx.devices()?.iter() {
        let dd = match device.device_descriptor() {
            Ok(dd) => dd,
            // Devices in the middle of re-enumerating can fail here.
            Err(_) => continue,
        };
        if dd.vendor_id() != id.vendor_id || dd.product_id() != id.product_id {
            continue;
        }

        log::debug!(
            "found {} on bus {} address {}, configurations {:?}",
            id,
            device.bus_number(),
            device.address(),
            configuration_values(&device)
        );
        if !has_acm_interface(&device, target) {
            log::warn!(
                "{} does not advertise a CDC interface in configuration {}",
                id,
                target
            );
        }

        let handle = device.open()?;
        // Let libusb detach cdc_acm/usbfs drivers around configuration
        // changes; not every platform supports it.
        let _ = handle.set_auto_detach_kernel_driver(true);
        return Ok(Some(handle));
    }
    Ok(None)
}

impl UsbBus for RusbBus {
    fn find(&mut self, id: DeviceId) -> Result<Option<Box<dyn UsbDevice>>> {
        Ok(open_matching(&self.ctx, id, self.target)?.map(|handle| {
            Box::new(RusbDevice {
                ctx: self.ctx.clone(),
                id,
                target: self.target,
                handle: Some(handle),
            }) as Box<dyn UsbDevice>
        }))
    }
}

/// Open device handle. A port reset may re-enumerate the phone, which
/// invalidates the handle; the device then reopens itself by id.
pub struct RusbDevice {
    ctx: Context,
    id: DeviceId,
    target: u8,
    handle: Option<DeviceHandle<Context>>,
}

impl RusbDevice {
    fn handle(&mut self) -> Result<&mut DeviceHandle<Context>> {
        if self.handle.is_none() {
            self.handle = open_matching(&self.ctx, self.id, self.target)?;
        }
        self.handle.as_mut().ok_or(Error::DeviceNotFound)
    }

    /// Drop the handle if `err` means the device went away, so the next
    /// call reopens it.
    fn forget_if_gone<T>(&mut self, res: rusb::Result<T>) -> Result<T> {
        match res {
            Err(rusb::Error::NoDevice) | Err(rusb::Error::NotFound) => {
                log::debug!("{} re-enumerating, dropping stale handle", self.id);
                self.handle = None;
                Err(Error::Usb(rusb::Error::NoDevice))
            }
            other => Ok(other?),
        }
    }
}

impl UsbDevice for RusbDevice {
    fn identity(&mut self) -> Result<DeviceIdentity> {
        let configuration = self.active_configuration()?;
        Ok(DeviceIdentity {
            id: self.id,
            configuration,
        })
    }

    fn active_configuration(&mut self) -> Result<u8> {
        let res = self.handle()?.active_configuration();
        self.forget_if_gone(res)
    }

    fn reset(&mut self) -> Result<()> {
        let res = self.handle()?.reset();
        self.forget_if_gone(res)
    }

    fn set_configuration(&mut self, value: u8) -> Result<()> {
        let res = self.handle()?.set_active_configuration(value);
        self.forget_if_gone(res)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_configuration_is_configurable() {
        // libusb may be unavailable in sandboxed CI
        let Ok(bus) = RusbBus::new() else { return };
        assert_eq!(bus.target_configuration(), TARGET_CONFIGURATION);
        assert_eq!(bus.with_target_configuration(3).target_configuration(), 3);
    }

    // These tests require actual hardware and are ignored by default. They
    // are provided as integration points for manual/hardware runners.
    #[test]
    #[ignore = "requires hardware (Galaxy handset)"]
    fn find_device_if_present() {
        let mut bus = RusbBus::new().unwrap();
        match bus.find(DeviceId::GALAXY).unwrap() {
            Some(mut dev) => {
                let ident = dev.identity().unwrap();
                assert_eq!(ident.id, DeviceId::GALAXY);
            }
            // No phone attached is acceptable in CI environments
            None => {}
        }
    }
}
