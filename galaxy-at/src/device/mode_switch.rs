// galaxy-at-rs/galaxy-at/src/device/mode_switch.rs
//! Getting the handset into the USB configuration that exposes the modem.
//!
//! Out of the box the phone enumerates in MTP mode. Selecting configuration
//! 2 brings up the CDC ACM interface, and the kernel then creates the
//! serial node. The switch only sticks after a couple of port resets, and
//! every reset makes the device re-enumerate, so each step tolerates I/O
//! errors and the outcome is judged by reading the configuration back.

use crate::transport::{UsbBus, UsbDevice};
use crate::types::DeviceId;
use crate::utils::{RetryPolicy, WaitContext};
use crate::{Error, Result};

/// Poll the bus until a device matching `id` enumerates.
pub fn locate(
    bus: &mut dyn UsbBus,
    id: DeviceId,
    policy: &RetryPolicy,
    ctx: &mut WaitContext,
) -> Result<Box<dyn UsbDevice>> {
    let label = format!("Waiting for USB device {}", id);
    for attempt in policy.attempts() {
        ctx.cancel.check()?;
        ctx.progress.tick(&label);

        match bus.find(id) {
            Ok(Some(device)) => {
                ctx.progress.finish("device connected.");
                log::info!("found {} after {} scans", id, attempt);
                return Ok(device);
            }
            Ok(None) => {}
            Err(e) if e.is_transient() => log::debug!("USB scan {} failed: {}", attempt, e),
            Err(e) => return Err(e),
        }

        if attempt < policy.max_attempts() {
            policy.pause(&ctx.cancel)?;
        }
    }

    log::warn!(
        "{} did not enumerate after {} scans",
        id,
        policy.max_attempts()
    );
    Err(Error::DeviceNotFound)
}

/// Switch `device` to configuration `target`.
///
/// No-op when `target` is already active. Otherwise each attempt resets the
/// port twice, requests `target` and reads the active configuration back.
pub fn reconfigure(
    device: &mut dyn UsbDevice,
    target: u8,
    policy: &RetryPolicy,
    ctx: &mut WaitContext,
) -> Result<()> {
    match device.active_configuration() {
        Ok(active) if active == target => {
            log::info!("configuration {:#x} already active, skipping reset", target);
            return Ok(());
        }
        Ok(active) => log::debug!("active configuration {:#x}, want {:#x}", active, target),
        Err(e) => log::debug!("could not read active configuration: {}", e),
    }

    let label = format!("Resetting USB and switching to configuration {:#x}", target);
    for attempt in policy.attempts() {
        ctx.cancel.check()?;

        match switch_once(device, target) {
            Ok(active) if active == target => {
                ctx.progress.finish("switched successfully.");
                log::info!("configuration {:#x} active after {} attempts", target, attempt);
                return Ok(());
            }
            Ok(active) => log::debug!(
                "attempt {}: configuration still {:#x}",
                attempt,
                active
            ),
            Err(e) => log::debug!("attempt {}: {}", attempt, e),
        }

        ctx.progress.tick(&label);
        if attempt < policy.max_attempts() {
            policy.pause(&ctx.cancel)?;
        }
    }

    Err(Error::ConfigurationSwitchFailed {
        attempts: policy.max_attempts(),
    })
}

fn switch_once(device: &mut dyn UsbDevice, target: u8) -> Result<u8> {
    device.reset()?;
    device.reset()?;
    device.set_configuration(target)?;
    device.active_configuration()
}
