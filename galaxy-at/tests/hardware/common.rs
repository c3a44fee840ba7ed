#![cfg(feature = "hardware")]

//! Helpers for tests against a real handset.
//!
//! The phone must be plugged in and unlocked. When no device enumerates the
//! helpers return `Ok(None)` so the tests pass on machines without one.

use galaxy_at::device::{Modem, ModemBuilder, Ready};
use galaxy_at::{Error, Result, SessionConfig};

pub fn connect_if_present() -> Result<Option<Modem<Ready>>> {
    let _ = env_logger::builder().is_test(true).try_init();
    let config = SessionConfig::default().with_trace_io(true);
    match ModemBuilder::new().with_config(config).connect() {
        Ok(modem) => Ok(Some(modem)),
        Err(Error::DeviceNotFound) => Ok(None),
        Err(e) => Err(e),
    }
}
