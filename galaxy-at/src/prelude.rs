// galaxy-at-rs/galaxy-at/src/prelude.rs

pub use crate::config::{HandshakePolicy, SessionConfig};
pub use crate::device::{Disconnected, Modem, ModemBuilder, Ready};
pub use crate::info::{DeviceInfo, NumberType, PhonebookEntry};
pub use crate::protocol::{AtCommand, AtResponse, AtSession, ResponseStatus};
pub use crate::sim::{DecodedEf, DecodedField, Derived, Iccid, Imsi, Lai};
pub use crate::{DeviceId, DeviceIdentity, Error, FileId, Result};

// Re-export small utilities for convenience
pub use crate::utils::{CancelToken, RetryPolicy, bytes_to_hex, ms, parse_hex};
