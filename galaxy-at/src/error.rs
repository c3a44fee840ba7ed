// galaxy-at-rs/galaxy-at/src/error.rs

use std::path::PathBuf;

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("device not found")]
    DeviceNotFound,

    #[error("usb configuration switch failed after {attempts} attempts")]
    ConfigurationSwitchFailed { attempts: usize },

    #[error("serial port {} unavailable after {attempts} checks", .path.display())]
    PortUnavailable { path: PathBuf, attempts: usize },

    #[error("AT handshake failed: {failures} consecutive failures after {attempts} pings")]
    HandshakeFailed { attempts: usize, failures: usize },

    #[error("command timed out: AT{command}")]
    CommandTimeout { command: String },

    #[error("device rejected AT{command}: {reason}")]
    CommandRejected { command: String, reason: String },

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("operation cancelled")]
    Cancelled,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    // USB 実装を後から有効化できるように optional dependency にしている
    #[cfg(feature = "usb")]
    #[error("usb error: {0}")]
    Usb(#[from] rusb::Error),

    #[cfg(not(feature = "usb"))]
    #[error("usb error: {0}")]
    UsbString(String),

    #[cfg(feature = "serial")]
    #[error("serial error: {0}")]
    Serial(#[from] serialport::Error),
}

impl Error {
    /// Errors that a polling loop may absorb and retry: the link dropping,
    /// the device re-enumerating or a read running out of time.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Io(_) | Self::CommandTimeout { .. } => true,
            #[cfg(feature = "usb")]
            Self::Usb(_) => true,
            #[cfg(not(feature = "usb"))]
            Self::UsbString(_) => true,
            #[cfg(feature = "serial")]
            Self::Serial(_) => true,
            _ => false,
        }
    }

    pub(crate) fn malformed(what: impl Into<String>) -> Self {
        Self::MalformedResponse(what.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
