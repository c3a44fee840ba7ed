// galaxy-at-rs/galaxy-at/src/types.rs

use derive_more::{Display, From};

use crate::constants::{GALAXY_PRODUCT_ID, GALAXY_VENDOR_ID};

/// SIM elementary file identifier - Newtype Pattern (u16)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[display(fmt = "0x{:04X}", _0)]
pub struct FileId(u16);

impl FileId {
    pub const IMSI: Self = Self(0x6f07);
    pub const KC: Self = Self(0x6f20);
    pub const KEYS: Self = Self(0x6f08);
    pub const KEYS_PS: Self = Self(0x6f09);
    pub const LOCI: Self = Self(0x6f7e);
    pub const KC_GPRS: Self = Self(0x6f52);
    pub const PS_LOCI: Self = Self(0x6f73);
    pub const ICCID: Self = Self(0x2fe2);

    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

/// USB vendor/product pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[display(fmt = "{:04x}:{:04x}", vendor_id, product_id)]
pub struct DeviceId {
    pub vendor_id: u16,
    pub product_id: u16,
}

impl DeviceId {
    pub const GALAXY: Self = Self::new(GALAXY_VENDOR_ID, GALAXY_PRODUCT_ID);

    pub const fn new(vendor_id: u16, product_id: u16) -> Self {
        Self {
            vendor_id,
            product_id,
        }
    }
}

impl Default for DeviceId {
    fn default() -> Self {
        Self::GALAXY
    }
}

/// What a located USB device reports about itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceIdentity {
    pub id: DeviceId,
    pub configuration: u8,
}

impl DeviceIdentity {
    /// The serial node only exists while the device runs `target`.
    pub fn is_configured(&self, target: u8) -> bool {
        self.configuration == target
    }
}
