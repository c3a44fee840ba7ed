// galaxy-at-rs/galaxy-at/src/sim/bcd.rs
//! Semi-octet (swapped BCD) identifiers stored on the SIM.

use derive_more::Display;

use crate::utils::{ensure_hex, octets, swap_nibbles, trim_filler};
use crate::{Error, Result};

/// IMSI recovered from the 8-byte identity field of EF_IMSI.
///
/// The low nibble of the first byte is the length/parity indicator; the
/// remaining semi-octets are read with each byte's nibbles swapped.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[display(fmt = "{}", semi_octets)]
pub struct Imsi {
    indicator: char,
    semi_octets: String,
}

impl Imsi {
    pub fn from_field(hex: &str) -> Result<Self> {
        ensure_hex(hex)?;
        if hex.is_empty() {
            return Err(Error::malformed("empty IMSI field"));
        }
        let swapped = swap_nibbles(&hex.to_ascii_uppercase());
        let mut chars = swapped.chars();
        let indicator = chars
            .next()
            .ok_or_else(|| Error::malformed("empty IMSI field"))?;
        Ok(Self {
            indicator,
            semi_octets: chars.collect(),
        })
    }

    /// Length/parity nibble (`9` for an odd-length IMSI)
    pub fn indicator(&self) -> char {
        self.indicator
    }

    /// Every semi-octet after the indicator, filler included.
    pub fn semi_octets(&self) -> &str {
        &self.semi_octets
    }

    /// The subscriber identity digits, filler dropped.
    pub fn digits(&self) -> &str {
        trim_filler(&self.semi_octets)
    }

    pub fn mcc(&self) -> &str {
        let d = self.digits();
        &d[..d.len().min(3)]
    }
}

/// Location Area Identification from EF_LOCI.
///
/// Byte layout: `MCC2 MCC1 | MNC3 MCC3 | MNC2 MNC1 | LAC | LAC`. A two-digit
/// MNC carries `F` in the MNC3 nibble.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[display(fmt = "{} {} {}", mcc, mnc, lac)]
pub struct Lai {
    pub mcc: String,
    pub mnc: String,
    /// Location area code, raw byte order
    pub lac: String,
}

impl Lai {
    pub fn from_field(hex: &str) -> Result<Self> {
        ensure_hex(hex)?;
        let hex = hex.to_ascii_uppercase();
        let o = octets(&hex);
        if o.len() < 5 {
            return Err(Error::malformed(format!(
                "LAI needs 5 bytes, got {}",
                o.len()
            )));
        }
        // o[1] holds MNC digit 3 in the high nibble and MCC digit 3 in the low
        let (mnc3, mcc3) = o[1].split_at(1);

        let mcc = format!("{}{}", swap_nibbles(o[0]), mcc3);
        let mnc = format!("{}{}", swap_nibbles(o[2]), mnc3);
        Ok(Self {
            mcc,
            mnc: trim_filler(&mnc).to_string(),
            lac: format!("{}{}", o[3], o[4]),
        })
    }
}

/// EF_ICCID contents: the stored bytes and the nibble-swapped card number.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[display(fmt = "{}", swapped)]
pub struct Iccid {
    raw: String,
    swapped: String,
}

impl Iccid {
    pub fn from_hex(hex: &str) -> Result<Self> {
        ensure_hex(hex)?;
        let raw = hex.to_ascii_uppercase();
        let swapped = swap_nibbles(&raw);
        Ok(Self { raw, swapped })
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Every byte nibble-swapped, filler included.
    pub fn swapped(&self) -> &str {
        &self.swapped
    }

    /// Card number without trailing filler.
    pub fn number(&self) -> &str {
        trim_filler(&self.swapped)
    }
}
