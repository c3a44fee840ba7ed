// galaxy-at-rs/galaxy-at/src/sim/descriptor.rs
//! Static layout table for the SIM elementary files read by the dump.
//!
//! Offsets are 1-indexed and inclusive, exactly as the ETSI USIM
//! specification lists them, so entries can be checked against the
//! standard line by line.

use std::ops::Range;

use crate::types::FileId;

/// How a field's bytes are interpreted beyond the raw octets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum DecodeKind {
    Raw,
    /// Indicator nibble plus nibble-swapped digits
    Imsi,
    /// MCC/MNC packed across three bytes, LAC kept in raw order
    Lai,
    /// Every byte nibble-swapped
    Iccid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FieldDescriptor {
    pub name: &'static str,
    /// First byte, 1-indexed
    pub start: usize,
    /// Last byte, 1-indexed and inclusive
    pub end: usize,
    pub kind: DecodeKind,
}

impl FieldDescriptor {
    pub const fn raw(name: &'static str, start: usize, end: usize) -> Self {
        Self::new(name, start, end, DecodeKind::Raw)
    }

    pub const fn new(name: &'static str, start: usize, end: usize, kind: DecodeKind) -> Self {
        Self {
            name,
            start,
            end,
            kind,
        }
    }

    pub fn len(&self) -> usize {
        self.end + 1 - self.start
    }

    /// Character range of this field inside the hex string (two characters
    /// per byte).
    pub fn char_range(&self) -> Range<usize> {
        (self.start - 1) * 2..self.end * 2
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EfDescriptor {
    pub file: FileId,
    pub name: &'static str,
    pub fields: &'static [FieldDescriptor],
}

impl EfDescriptor {
    /// Highest byte offset any field needs; the payload must be at least
    /// this long.
    pub fn max_offset(&self) -> usize {
        self.fields.iter().map(|f| f.end).max().unwrap_or(0)
    }
}

/// Files read by the network dump, in dump order.
pub static EF_TABLE: &[EfDescriptor] = &[
    EfDescriptor {
        file: FileId::IMSI,
        name: "IMSI",
        fields: &[
            FieldDescriptor::raw("length", 1, 1),
            FieldDescriptor::new("IMSI", 2, 9, DecodeKind::Imsi),
        ],
    },
    EfDescriptor {
        file: FileId::KC,
        name: "GSM Ciphering key Kc",
        fields: &[
            FieldDescriptor::raw("Kc", 1, 8),
            FieldDescriptor::raw("sequence number", 9, 9),
        ],
    },
    EfDescriptor {
        file: FileId::KEYS,
        name: "Ciphering and Integrity keys",
        fields: &[
            FieldDescriptor::raw("KSI", 1, 1),
            FieldDescriptor::raw("CK", 2, 17),
            FieldDescriptor::raw("IK", 18, 33),
        ],
    },
    EfDescriptor {
        file: FileId::KEYS_PS,
        name: "Ciphering and Integrity Keys for Packet Switched domain",
        fields: &[
            FieldDescriptor::raw("KSIPS", 1, 1),
            FieldDescriptor::raw("CKPS", 2, 17),
            FieldDescriptor::raw("IKPS", 18, 33),
        ],
    },
    EfDescriptor {
        file: FileId::LOCI,
        name: "TMSI, LAI, RFU and Location update status",
        fields: &[
            FieldDescriptor::raw("TMSI", 1, 4),
            FieldDescriptor::new("LAI", 5, 9, DecodeKind::Lai),
            FieldDescriptor::raw("RFU", 10, 10),
            FieldDescriptor::raw("LUS", 11, 11),
        ],
    },
    EfDescriptor {
        file: FileId::KC_GPRS,
        name: "KcGPRS",
        fields: &[
            FieldDescriptor::raw("KcGPRS", 1, 8),
            FieldDescriptor::raw("sequence number", 9, 9),
        ],
    },
    EfDescriptor {
        file: FileId::PS_LOCI,
        name: "PTMSI, PTMSI Signature Value, RAI and RAUS",
        fields: &[
            FieldDescriptor::raw("PTMSI", 1, 4),
            FieldDescriptor::raw("PTMSI signature", 5, 7),
            FieldDescriptor::raw("Routing Area Information", 8, 13),
            FieldDescriptor::raw("Routing Area Update Status", 14, 14),
        ],
    },
];

/// EF_ICCID sits outside the USIM application and is dumped on its own.
pub static ICCID_DESCRIPTOR: EfDescriptor = EfDescriptor {
    file: FileId::ICCID,
    name: "ICCID",
    fields: &[FieldDescriptor::new("ICCID", 1, 10, DecodeKind::Iccid)],
};

/// Layout for `file` from `EF_TABLE`. EF_ICCID is not in the table; use
/// `ICCID_DESCRIPTOR` for it.
pub fn lookup(file: FileId) -> Option<&'static EfDescriptor> {
    EF_TABLE.iter().find(|d| d.file == file)
}
