// galaxy-at-rs/galaxy-at/src/sim/decoder.rs

use crate::protocol::parser::ensure_hex_len;
use crate::sim::bcd::{Iccid, Imsi, Lai};
use crate::sim::descriptor::{DecodeKind, EfDescriptor, FieldDescriptor, lookup};
use crate::types::FileId;
use crate::utils::{ensure_hex, octets};
use crate::{Error, Result};

/// Human value recovered from a field with a special decode kind.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Derived {
    Imsi(Imsi),
    Lai(Lai),
    Iccid(Iccid),
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DecodedField {
    pub name: &'static str,
    raw: String,
    pub derived: Option<Derived>,
}

impl DecodedField {
    /// The field's bytes as upper-case hex, in stored order.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The raw bytes split into two-character octets.
    pub fn octets(&self) -> Vec<&str> {
        octets(&self.raw)
    }
}

/// One elementary file sliced into its named fields, in table order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DecodedEf {
    pub file: FileId,
    pub name: &'static str,
    pub fields: Vec<DecodedField>,
}

impl DecodedEf {
    pub fn field(&self, name: &str) -> Option<&DecodedField> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Slice `payload` (hex text) according to `descriptor`.
///
/// Bytes past the last described field are ignored. A payload too short for
/// the descriptor, or one that is not hex, is rejected.
pub fn decode(payload: &str, descriptor: &EfDescriptor) -> Result<DecodedEf> {
    let payload = payload.trim();
    ensure_hex(payload)?;
    ensure_hex_len(payload, descriptor.max_offset()).map_err(|e| match e {
        Error::MalformedResponse(m) => Error::malformed(format!("{}: {}", descriptor.name, m)),
        other => other,
    })?;
    let payload = payload.to_ascii_uppercase();

    let fields = descriptor
        .fields
        .iter()
        .map(|f| decode_field(&payload, f))
        .collect::<Result<Vec<_>>>()?;

    Ok(DecodedEf {
        file: descriptor.file,
        name: descriptor.name,
        fields,
    })
}

/// `decode` with the descriptor looked up by file id.
pub fn decode_file(file: FileId, payload: &str) -> Result<DecodedEf> {
    let descriptor =
        lookup(file).ok_or_else(|| Error::malformed(format!("no layout for EF {}", file)))?;
    decode(payload, descriptor)
}

fn decode_field(payload: &str, field: &FieldDescriptor) -> Result<DecodedField> {
    let raw = payload
        .get(field.char_range())
        .ok_or_else(|| Error::malformed(format!("field {} out of range", field.name)))?
        .to_string();

    let derived = match field.kind {
        DecodeKind::Raw => None,
        DecodeKind::Imsi => Some(Derived::Imsi(Imsi::from_field(&raw)?)),
        DecodeKind::Lai => Some(Derived::Lai(Lai::from_field(&raw)?)),
        DecodeKind::Iccid => Some(Derived::Iccid(Iccid::from_hex(&raw)?)),
    };

    Ok(DecodedField {
        name: field.name,
        raw,
        derived,
    })
}
