// galaxy-at-rs/galaxy-at/src/sim/mod.rs
//! SIM elementary file layouts and decoding.

pub mod bcd;
pub mod decoder;
pub mod descriptor;

pub use bcd::{Iccid, Imsi, Lai};
pub use decoder::{DecodedEf, DecodedField, Derived, decode, decode_file};
pub use descriptor::{
    DecodeKind, EF_TABLE, EfDescriptor, FieldDescriptor, ICCID_DESCRIPTOR, lookup,
};

use crate::{Error, Result};
use crate::protocol::{AtSession, read_ef};
use crate::utils::{CancelToken, RetryPolicy};

/// Read and decode every file in `EF_TABLE`, in table order. The first
/// failure aborts the dump.
pub fn dump_network_info(
    session: &mut AtSession,
    policy: &RetryPolicy,
    cancel: &CancelToken,
) -> Result<Vec<DecodedEf>> {
    let mut out = Vec::with_capacity(EF_TABLE.len());
    for ef in EF_TABLE {
        log::info!("Dumping {}", ef.name);
        let payload = read_ef(session, ef.file, policy, cancel)?;
        out.push(decode(&payload, ef)?);
    }
    Ok(out)
}

/// Read EF_ICCID. A payload shorter than the 10-byte layout is rejected.
pub fn read_iccid(
    session: &mut AtSession,
    policy: &RetryPolicy,
    cancel: &CancelToken,
) -> Result<Iccid> {
    let payload = read_ef(session, ICCID_DESCRIPTOR.file, policy, cancel)?;
    let ef = decode(&payload, &ICCID_DESCRIPTOR)?;
    ef.fields
        .into_iter()
        .find_map(|f| match f.derived {
            Some(Derived::Iccid(iccid)) => Some(iccid),
            _ => None,
        })
        .ok_or_else(|| Error::malformed("ICCID field missing from layout"))
}
