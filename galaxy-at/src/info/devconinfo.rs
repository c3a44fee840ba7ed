// galaxy-at-rs/galaxy-at/src/info/devconinfo.rs
//! Samsung `+DEVCONINFO` reply: `KEY(VALUE);KEY(VALUE);...`

use crate::constants::DEVCONINFO_TOKEN;
use crate::protocol::AtResponse;
use crate::protocol::parser::strip_echo;
use crate::{Error, Result};

/// Marker some firmware appends after the last pair
const TRAILER: &str = "#OK#";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DeviceInfo {
    entries: Vec<(String, String)>,
}

impl DeviceInfo {
    /// Key/value pairs in reply order.
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parse the body of a `+DEVCONINFO:` line.
pub fn parse_pairs(body: &str) -> Result<DeviceInfo> {
    let body = body.trim().trim_end_matches(TRAILER);
    let mut entries = Vec::new();
    for segment in body.split(';') {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }
        let (key, rest) = segment
            .split_once('(')
            .ok_or_else(|| Error::malformed(format!("device info item without value: '{}'", segment)))?;
        let value = rest.strip_suffix(')').unwrap_or(rest);
        entries.push((key.trim().to_string(), value.to_string()));
    }
    Ok(DeviceInfo { entries })
}

pub fn parse_devconinfo(resp: &AtResponse) -> Result<DeviceInfo> {
    let prefix = format!("{}:", DEVCONINFO_TOKEN);
    let line = resp
        .lines_with_prefix(&prefix)
        .next()
        .ok_or_else(|| Error::malformed(format!("no {} line in reply", DEVCONINFO_TOKEN)))?;
    parse_pairs(strip_echo(line)?)
}
