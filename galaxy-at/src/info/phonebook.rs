// galaxy-at-rs/galaxy-at/src/info/phonebook.rs

use derive_more::Display;

use crate::constants::PHONEBOOK_TOKEN;
use crate::protocol::AtResponse;
use crate::protocol::parser::{decimal_field, strip_echo, unquote};
use crate::{Error, Result};

/// Type-of-address octet reported with each number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum NumberType {
    #[display(fmt = "Natnl.")]
    National,
    #[display(fmt = "Intl.")]
    International,
    #[display(fmt = "Null.")]
    Null,
    #[display(fmt = "{}", _0)]
    Other(u16),
}

impl From<u16> for NumberType {
    fn from(v: u16) -> Self {
        match v {
            129 => NumberType::National,
            145 => NumberType::International,
            0 => NumberType::Null,
            other => NumberType::Other(other),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PhonebookEntry {
    pub index: u16,
    pub number: String,
    pub number_type: NumberType,
    pub name: String,
}

/// Parse one `+CPBR: <index>,"<number>",<type>,"<name>"` line. Commas inside
/// the name are kept.
pub fn parse_entry(line: &str) -> Result<PhonebookEntry> {
    let body = strip_echo(line)?;
    let mut parts = body.splitn(4, ',');
    let mut next = |what: &str| {
        parts
            .next()
            .ok_or_else(|| Error::malformed(format!("phonebook entry without {}: '{}'", what, line)))
    };

    let index = decimal_field(next("index")?, "phonebook index")?;
    let number = unquote(next("number")?.trim());
    let type_code: u16 = decimal_field(next("type")?, "number type")?;
    let name = unquote(next("name")?.trim());

    Ok(PhonebookEntry {
        index,
        number,
        number_type: NumberType::from(type_code),
        name,
    })
}

/// Every `+CPBR:` entry in a phonebook reply, in reply order.
pub fn parse_phonebook(resp: &AtResponse) -> Result<Vec<PhonebookEntry>> {
    let prefix = format!("{}:", PHONEBOOK_TOKEN);
    resp.lines_with_prefix(&prefix).map(parse_entry).collect()
}
