// galaxy-at-rs/galaxy-at/src/info/mod.rs
//! Handset data outside the SIM filesystem: phonebook and vendor device info.

pub mod devconinfo;
pub mod phonebook;

pub use devconinfo::{DeviceInfo, parse_devconinfo};
pub use phonebook::{NumberType, PhonebookEntry, parse_phonebook};

use crate::Result;
use crate::protocol::{AtCommand, AtSession};

/// `+CPBR=1,250`: up to 250 entries, 2 s per line.
pub fn read_phonebook(session: &mut AtSession) -> Result<Vec<PhonebookEntry>> {
    let resp = session.execute(&AtCommand::phonebook_read())?;
    parse_phonebook(&resp)
}

pub fn read_device_info(session: &mut AtSession) -> Result<DeviceInfo> {
    let resp = session.execute(&AtCommand::devconinfo())?;
    parse_devconinfo(&resp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::transport::mock::MockConnector;

    #[test]
    fn phonebook_over_session() {
        let mock = MockConnector::new("/dev/ttyACM0");
        mock.push_lines(&["+CPBR: 1,\"112\",129,\"SOS\"", "OK"]);
        let mut s = AtSession::new(Box::new(mock.clone()));

        let entries = read_phonebook(&mut s).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(mock.written(), vec!["AT+CPBR=1,250\r\n".to_string()]);
    }

    #[test]
    fn full_phonebook_fits_the_budget() {
        let mock = MockConnector::new("/dev/ttyACM0");
        mock.push_line("AT+CPBR=1,250");
        for i in 1..=250 {
            mock.push_line("");
            mock.push_line(&format!("+CPBR: {},\"+4915100000{:03}\",145,\"Contact {}\"", i, i, i));
        }
        mock.push_lines(&["", "OK"]);
        let mut s = AtSession::new(Box::new(mock));

        let entries = read_phonebook(&mut s).unwrap();
        assert_eq!(entries.len(), 250);
        assert_eq!(entries[249].index, 250);
        assert_eq!(entries[249].name, "Contact 250");
    }

    #[test]
    fn device_info_rejected() {
        let mock = MockConnector::new("/dev/ttyACM0");
        mock.push_line("ERROR");
        let mut s = AtSession::new(Box::new(mock));

        assert!(matches!(
            read_device_info(&mut s),
            Err(Error::CommandRejected { .. })
        ));
    }
}
