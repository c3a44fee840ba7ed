#![cfg(feature = "hardware")]

#[path = "common.rs"]
mod common;

use galaxy_at::Result;
use serial_test::serial;

// These tests need a Galaxy handset on USB. They are marked `#[ignore]` so
// CI does not attempt to run them. Run manually with:
//
// cargo test -p galaxy-at --test hardware --features hardware -- --ignored

#[test]
#[ignore]
#[serial]
fn handshake_and_imsi() -> Result<()> {
    if let Some(mut modem) = common::connect_if_present()? {
        let ef = modem.decode_ef(galaxy_at::FileId::IMSI)?;
        assert_eq!(ef.fields.len(), 2);
    }
    Ok(())
}

#[test]
#[ignore]
#[serial]
fn device_info() -> Result<()> {
    if let Some(mut modem) = common::connect_if_present()? {
        let info = modem.device_info()?;
        assert!(!info.is_empty());
    }
    Ok(())
}
