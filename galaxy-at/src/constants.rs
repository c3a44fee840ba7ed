// galaxy-at-rs/galaxy-at/src/constants.rs
//! Protocol constants shared across the crate

/// Samsung Electronics USB vendor id
pub const GALAXY_VENDOR_ID: u16 = 0x04e8;

/// Product id the handset enumerates with while in MTP/modem mode
pub const GALAXY_PRODUCT_ID: u16 = 0x6860;

/// USB configuration value that exposes the CDC ACM (AT) interface
pub const TARGET_CONFIGURATION: u8 = 0x02;

/// Device node the ACM interface shows up as on Linux
pub const DEFAULT_SERIAL_PORT: &str = "/dev/ttyACM0";

/// Baud rate passed to the serial driver. ACM ignores it but the open call
/// needs one.
pub const DEFAULT_BAUD_RATE: u32 = 115_200;

/// Every request line starts with this prefix
pub const AT_PREFIX: &str = "AT";

/// Request line terminator
pub const CRLF: &str = "\r\n";

/// Tokens that end an AT response
pub const TOKEN_OK: &str = "OK";
pub const TOKEN_ERROR: &str = "ERROR";
pub const TERMINAL_TOKENS: [&str; 2] = [TOKEN_OK, TOKEN_ERROR];

/// Empty payload: a bare `AT` ping
pub const PING: &str = "";

/// Report errors as text (`+CME ERROR: <text>`) instead of numeric codes
pub const VERBOSE_ERROR: &str = "+CMEE=2";

/// Restricted SIM access instruction for READ BINARY. The command reads at
/// offset 0 with length 0 (whole file).
pub const CRSM_READ_BINARY: u8 = 176;
pub const CRSM_TOKEN: &str = "+CRSM";

/// Read up to 250 entries out of the SIM phone book
pub const PHONEBOOK_READ: &str = "+CPBR=1,250";
/// Highest index `PHONEBOOK_READ` asks for
pub const PHONEBOOK_MAX_ENTRIES: usize = 250;
pub const PHONEBOOK_TOKEN: &str = "+CPBR";

/// Vendor command returning `KEY(VALUE);...` device information
pub const DEVCONINFO: &str = "+DEVCONINFO";
pub const DEVCONINFO_TOKEN: &str = "+DEVCONINFO";

/// Consecutive link failures during the ping loop before the USB side is
/// assumed to have dropped
pub const HANDSHAKE_MAX_FAILURES: usize = 9;

/// Status words for a successful READ BINARY (0x90 0x00)
pub const SW_SUCCESS: (u8, u8) = (144, 0);
