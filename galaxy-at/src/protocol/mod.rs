// galaxy-at-rs/galaxy-at/src/protocol/mod.rs

pub mod command;
pub mod crsm;
pub mod parser;
pub mod response;
pub mod session;

pub use command::AtCommand;
pub use crsm::{CrsmResponse, find_crsm_line, parse_crsm_line, read_ef, read_record};
pub use response::{AtResponse, ResponseStatus, classify_line};
pub use session::AtSession;
