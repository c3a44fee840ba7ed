// galaxy-at-rs/galaxy-at/src/lib.rs

//! galaxy-at
//!
//! Pure Rust AT command link for Samsung Galaxy handsets: switches the phone
//! into its modem USB configuration, runs an AT session over the ACM serial
//! node and decodes SIM elementary files read with `+CRSM`.
#![warn(missing_docs)]

pub mod config;
pub mod constants;
pub mod device;
pub mod error;
pub mod info;
pub mod prelude;
pub mod protocol;
pub mod sim;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
