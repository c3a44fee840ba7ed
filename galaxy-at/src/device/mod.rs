// galaxy-at-rs/galaxy-at/src/device/mod.rs

pub mod builder;
pub mod handle;
pub mod mode_switch;
pub mod port;

pub use builder::ModemBuilder;
pub use handle::{Disconnected, Modem, Ready};
pub use mode_switch::{locate, reconfigure};
pub use port::{wait_for_port, wait_for_port_with};
