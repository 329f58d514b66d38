//! Command handlers: bridge CLI args to the client crates and output.

pub mod config_cmd;
pub mod interfaces;
pub mod ports;
pub mod sync;
pub mod util;
