//! Async client for the LibreNMS v0 REST API.
//!
//! Covers the three operations portsync needs: device identity, the
//! port list for one device, and updating a port description.
//! Authentication is a static `X-Auth-Token` header installed at client
//! construction; every response carries a `status`/`message` envelope
//! beside its payload, which this crate strips before the caller sees it.

pub mod client;
pub mod devices;
pub mod error;
pub mod models;
pub mod ports;
pub mod transport;

pub use client::LnmsClient;
pub use error::Error;
pub use models::{DeviceInfo, PortRecord};
pub use transport::{TlsMode, TransportConfig};
