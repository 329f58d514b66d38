//! Minimal blocking NETCONF client for ADVA AOS optical devices.
//!
//! Enough protocol to issue one `<get-config>` over the SSH `netconf`
//! subsystem with RFC 6242 end-of-message framing, plus the structured
//! parser that turns the facility subtree of the reply into
//! [`portsync_core::DeviceInterface`] records. Everything here is
//! blocking; async callers drive it via `spawn_blocking`.

pub mod error;
pub mod frame;
pub mod parse;
pub mod session;

pub use error::Error;
pub use parse::parse_interfaces;
pub use session::NetconfSession;

/// ADVA AOS facility namespace (interface names and user labels).
pub const FACILITY_NS: &str = "http://www.advaoptical.com/aos/netconf/aos-core-facility";

/// ADVA AOS managed-element namespace (the subtree root).
pub const MANAGED_ELEMENT_NS: &str =
    "http://www.advaoptical.com/aos/netconf/aos-core-managed-element";

/// Subtree filter selecting every facility interface of the managed element.
pub const INTERFACE_SUBTREE_FILTER: &str = "<managed-element><interface/></managed-element>";
