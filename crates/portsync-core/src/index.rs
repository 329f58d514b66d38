// ── Port index ──
//
// Immutable in-memory index over the monitoring system's port list for
// one device. Validation happens once at construction; every query is
// infallible afterwards.

use crate::error::CoreError;
use crate::model::Port;

/// Suffix the device uses for the monitored Ethernet sub-port of a
/// logical facility (`"1/1"` → `"1/1/eth"`).
pub const ETH_SUFFIX: &str = "/eth";

/// Read-only index of one device's monitored ports.
///
/// Port names are assumed unique within a device. If the inventory
/// nonetheless contains duplicates, every query returns the first match
/// in input order — that order is preserved from construction and never
/// re-sorted.
#[derive(Debug, Clone)]
pub struct PortIndex {
    ports: Vec<Port>,
}

impl PortIndex {
    /// Build an index from the inventory's port list.
    ///
    /// Fails fast with [`CoreError::InvalidInput`] when a record is
    /// missing its name — a nameless port can never be matched and
    /// indicates a malformed inventory response rather than a normal
    /// unresolved outcome.
    pub fn from_ports(ports: Vec<Port>) -> Result<Self, CoreError> {
        for (i, port) in ports.iter().enumerate() {
            if port.name.is_empty() {
                return Err(CoreError::InvalidInput {
                    reason: format!("port record {i} (id {}) has an empty name", port.id),
                });
            }
        }
        Ok(Self { ports })
    }

    /// Number of indexed ports.
    pub fn len(&self) -> usize {
        self.ports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ports.is_empty()
    }

    /// All indexed ports, in input order.
    pub fn ports(&self) -> &[Port] {
        &self.ports
    }

    /// The port whose name equals `name` exactly.
    pub fn by_exact_name(&self, name: &str) -> Option<&Port> {
        self.ports.iter().find(|p| p.name == name)
    }

    /// The port whose name is `name` plus the `/eth` sub-port suffix.
    ///
    /// The device often reports a logical facility name whose monitored
    /// counterpart is the Ethernet child port.
    pub fn by_eth_suffix(&self, name: &str) -> Option<&Port> {
        self.ports
            .iter()
            .find(|p| p.name.len() == name.len() + ETH_SUFFIX.len()
                && p.name.starts_with(name)
                && p.name.ends_with(ETH_SUFFIX))
    }

    /// Every port whose name contains `name` as a substring, in input
    /// order.
    ///
    /// Last-resort heuristic — callers must check cardinality before
    /// trusting a result. An empty `name` yields an empty list, never
    /// "matches everything".
    pub fn by_substring(&self, name: &str) -> Vec<&Port> {
        if name.is_empty() {
            return Vec::new();
        }
        self.ports.iter().filter(|p| p.name.contains(name)).collect()
    }
}
