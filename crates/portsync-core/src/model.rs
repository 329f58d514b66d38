// ── Core data model ──
//
// Plain-data inputs and outcomes of one reconciliation run. Ports come
// from the monitoring inventory, interfaces from the device's parsed
// configuration tree; both are read-only for the duration of a run.

use serde::{Deserialize, Serialize};
use std::fmt;

// ── PortId ──────────────────────────────────────────────────────────

/// Opaque monitoring-system port identifier.
///
/// LibreNMS hands these out as integers; the core never interprets the
/// value, it only carries it back out so the caller can address the
/// update endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PortId(pub u64);

impl fmt::Display for PortId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for PortId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

// ── Port ────────────────────────────────────────────────────────────

/// A monitored port as the inventory knows it.
///
/// `name` is assumed unique within one device; `alias` is the stored
/// human-readable description and may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Port {
    pub id: PortId,
    pub name: String,
    #[serde(default)]
    pub alias: String,
}

impl Port {
    pub fn new(id: impl Into<PortId>, name: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            alias: alias.into(),
        }
    }
}

// ── DeviceInterface ─────────────────────────────────────────────────

/// One facility interface as reported by the device.
///
/// `name` is absent for some entries (a known device quirk — nameless
/// entries are dropped by the run, not treated as errors). `labels`
/// holds the user-label of every facility sub-record nested under the
/// interface, in document order; entries may be empty or whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceInterface {
    pub name: Option<String>,
    #[serde(default)]
    pub labels: Vec<String>,
}

impl DeviceInterface {
    pub fn new(name: Option<String>, labels: Vec<String>) -> Self {
        Self { name, labels }
    }
}

// ── MatchOutcome ────────────────────────────────────────────────────

/// Result of resolving one device-reported name against the index.
///
/// Exactly one variant holds per resolution attempt. `Ambiguous`
/// preserves candidate order from the inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome<'a> {
    /// A single port matched (exact, suffix, or lone fuzzy candidate).
    Matched(&'a Port),
    /// Two or more substring candidates; the core never guesses among them.
    Ambiguous(Vec<&'a Port>),
    /// No strategy produced a candidate.
    NotFound,
}

// ── ReconciliationAction ────────────────────────────────────────────

/// Classification of one (port, label) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconciliationAction {
    /// Device label is empty after trimming — nothing to do.
    Skip,
    /// Device label already matches the stored alias exactly.
    NoChange {
        port_id: PortId,
        port_name: String,
        label: String,
    },
    /// Device label differs — the inventory alias should be updated.
    Update {
        port_id: PortId,
        port_name: String,
        old_label: String,
        new_label: String,
    },
}
