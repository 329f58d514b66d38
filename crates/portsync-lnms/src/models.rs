// LibreNMS v0 API data models.
//
// Field names mirror the upstream JSON (camelCase for SNMP-derived
// columns, snake_case for database columns). The API is inconsistent
// about which optional fields appear per version, so everything not
// strictly required carries `#[serde(default)]`.

use serde::{Deserialize, Serialize};

// ── Payload models ──────────────────────────────────────────────────

/// Device identity as reported by `GET /api/v0/devices/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceInfo {
    /// Upstream `device_id`.
    pub device_id: u64,

    /// Address the monitoring system polls the device at.
    pub hostname: String,

    /// SNMP sysName (display name).
    #[serde(rename = "sysName", default)]
    pub sys_name: String,

    /// Detected operating system (e.g. `adva_aos`).
    #[serde(default)]
    pub os: String,
}

/// One row of `GET /api/v0/devices/{id}/ports`.
///
/// Only the three columns portsync asks for are modeled; `ifAlias` is
/// nullable upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortRecord {
    pub port_id: u64,

    #[serde(rename = "ifName")]
    pub if_name: String,

    #[serde(rename = "ifAlias", default)]
    pub if_alias: Option<String>,
}

// ── Response envelopes ──────────────────────────────────────────────
//
// Every v0 response carries `status` and (on errors and writes) a
// `message` beside the payload array. The client strips these before
// returning.

#[derive(Debug, Deserialize)]
pub(crate) struct DevicesResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub devices: Vec<DeviceInfo>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PortsResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub ports: Vec<PortRecord>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MessageResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}
