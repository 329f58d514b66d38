//! Shared helpers for command handlers.

use portsync_core::DeviceInterface;
use portsync_lnms::DeviceInfo;
use portsync_netconf::{INTERFACE_SUBTREE_FILTER, NetconfSession, parse_interfaces};
use tracing::debug;

use crate::config::NetconfTarget;
use crate::error::CliError;

/// Device OS tag the reconciliation supports.
const SUPPORTED_OS: &str = "adva_aos";

/// Refuse devices the monitoring system does not detect as ADVA AOS.
pub fn ensure_supported(device: &DeviceInfo) -> Result<(), CliError> {
    if device.os == SUPPORTED_OS {
        Ok(())
    } else {
        Err(CliError::UnsupportedDevice {
            device_id: device.device_id,
            os: device.os.clone(),
        })
    }
}

/// Open a NETCONF session to `hostname`, read the facility interface
/// subtree, and parse it.
///
/// The ssh2 session is blocking, so the whole exchange runs on a
/// blocking worker thread.
pub async fn fetch_device_interfaces(
    hostname: String,
    target: NetconfTarget,
) -> Result<Vec<DeviceInterface>, CliError> {
    debug!(host = %hostname, port = target.port, "reading device interfaces");

    let interfaces = tokio::task::spawn_blocking(move || {
        let mut session =
            NetconfSession::connect(&hostname, target.port, &target.username, &target.password)?;
        let reply = session.get_config(INTERFACE_SUBTREE_FILTER)?;
        session.close()?;
        parse_interfaces(&reply)
    })
    .await
    .map_err(|e| CliError::Io(std::io::Error::other(e)))??;

    Ok(interfaces)
}

/// Prompt for confirmation, auto-approving if `--yes` was passed.
pub fn confirm(message: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    Ok(confirmed)
}
