//! Show the interfaces and user labels a device reports over NETCONF.
//!
//! Debugging aid for the name-resolution cascade: what the device says,
//! before any matching against the monitoring inventory.

use portsync_lnms::LnmsClient;
use tabled::Tabled;

use crate::cli::GlobalOpts;
use crate::config;
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct InterfaceRow {
    #[tabled(rename = "Interface")]
    name: String,
    #[tabled(rename = "Labels")]
    labels: String,
}

pub async fn handle(device_id: u64, global: &GlobalOpts) -> Result<(), CliError> {
    let target = config::resolve_monitoring(global)?;
    let client = LnmsClient::new(target.host, &target.token, &target.transport)?;

    let device = client.get_device(device_id).await?;
    util::ensure_supported(&device)?;

    let netconf_target = config::resolve_netconf(global)?;
    let interfaces = util::fetch_device_interfaces(device.hostname, netconf_target).await?;

    let out = output::render_list(
        &global.output,
        &interfaces,
        |i| InterfaceRow {
            name: i.name.clone().unwrap_or_else(|| "(unnamed)".into()),
            labels: i.labels.join(", "),
        },
        |i| i.name.clone().unwrap_or_default(),
    );
    output::print_output(&out, global.quiet);
    Ok(())
}
