//! List a device's ports as known to the monitoring system.

use portsync_lnms::LnmsClient;
use tabled::Tabled;

use crate::cli::GlobalOpts;
use crate::config;
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct PortRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Description")]
    description: String,
}

pub async fn handle(device_id: u64, global: &GlobalOpts) -> Result<(), CliError> {
    let target = config::resolve_monitoring(global)?;
    let client = LnmsClient::new(target.host, &target.token, &target.transport)?;

    let records = client.list_ports(device_id).await?;

    let out = output::render_list(
        &global.output,
        &records,
        |r| PortRow {
            id: r.port_id,
            name: r.if_name.clone(),
            description: r.if_alias.clone().unwrap_or_default(),
        },
        |r| r.if_name.clone(),
    );
    output::print_output(&out, global.quiet);
    Ok(())
}
