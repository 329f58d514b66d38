//! The sync command: one full reconciliation run against a device.

use portsync_core::{Port, PortIndex, RunReport, reconcile_all};
use portsync_lnms::LnmsClient;
use tabled::Tabled;
use tracing::{info, warn};

use crate::cli::{GlobalOpts, OutputFormat};
use crate::config;
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct UpdateRow {
    #[tabled(rename = "Port")]
    port: String,
    #[tabled(rename = "Current description")]
    current: String,
    #[tabled(rename = "Device label")]
    label: String,
}

#[derive(Tabled)]
struct UnresolvedRow {
    #[tabled(rename = "Interface")]
    interface: String,
    #[tabled(rename = "Candidates")]
    candidates: String,
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(device_id: u64, dry_run: bool, global: &GlobalOpts) -> Result<(), CliError> {
    let target = config::resolve_monitoring(global)?;
    let client = LnmsClient::new(target.host, &target.token, &target.transport)?;

    // Identify the device and refuse anything that isn't ADVA AOS.
    let device = client.get_device(device_id).await?;
    util::ensure_supported(&device)?;
    info!(hostname = %device.hostname, sys_name = %device.sys_name, "device verified");

    // Monitoring side: ports become the resolution index.
    let records = client.list_ports(device_id).await?;
    let ports: Vec<Port> = records
        .iter()
        .map(|r| {
            Port::new(
                r.port_id,
                r.if_name.clone(),
                r.if_alias.clone().unwrap_or_default(),
            )
        })
        .collect();
    let index = PortIndex::from_ports(ports)?;

    // Device side: live labels over NETCONF.
    let netconf_target = config::resolve_netconf(global)?;
    let interfaces = util::fetch_device_interfaces(device.hostname.clone(), netconf_target).await?;

    let report = reconcile_all(&interfaces, &index);
    output::print_output(&render_report(&global.output, &report), global.quiet);

    if report.to_update.is_empty() {
        output::print_output("Nothing to update.", global.quiet);
        return Ok(());
    }
    if dry_run {
        return Ok(());
    }

    let prompt = format!(
        "Apply {} description update(s) to the monitoring system?",
        report.to_update.len()
    );
    if !util::confirm(&prompt, global.yes)? {
        return Ok(());
    }

    apply_updates(&client, &report).await
}

/// Write every pending update, continuing past individual failures.
async fn apply_updates(client: &LnmsClient, report: &RunReport) -> Result<(), CliError> {
    let mut failed = 0usize;

    for entry in &report.to_update {
        match client
            .update_port_description(entry.port_id.0, &entry.new_label)
            .await
        {
            Ok(message) => info!(port = %entry.port_name, "{message}"),
            Err(err) => {
                warn!(port = %entry.port_name, error = %err, "description update failed");
                failed += 1;
            }
        }
    }

    if failed > 0 {
        return Err(CliError::PartialUpdate {
            failed,
            attempted: report.to_update.len(),
        });
    }
    Ok(())
}

// ── Report rendering ────────────────────────────────────────────────

fn render_report(format: &OutputFormat, report: &RunReport) -> String {
    match format {
        OutputFormat::Table => render_report_tables(report),
        OutputFormat::Json => {
            serde_json::to_string_pretty(report).expect("serialization should not fail")
        }
        OutputFormat::JsonCompact => {
            serde_json::to_string(report).expect("serialization should not fail")
        }
        OutputFormat::Yaml => output::render_yaml(report),
        // One pending update per line, machine-friendly.
        OutputFormat::Plain => report
            .to_update
            .iter()
            .map(|e| format!("{}\t{}\t{}", e.port_name, e.old_label, e.new_label))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

fn render_report_tables(report: &RunReport) -> String {
    let mut sections = Vec::new();

    if !report.to_update.is_empty() {
        let rows: Vec<UpdateRow> = report
            .to_update
            .iter()
            .map(|e| UpdateRow {
                port: e.port_name.clone(),
                current: e.old_label.clone(),
                label: e.new_label.clone(),
            })
            .collect();
        sections.push(format!("Pending updates:\n{}", output::render_table(&rows)));
    }

    if !report.unresolved.is_empty() {
        let rows: Vec<UnresolvedRow> = report
            .unresolved
            .iter()
            .map(|e| UnresolvedRow {
                interface: e.interface_name.clone(),
                candidates: if e.candidates.is_empty() {
                    "(none)".into()
                } else {
                    e.candidates.join(", ")
                },
            })
            .collect();
        sections.push(format!(
            "Unresolved interfaces:\n{}",
            output::render_table(&rows)
        ));
    }

    sections.push(format!(
        "{} up to date, {} to update, {} unresolved",
        report.no_change.len(),
        report.to_update.len(),
        report.unresolved.len()
    ));

    sections.join("\n\n")
}
