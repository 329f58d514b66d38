//! Clap derive structures for the `portsync` CLI.
//!
//! Defines the command tree, global flags, and shared types.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// portsync -- reconcile monitoring port descriptions with device labels
#[derive(Debug, Parser)]
#[command(
    name = "portsync",
    version,
    about = "Sync port descriptions between LibreNMS and ADVA optical devices",
    long_about = "Reconciles the port descriptions stored in a LibreNMS monitoring\n\
        system with the user labels configured on an ADVA AOS optical-transport\n\
        device, read live over NETCONF. Only differing descriptions are written\n\
        back; ambiguous interface names are reported, never guessed.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Configuration profile to use
    #[arg(long, short = 'p', env = "PORTSYNC_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Monitoring system base URL (overrides profile)
    #[arg(long, short = 'H', env = "PORTSYNC_HOST", global = true)]
    pub host: Option<String>,

    /// Monitoring API token
    #[arg(long, env = "PORTSYNC_TOKEN", global = true, hide_env = true)]
    pub token: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "PORTSYNC_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', env = "PORTSYNC_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds
    #[arg(long, env = "PORTSYNC_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output Enum ──────────────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Reconcile a device's labels into the monitoring system
    #[command(alias = "s")]
    Sync {
        /// Monitoring-system device id
        device_id: u64,

        /// Show what would change without writing anything
        #[arg(long, short = 'n')]
        dry_run: bool,
    },

    /// List the monitoring system's ports for a device
    Ports {
        /// Monitoring-system device id
        device_id: u64,
    },

    /// Show interfaces and labels as reported by the device
    #[command(alias = "if")]
    Interfaces {
        /// Monitoring-system device id
        device_id: u64,
    },

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create initial config file with guided setup
    Init,

    /// Display current configuration (secrets redacted)
    Show,

    /// Set a configuration value on the active profile
    Set {
        /// Config key (e.g. "host", "netconf_username")
        key: String,

        /// Value to set
        value: String,
    },

    /// List configured profiles
    Profiles,

    /// Set the default profile
    Use {
        /// Profile name to set as default
        name: String,
    },

    /// Store the monitoring API token in the system keyring
    SetToken {
        /// Profile name
        #[arg(long)]
        profile: Option<String>,
    },

    /// Store the NETCONF password in the system keyring
    SetPassword {
        /// Profile name
        #[arg(long)]
        profile: Option<String>,
    },
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
