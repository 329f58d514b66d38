//! CLI error types with miette diagnostics.
//!
//! Maps client-crate errors into user-facing errors with actionable help
//! text and stable exit codes.

use miette::Diagnostic;
use thiserror::Error;

/// Exit codes for process termination.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const UNSUPPORTED: i32 = 5;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
    pub const PARTIAL: i32 = 9;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────

    #[error("Could not connect to {target}")]
    #[diagnostic(
        code(portsync::connection_failed),
        help("Check that {target} is reachable from this host.")
    )]
    ConnectionFailed {
        target: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("TLS error: {reason}")]
    #[diagnostic(
        code(portsync::tls_error),
        help(
            "The monitoring host may be using a self-signed certificate.\n\
             Use --insecure (-k) to accept it, or configure ca_cert in your profile."
        )
    )]
    TlsError { reason: String },

    #[error("Request timed out")]
    #[diagnostic(
        code(portsync::timeout),
        help("Increase the timeout with --timeout or check host responsiveness.")
    )]
    Timeout,

    // ── Authentication ───────────────────────────────────────────────

    #[error("Authentication against {target} failed")]
    #[diagnostic(
        code(portsync::auth_failed),
        help(
            "Verify your credentials.\n\
             Monitoring token: portsync config set-token\n\
             NETCONF password: portsync config set-password"
        )
    )]
    AuthFailed { target: String },

    #[error("No credentials configured for profile '{profile}'")]
    #[diagnostic(
        code(portsync::no_credentials),
        help(
            "Configure credentials with: portsync config init\n\
             Or set the PORTSYNC_TOKEN environment variable."
        )
    )]
    NoCredentials { profile: String },

    // ── Resources ────────────────────────────────────────────────────

    #[error("Not found: {what}")]
    #[diagnostic(
        code(portsync::not_found),
        help("Check the device id against the monitoring system's inventory.")
    )]
    NotFound { what: String },

    #[error("Device {device_id} runs '{os}', not an ADVA AOS system")]
    #[diagnostic(
        code(portsync::unsupported_device),
        help("portsync only reconciles labels from devices detected as 'adva_aos'.")
    )]
    UnsupportedDevice { device_id: u64, os: String },

    // ── Remote failures ──────────────────────────────────────────────

    #[error("Monitoring API error: {message}")]
    #[diagnostic(code(portsync::api_error))]
    Api { message: String },

    #[error("Device protocol error: {message}")]
    #[diagnostic(code(portsync::protocol_error))]
    Protocol { message: String },

    #[error("{failed} of {attempted} description update(s) failed")]
    #[diagnostic(
        code(portsync::partial_update),
        help("Each failure was logged; re-run `portsync sync` to retry the remainder.")
    )]
    PartialUpdate { failed: usize, attempted: usize },

    // ── Validation ───────────────────────────────────────────────────

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(portsync::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────

    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(portsync::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: portsync config init"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error("Configuration file not found")]
    #[diagnostic(
        code(portsync::no_config),
        help(
            "Create one with: portsync config init\n\
             Expected at: {path}"
        )
    )]
    NoConfig { path: String },

    #[error(transparent)]
    #[diagnostic(code(portsync::config))]
    Config(Box<figment::Error>),

    // ── IO ───────────────────────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for CliError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } | Self::TlsError { .. } => exit_code::CONNECTION,
            Self::AuthFailed { .. } | Self::NoCredentials { .. } => exit_code::AUTH,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::UnsupportedDevice { .. } => exit_code::UNSUPPORTED,
            Self::Timeout => exit_code::TIMEOUT,
            Self::PartialUpdate { .. } => exit_code::PARTIAL,
            Self::Validation { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── Client-crate error mappings ──────────────────────────────────────

impl From<portsync_lnms::Error> for CliError {
    fn from(err: portsync_lnms::Error) -> Self {
        use portsync_lnms::Error as Lnms;
        match err {
            Lnms::Authentication | Lnms::InvalidToken(_) => Self::AuthFailed {
                target: "the monitoring API".into(),
            },
            Lnms::Transport(e) if e.is_timeout() => Self::Timeout,
            Lnms::Transport(e) => Self::ConnectionFailed {
                target: "the monitoring system".into(),
                source: Box::new(e),
            },
            Lnms::InvalidUrl(e) => Self::Validation {
                field: "host".into(),
                reason: e.to_string(),
            },
            Lnms::Tls(reason) => Self::TlsError { reason },
            Lnms::NotFound { url } => Self::NotFound { what: url },
            Lnms::Api { message } => Self::Api { message },
            Lnms::Deserialization { message, .. } => Self::Api {
                message: format!("unexpected response shape: {message}"),
            },
        }
    }
}

impl From<portsync_netconf::Error> for CliError {
    fn from(err: portsync_netconf::Error) -> Self {
        use portsync_netconf::Error as Netconf;
        match err {
            Netconf::Connect(e) if e.kind() == std::io::ErrorKind::TimedOut => Self::Timeout,
            Netconf::Connect(e) => Self::ConnectionFailed {
                target: "the device's NETCONF port".into(),
                source: Box::new(e),
            },
            Netconf::Ssh(e) => Self::ConnectionFailed {
                target: "the device's NETCONF subsystem".into(),
                source: Box::new(e),
            },
            Netconf::Auth => Self::AuthFailed {
                target: "the device over SSH".into(),
            },
            Netconf::Frame { reason } | Netconf::Xml { reason } => {
                Self::Protocol { message: reason }
            }
            Netconf::Rpc { tag, message } => Self::Protocol {
                message: format!("{tag}: {message}"),
            },
        }
    }
}

impl From<portsync_core::CoreError> for CliError {
    fn from(err: portsync_core::CoreError) -> Self {
        match err {
            portsync_core::CoreError::InvalidInput { reason } => Self::Validation {
                field: "inventory".into(),
                reason,
            },
        }
    }
}
