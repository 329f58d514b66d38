//! CLI-owned configuration: TOML profiles and credential resolution.
//!
//! Client crates never see these types -- they receive pre-resolved
//! targets (URL + secret + transport settings).

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use portsync_lnms::{TlsMode, TransportConfig};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// Keyring service name for stored secrets.
pub const KEYRING_SERVICE: &str = "portsync";

pub const DEFAULT_NETCONF_PORT: u16 = 830;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

// ── TOML config structs ──────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Default profile name (used when --profile is not specified).
    pub default_profile: Option<String>,

    /// Named profiles, one per monitoring system / device estate.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            profiles: HashMap::new(),
        }
    }
}

/// One profile: monitoring endpoint plus NETCONF credentials.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Profile {
    /// Monitoring system base URL (e.g. "https://librenms.example.net").
    pub host: String,

    /// API token (plaintext -- prefer keyring or env var).
    pub api_token: Option<String>,

    /// Environment variable name containing the API token.
    pub api_token_env: Option<String>,

    /// SSH username for NETCONF sessions.
    pub netconf_username: Option<String>,

    /// SSH password for NETCONF (plaintext -- prefer keyring).
    pub netconf_password: Option<String>,

    /// NETCONF port on the device (default 830).
    pub netconf_port: Option<u16>,

    /// Path to custom CA certificate for the monitoring host.
    pub ca_cert: Option<PathBuf>,

    /// Accept self-signed certificates for the monitoring host.
    pub insecure: Option<bool>,

    /// Request timeout override in seconds.
    pub timeout: Option<u64>,
}

// ── Config file path ─────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "portsync", "portsync")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .unwrap_or_else(|| {
            let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
            p.push(".config");
            p.push("portsync");
            p.push("config.toml");
            p
        })
}

// ── Config loading / saving ──────────────────────────────────────────

/// Load the full Config from defaults + file + environment.
pub fn load_config() -> Result<Config, CliError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(config_path()))
        .merge(Env::prefixed("PORTSYNC_").split("_"));

    Ok(figment.extract()?)
}

/// Load config, returning a default if the file doesn't exist.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), CliError> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg).map_err(|e| CliError::Validation {
        field: "config".into(),
        reason: format!("failed to serialize config: {e}"),
    })?;
    std::fs::write(&path, toml_str)?;
    Ok(())
}

// ── Profile resolution ───────────────────────────────────────────────

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Everything needed to talk to the monitoring API.
pub struct MonitoringTarget {
    pub host: Url,
    pub token: SecretString,
    pub transport: TransportConfig,
}

/// Everything needed to open a NETCONF session (the hostname itself
/// comes from the monitoring system's device record).
pub struct NetconfTarget {
    pub username: String,
    pub password: SecretString,
    pub port: u16,
}

/// Resolve the monitoring endpoint from flags, env, config, and keyring.
pub fn resolve_monitoring(global: &GlobalOpts) -> Result<MonitoringTarget, CliError> {
    let cfg = load_config_or_default();
    let profile_name = active_profile_name(global, &cfg);
    let profile = cfg.profiles.get(&profile_name);

    // Host: flag/env > profile
    let host_str = global
        .host
        .as_deref()
        .or_else(|| profile.map(|p| p.host.as_str()).filter(|h| !h.is_empty()))
        .ok_or_else(|| CliError::NoConfig {
            path: config_path().display().to_string(),
        })?;
    let host: Url = host_str.parse().map_err(|_| CliError::Validation {
        field: "host".into(),
        reason: format!("invalid URL: {host_str}"),
    })?;

    let token = resolve_api_token(profile, &profile_name, global)?;

    let tls = if global.insecure || profile.and_then(|p| p.insecure).unwrap_or(false) {
        TlsMode::DangerAcceptInvalid
    } else if let Some(ca_path) = profile.and_then(|p| p.ca_cert.clone()) {
        TlsMode::CustomCa(ca_path)
    } else {
        TlsMode::System
    };

    let timeout_secs = global
        .timeout
        .or_else(|| profile.and_then(|p| p.timeout))
        .unwrap_or(DEFAULT_TIMEOUT_SECS);

    Ok(MonitoringTarget {
        host,
        token,
        transport: TransportConfig {
            tls,
            timeout: Duration::from_secs(timeout_secs),
        },
    })
}

/// Resolve NETCONF credentials, prompting interactively as a last resort.
pub fn resolve_netconf(global: &GlobalOpts) -> Result<NetconfTarget, CliError> {
    let cfg = load_config_or_default();
    let profile_name = active_profile_name(global, &cfg);
    let profile = cfg.profiles.get(&profile_name);

    let username = match profile.and_then(|p| p.netconf_username.clone()) {
        Some(user) => user,
        None => dialoguer::Input::new()
            .with_prompt("NETCONF username")
            .interact_text()
            .map_err(prompt_err)?,
    };

    let password = resolve_netconf_password(profile, &profile_name)?;

    let port = profile
        .and_then(|p| p.netconf_port)
        .unwrap_or(DEFAULT_NETCONF_PORT);

    Ok(NetconfTarget {
        username,
        password,
        port,
    })
}

// ── Credential helpers ───────────────────────────────────────────────

/// Resolve the API token from the credential chain:
/// flag > profile env var > keyring > plaintext config.
fn resolve_api_token(
    profile: Option<&Profile>,
    profile_name: &str,
    global: &GlobalOpts,
) -> Result<SecretString, CliError> {
    if let Some(ref token) = global.token {
        return Ok(SecretString::from(token.clone()));
    }

    if let Some(env_name) = profile.and_then(|p| p.api_token_env.as_deref()) {
        if let Ok(val) = std::env::var(env_name) {
            return Ok(SecretString::from(val));
        }
    }

    if let Ok(entry) = keyring::Entry::new(KEYRING_SERVICE, &format!("{profile_name}/api-token")) {
        if let Ok(secret) = entry.get_password() {
            return Ok(SecretString::from(secret));
        }
    }

    if let Some(token) = profile.and_then(|p| p.api_token.clone()) {
        return Ok(SecretString::from(token));
    }

    Err(CliError::NoCredentials {
        profile: profile_name.into(),
    })
}

/// Resolve the NETCONF password: env var > keyring > plaintext > prompt.
fn resolve_netconf_password(
    profile: Option<&Profile>,
    profile_name: &str,
) -> Result<SecretString, CliError> {
    if let Ok(pw) = std::env::var("PORTSYNC_NETCONF_PASSWORD") {
        return Ok(SecretString::from(pw));
    }

    if let Ok(entry) =
        keyring::Entry::new(KEYRING_SERVICE, &format!("{profile_name}/netconf-password"))
    {
        if let Ok(pw) = entry.get_password() {
            return Ok(SecretString::from(pw));
        }
    }

    if let Some(pw) = profile.and_then(|p| p.netconf_password.clone()) {
        return Ok(SecretString::from(pw));
    }

    let pw = rpassword::prompt_password("NETCONF password: ").map_err(prompt_err)?;
    Ok(SecretString::from(pw))
}

/// Map a dialoguer / interactive I/O failure into CliError.
pub fn prompt_err(e: impl std::fmt::Display) -> CliError {
    CliError::Validation {
        field: "interactive".into(),
        reason: format!("prompt failed: {e}"),
    }
}
