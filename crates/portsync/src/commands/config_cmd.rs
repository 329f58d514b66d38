//! Config subcommand handlers.

use std::collections::HashMap;

use dialoguer::{Input, Select};

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::{self, Config, KEYRING_SERVICE, Profile};
use crate::error::CliError;
use crate::output;

// ── Helpers ─────────────────────────────────────────────────────────

fn keyring_err(e: impl std::fmt::Display) -> CliError {
    CliError::Validation {
        field: "keyring".into(),
        reason: format!("keyring access failed: {e}"),
    }
}

/// Store a secret in the system keyring under `{profile}/{slot}`.
fn store_secret(profile_name: &str, slot: &str, secret: &str) -> Result<(), CliError> {
    let entry = keyring::Entry::new(KEYRING_SERVICE, &format!("{profile_name}/{slot}"))
        .map_err(keyring_err)?;
    entry.set_password(secret).map_err(keyring_err)?;
    Ok(())
}

fn profile_not_found(name: String, cfg: &Config) -> CliError {
    let available: Vec<_> = cfg.profiles.keys().cloned().collect();
    CliError::ProfileNotFound {
        name,
        available: if available.is_empty() {
            "(none)".into()
        } else {
            available.join(", ")
        },
    }
}

/// Copy of the config with secret fields masked for display.
fn redacted(cfg: &Config) -> Config {
    let mut out = cfg.clone();
    for profile in out.profiles.values_mut() {
        if profile.api_token.is_some() {
            profile.api_token = Some("<redacted>".into());
        }
        if profile.netconf_password.is_some() {
            profile.netconf_password = Some("<redacted>".into());
        }
    }
    out
}

// ── Handler ─────────────────────────────────────────────────────────

#[allow(clippy::too_many_lines)]
pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        // ── Init: interactive wizard ────────────────────────────────
        ConfigCommand::Init => {
            let config_path = config::config_path();
            eprintln!("portsync — configuration wizard");
            eprintln!("  Config path: {}\n", config_path.display());

            let profile_name: String = Input::new()
                .with_prompt("Profile name")
                .default("default".into())
                .interact_text()
                .map_err(config::prompt_err)?;

            let host: String = Input::new()
                .with_prompt("Monitoring system URL")
                .default("https://librenms.example.net".into())
                .interact_text()
                .map_err(config::prompt_err)?;

            // Monitoring API token
            let token = rpassword::prompt_password("API token: ").map_err(config::prompt_err)?;
            if token.is_empty() {
                return Err(CliError::Validation {
                    field: "api_token".into(),
                    reason: "API token cannot be empty".into(),
                });
            }
            let api_token = store_or_plaintext(&profile_name, "api-token", &token)?;

            // NETCONF credentials
            let netconf_username: String = Input::new()
                .with_prompt("NETCONF username")
                .interact_text()
                .map_err(config::prompt_err)?;

            let password =
                rpassword::prompt_password("NETCONF password: ").map_err(config::prompt_err)?;
            let netconf_password = if password.is_empty() {
                eprintln!("  (no password stored; you will be prompted per run)");
                None
            } else {
                store_or_plaintext(&profile_name, "netconf-password", &password)?
            };

            let port: u16 = Input::new()
                .with_prompt("NETCONF port")
                .default(config::DEFAULT_NETCONF_PORT)
                .interact_text()
                .map_err(config::prompt_err)?;

            let profile = Profile {
                host,
                api_token,
                api_token_env: None,
                netconf_username: Some(netconf_username),
                netconf_password,
                netconf_port: Some(port),
                ca_cert: None,
                insecure: None,
                timeout: None,
            };

            let mut profiles = HashMap::new();
            profiles.insert(profile_name.clone(), profile);

            let cfg = Config {
                default_profile: Some(profile_name.clone()),
                profiles,
            };
            config::save_config(&cfg)?;

            eprintln!("\nConfiguration written to {}", config_path.display());
            eprintln!("  Active profile: {profile_name}");
            eprintln!("\n  Test it: portsync ports <DEVICE_ID>");
            Ok(())
        }

        // ── Show ────────────────────────────────────────────────────
        ConfigCommand::Show => {
            let cfg = redacted(&config::load_config_or_default());
            let out = output::render_single(
                &global.output,
                &cfg,
                |c| format!("{c:#?}"),
                |_| "config".into(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        // ── Set <key> <value> ───────────────────────────────────────
        ConfigCommand::Set { key, value } => {
            let mut cfg = config::load_config_or_default();
            let profile_name = config::active_profile_name(global, &cfg);
            let profile = cfg.profiles.entry(profile_name.clone()).or_default();

            match key.as_str() {
                "host" => profile.host = value,
                "api_token" | "api-token" => profile.api_token = Some(value),
                "api_token_env" | "api-token-env" => profile.api_token_env = Some(value),
                "netconf_username" | "netconf-username" => {
                    profile.netconf_username = Some(value);
                }
                "netconf_port" | "netconf-port" => {
                    profile.netconf_port =
                        Some(value.parse().map_err(|_| CliError::Validation {
                            field: "netconf_port".into(),
                            reason: "must be a port number".into(),
                        })?);
                }
                "insecure" => {
                    profile.insecure = Some(value.parse().map_err(|_| CliError::Validation {
                        field: "insecure".into(),
                        reason: "must be 'true' or 'false'".into(),
                    })?);
                }
                "timeout" => {
                    profile.timeout = Some(value.parse().map_err(|_| CliError::Validation {
                        field: "timeout".into(),
                        reason: "must be a number (seconds)".into(),
                    })?);
                }
                "ca_cert" | "ca-cert" => profile.ca_cert = Some(value.into()),
                other => {
                    return Err(CliError::Validation {
                        field: other.into(),
                        reason: format!(
                            "unknown config key '{other}'. Valid keys: host, api_token, \
                             api_token_env, netconf_username, netconf_port, insecure, \
                             timeout, ca_cert"
                        ),
                    });
                }
            }

            config::save_config(&cfg)?;
            eprintln!("Set {key} on profile '{profile_name}'");
            Ok(())
        }

        // ── Profiles ────────────────────────────────────────────────
        ConfigCommand::Profiles => {
            let cfg = config::load_config_or_default();
            let default = cfg.default_profile.as_deref().unwrap_or("default");
            if cfg.profiles.is_empty() {
                eprintln!("No profiles configured. Run: portsync config init");
            } else {
                for name in cfg.profiles.keys() {
                    let marker = if name == default { " *" } else { "" };
                    println!("{name}{marker}");
                }
            }
            Ok(())
        }

        // ── Use <name> ──────────────────────────────────────────────
        ConfigCommand::Use { name } => {
            let mut cfg = config::load_config_or_default();
            if !cfg.profiles.contains_key(&name) {
                return Err(profile_not_found(name, &cfg));
            }
            cfg.default_profile = Some(name.clone());
            config::save_config(&cfg)?;
            eprintln!("Default profile set to '{name}'");
            Ok(())
        }

        // ── SetToken / SetPassword ──────────────────────────────────
        ConfigCommand::SetToken { profile } => {
            set_keyring_secret(global, profile, "api-token", "API token: ")
        }
        ConfigCommand::SetPassword { profile } => {
            set_keyring_secret(global, profile, "netconf-password", "NETCONF password: ")
        }
    }
}

/// Ask where to keep a freshly entered secret; returns the value to put
/// in the config file (None when it went to the keyring).
fn store_or_plaintext(
    profile_name: &str,
    slot: &str,
    secret: &str,
) -> Result<Option<String>, CliError> {
    let choices = &[
        "Store in system keyring (recommended)",
        "Save to config file (plaintext)",
    ];
    let selection = Select::new()
        .with_prompt("Where to store it?")
        .items(choices)
        .default(0)
        .interact()
        .map_err(config::prompt_err)?;

    if selection == 0 {
        store_secret(profile_name, slot, secret)?;
        eprintln!("  Stored in system keyring");
        Ok(None)
    } else {
        Ok(Some(secret.to_owned()))
    }
}

/// Prompt for a secret and store it in the keyring for a profile.
fn set_keyring_secret(
    global: &GlobalOpts,
    profile: Option<String>,
    slot: &str,
    prompt: &str,
) -> Result<(), CliError> {
    let cfg = config::load_config_or_default();
    let profile_name = profile.unwrap_or_else(|| config::active_profile_name(global, &cfg));

    if !cfg.profiles.contains_key(&profile_name) {
        return Err(profile_not_found(profile_name, &cfg));
    }

    let secret = rpassword::prompt_password(prompt).map_err(config::prompt_err)?;
    if secret.is_empty() {
        return Err(CliError::Validation {
            field: "secret".into(),
            reason: "value cannot be empty".into(),
        });
    }

    store_secret(&profile_name, slot, &secret)?;
    eprintln!("Secret stored in system keyring for profile '{profile_name}'");
    Ok(())
}
