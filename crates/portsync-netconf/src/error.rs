use thiserror::Error;

/// Top-level error type for the `portsync-netconf` crate.
#[derive(Debug, Error)]
pub enum Error {
    /// TCP connection to the device failed.
    #[error("Connection failed: {0}")]
    Connect(#[from] std::io::Error),

    /// SSH transport or channel error.
    #[error("SSH error: {0}")]
    Ssh(#[from] ssh2::Error),

    /// The device rejected the SSH credentials.
    #[error("NETCONF authentication failed")]
    Auth,

    /// RFC 6242 framing violation (truncated frame, invalid UTF-8).
    #[error("Framing error: {reason}")]
    Frame { reason: String },

    /// The device answered with an `<rpc-error>`.
    #[error("RPC error ({tag}): {message}")]
    Rpc { tag: String, message: String },

    /// Reply XML could not be parsed.
    #[error("XML error: {reason}")]
    Xml { reason: String },
}
