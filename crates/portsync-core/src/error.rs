// ── Core error types ──
//
// The core has exactly one failure mode: malformed input. Unresolvable
// interfaces are NOT errors — they are a legitimate classification and
// travel through the run report instead.

use thiserror::Error;

/// Error type for the reconciliation core.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Input data violated a structural requirement (e.g. a port record
    /// with an empty name). Distinct from an unresolved interface, which
    /// is normal output.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },
}
