//! Pure reconciliation core for portsync.
//!
//! Matches device-reported interface names against a monitoring inventory
//! and classifies each labeled interface as no-change, update, or
//! unresolved. The core performs no I/O — callers supply a port list and
//! a parsed interface tree, and consume the resulting action lists.

pub mod error;
pub mod index;
pub mod model;
pub mod reconcile;
pub mod resolve;
pub mod run;

pub use error::CoreError;
pub use index::PortIndex;
pub use model::{DeviceInterface, MatchOutcome, Port, PortId, ReconciliationAction};
pub use reconcile::classify;
pub use resolve::resolve;
pub use run::{NoChangeEntry, RunReport, UnresolvedEntry, UpdateEntry, reconcile_all};
