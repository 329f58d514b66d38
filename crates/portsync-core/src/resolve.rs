// ── Name resolution cascade ──
//
// Exact identity > known sub-port convention > heuristic containment.
// The cascade stops at the first strategy that produces a result and
// never silently picks among multiple equally-plausible fuzzy matches.

use tracing::warn;

use crate::index::PortIndex;
use crate::model::MatchOutcome;

/// Resolve one device-reported interface name against the index.
///
/// Strategy order, stop at first success:
///
/// 1. exact name match;
/// 2. `/eth` sub-port suffix match;
/// 3. substring containment — a single candidate is accepted as a
///    low-confidence match (traced at WARN), two or more become
///    [`MatchOutcome::Ambiguous`] for manual review.
pub fn resolve<'a>(name: &str, index: &'a PortIndex) -> MatchOutcome<'a> {
    if let Some(port) = index.by_exact_name(name) {
        return MatchOutcome::Matched(port);
    }

    if let Some(port) = index.by_eth_suffix(name) {
        return MatchOutcome::Matched(port);
    }

    let candidates = index.by_substring(name);
    match candidates.as_slice() {
        [] => {
            warn!(interface = name, "not known to inventory");
            MatchOutcome::NotFound
        }
        [port] => {
            warn!(interface = name, port = %port.name, "fuzzy match on interface name");
            MatchOutcome::Matched(port)
        }
        _ => MatchOutcome::Ambiguous(candidates),
    }
}
