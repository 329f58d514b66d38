// ── Reconciliation run ──
//
// A pure fold over the device's interface list: resolve each name, then
// classify every nested label. Output lists are typed per variant so
// the partition is enforced by construction, and input order is
// preserved within each list.

use serde::Serialize;
use tracing::debug;

use crate::index::PortIndex;
use crate::model::{DeviceInterface, MatchOutcome, PortId, ReconciliationAction};
use crate::reconcile::classify;
use crate::resolve::resolve;

/// A (port, label) pair whose stored alias already matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoChangeEntry {
    pub port_id: PortId,
    pub port_name: String,
    pub label: String,
}

/// A (port, label) pair whose alias should be updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateEntry {
    pub port_id: PortId,
    pub port_name: String,
    pub old_label: String,
    pub new_label: String,
}

/// An interface whose name could not be resolved to a single port.
///
/// `candidates` holds the names of any ambiguous substring matches, in
/// inventory order; it is empty when resolution found nothing at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnresolvedEntry {
    pub interface_name: String,
    pub candidates: Vec<String>,
}

/// The three partitioned outcomes of one reconciliation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub no_change: Vec<NoChangeEntry>,
    pub to_update: Vec<UpdateEntry>,
    pub unresolved: Vec<UnresolvedEntry>,
}

impl RunReport {
    /// True when no list holds any entry.
    pub fn is_empty(&self) -> bool {
        self.no_change.is_empty() && self.to_update.is_empty() && self.unresolved.is_empty()
    }
}

/// Reconcile every device-reported interface against the port index.
///
/// Interfaces without a name are dropped (a known device quirk, traced
/// at DEBUG, never surfaced as unresolved). For each resolved interface
/// every nested label is classified independently; `Skip` results are
/// appended nowhere. The run holds no state across interfaces and is
/// deterministic for fixed inputs.
pub fn reconcile_all(interfaces: &[DeviceInterface], index: &PortIndex) -> RunReport {
    let mut report = RunReport::default();

    for interface in interfaces {
        let Some(name) = interface.name.as_deref() else {
            debug!("dropping nameless interface entry");
            continue;
        };

        let port = match resolve(name, index) {
            MatchOutcome::Matched(port) => port,
            MatchOutcome::Ambiguous(candidates) => {
                report.unresolved.push(UnresolvedEntry {
                    interface_name: name.to_owned(),
                    candidates: candidates.iter().map(|p| p.name.clone()).collect(),
                });
                continue;
            }
            MatchOutcome::NotFound => {
                report.unresolved.push(UnresolvedEntry {
                    interface_name: name.to_owned(),
                    candidates: Vec::new(),
                });
                continue;
            }
        };

        for raw_label in &interface.labels {
            match classify(port, raw_label) {
                ReconciliationAction::Skip => {}
                ReconciliationAction::NoChange {
                    port_id,
                    port_name,
                    label,
                } => report.no_change.push(NoChangeEntry {
                    port_id,
                    port_name,
                    label,
                }),
                ReconciliationAction::Update {
                    port_id,
                    port_name,
                    old_label,
                    new_label,
                } => report.to_update.push(UpdateEntry {
                    port_id,
                    port_name,
                    old_label,
                    new_label,
                }),
            }
        }
    }

    report
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::Port;

    fn index(ports: &[(u64, &str, &str)]) -> PortIndex {
        PortIndex::from_ports(
            ports
                .iter()
                .map(|(id, name, alias)| Port::new(*id, *name, *alias))
                .collect(),
        )
        .unwrap()
    }

    fn iface(name: &str, labels: &[&str]) -> DeviceInterface {
        DeviceInterface::new(
            Some(name.to_owned()),
            labels.iter().map(|l| (*l).to_owned()).collect(),
        )
    }

    #[test]
    fn changed_label_lands_in_to_update() {
        let idx = index(&[(1, "1/1", "old")]);
        let report = reconcile_all(&[iface("1/1", &["new"])], &idx);

        assert_eq!(
            report.to_update,
            vec![UpdateEntry {
                port_id: PortId(1),
                port_name: "1/1".into(),
                old_label: "old".into(),
                new_label: "new".into(),
            }]
        );
        assert!(report.no_change.is_empty());
        assert!(report.unresolved.is_empty());
    }

    #[test]
    fn suffix_match_with_accurate_label_is_no_change() {
        let idx = index(&[(2, "2/1/eth", "X")]);
        let report = reconcile_all(&[iface("2/1", &["X"])], &idx);

        assert_eq!(
            report.no_change,
            vec![NoChangeEntry {
                port_id: PortId(2),
                port_name: "2/1/eth".into(),
                label: "X".into(),
            }]
        );
        assert!(report.to_update.is_empty());
    }

    #[test]
    fn exact_match_beats_substring_overlap() {
        let idx = index(&[(3, "lag-5", ""), (4, "lag-50", "")]);
        let report = reconcile_all(&[iface("lag-5", &["Y"])], &idx);

        assert_eq!(report.to_update.len(), 1);
        assert_eq!(report.to_update[0].port_id, PortId(3));
        assert!(report.unresolved.is_empty());
    }

    #[test]
    fn ambiguous_name_carries_candidates_in_order() {
        let idx = index(&[(5, "ch-1/2", ""), (6, "ot-1/2", "")]);
        let report = reconcile_all(&[iface("1/2", &["Z"])], &idx);

        assert_eq!(
            report.unresolved,
            vec![UnresolvedEntry {
                interface_name: "1/2".into(),
                candidates: vec!["ch-1/2".into(), "ot-1/2".into()],
            }]
        );
        assert!(report.to_update.is_empty());
    }

    #[test]
    fn unknown_name_has_no_candidates() {
        let idx = index(&[(1, "1/1", "")]);
        let report = reconcile_all(&[iface("9/9", &["Z"])], &idx);

        assert_eq!(report.unresolved.len(), 1);
        assert!(report.unresolved[0].candidates.is_empty());
    }

    #[test]
    fn nameless_interface_is_dropped_silently() {
        let idx = index(&[(1, "1/1", "")]);
        let report = reconcile_all(&[DeviceInterface::new(None, vec!["label".into()])], &idx);
        assert!(report.is_empty());
    }

    #[test]
    fn empty_labels_appear_in_no_list() {
        let idx = index(&[(1, "1/1", "kept")]);
        let report = reconcile_all(&[iface("1/1", &["", "   "])], &idx);
        assert!(report.is_empty());
    }

    #[test]
    fn multiple_labels_classify_independently() {
        let idx = index(&[(1, "1/1", "same")]);
        let report = reconcile_all(&[iface("1/1", &["same", "different", ""])], &idx);

        assert_eq!(report.no_change.len(), 1);
        assert_eq!(report.to_update.len(), 1);
        assert_eq!(report.to_update[0].new_label, "different");
    }

    #[test]
    fn run_is_deterministic_and_order_preserving() {
        let idx = index(&[(1, "1/1", "a"), (2, "1/2", "b"), (3, "1/3", "c")]);
        let interfaces = vec![
            iface("1/3", &["changed-3"]),
            iface("1/1", &["changed-1"]),
            iface("1/2", &["b"]),
        ];

        let first = reconcile_all(&interfaces, &idx);
        let second = reconcile_all(&interfaces, &idx);
        assert_eq!(first, second);

        // Input order, not name or confidence order.
        let updated: Vec<&str> = first
            .to_update
            .iter()
            .map(|e| e.port_name.as_str())
            .collect();
        assert_eq!(updated, vec!["1/3", "1/1"]);
    }

    #[test]
    fn report_serializes_for_rendering() {
        let idx = index(&[(1, "1/1", "old")]);
        let report = reconcile_all(&[iface("1/1", &["new"])], &idx);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["to_update"][0]["port_id"], 1);
        assert_eq!(json["to_update"][0]["new_label"], "new");
    }
}
