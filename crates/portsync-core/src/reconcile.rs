// ── Label classification ──
//
// Exact-string contract: the device label (trimmed) either is empty,
// equals the stored alias byte-for-byte, or calls for an update. No
// partial or case-folded equality — silent near-miss no-ops would be
// worse than a redundant update.

use crate::model::{Port, ReconciliationAction};

/// Classify one device label against a resolved port's stored alias.
///
/// The raw label is trimmed of surrounding whitespace first; comparison
/// against the alias is case- and whitespace-sensitive after that.
pub fn classify(port: &Port, raw_label: &str) -> ReconciliationAction {
    let label = raw_label.trim();

    if label.is_empty() {
        return ReconciliationAction::Skip;
    }

    if label == port.alias {
        ReconciliationAction::NoChange {
            port_id: port.id,
            port_name: port.name.clone(),
            label: label.to_owned(),
        }
    } else {
        ReconciliationAction::Update {
            port_id: port.id,
            port_name: port.name.clone(),
            old_label: port.alias.clone(),
            new_label: label.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Port, ReconciliationAction};

    #[test]
    fn empty_label_is_skipped() {
        let port = Port::new(1u64, "1/1", "something");
        assert_eq!(classify(&port, ""), ReconciliationAction::Skip);
        assert_eq!(classify(&port, "   "), ReconciliationAction::Skip);
        assert_eq!(classify(&port, "\t\n"), ReconciliationAction::Skip);
    }

    #[test]
    fn trimmed_label_matching_alias_is_no_change() {
        let port = Port::new(1u64, "1/1", "Core Uplink");
        let action = classify(&port, " Core Uplink ");
        assert_eq!(
            action,
            ReconciliationAction::NoChange {
                port_id: port.id,
                port_name: "1/1".into(),
                label: "Core Uplink".into(),
            }
        );
    }

    #[test]
    fn comparison_is_case_sensitive() {
        let port = Port::new(1u64, "1/1", "core uplink");
        let action = classify(&port, "Core Uplink ");
        assert_eq!(
            action,
            ReconciliationAction::Update {
                port_id: port.id,
                port_name: "1/1".into(),
                old_label: "core uplink".into(),
                new_label: "Core Uplink".into(),
            }
        );
    }

    #[test]
    fn changed_label_carries_old_and_new() {
        let port = Port::new(1u64, "1/1", "old");
        let action = classify(&port, "new");
        assert_eq!(
            action,
            ReconciliationAction::Update {
                port_id: port.id,
                port_name: "1/1".into(),
                old_label: "old".into(),
                new_label: "new".into(),
            }
        );
    }

    #[test]
    fn label_against_empty_alias_is_update() {
        let port = Port::new(1u64, "1/1", "");
        assert!(matches!(
            classify(&port, "fresh"),
            ReconciliationAction::Update { .. }
        ));
    }
}
