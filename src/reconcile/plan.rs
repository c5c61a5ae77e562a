//! Reconciliation plan - which extensions to install and uninstall

use std::collections::BTreeSet;

/// The reconciliation plan: the changes needed to converge the live
/// extension set to the saved one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcilePlan {
    /// Extensions in the snapshot but not installed
    pub install: BTreeSet<String>,
    /// Extensions installed but not in the snapshot
    pub uninstall: BTreeSet<String>,
}

impl ReconcilePlan {
    /// True when live state already matches the snapshot
    pub fn is_empty(&self) -> bool {
        self.install.is_empty() && self.uninstall.is_empty()
    }
}

/// Compute the reconciliation plan for a live and a saved extension set.
///
/// Pure symmetric-difference decomposition: `install = saved − live`,
/// `uninstall = live − saved`. Callers must reject an empty saved set
/// before invoking this (an empty snapshot means the snapshot file is
/// missing or invalid, not that every extension should be removed).
pub fn reconcile(live: &BTreeSet<String>, saved: &BTreeSet<String>) -> ReconcilePlan {
    ReconcilePlan {
        install: saved.difference(live).cloned().collect(),
        uninstall: live.difference(saved).cloned().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(ids: &[&str]) -> BTreeSet<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_noop_when_sets_match() {
        let live = set(&["a", "b"]);
        let saved = set(&["a", "b"]);
        let plan = reconcile(&live, &saved);
        assert!(plan.is_empty());
    }

    #[test]
    fn test_install_only() {
        let live = set(&["a"]);
        let saved = set(&["a", "b", "c"]);
        let plan = reconcile(&live, &saved);
        assert_eq!(plan.install, set(&["b", "c"]));
        assert!(plan.uninstall.is_empty());
    }

    #[test]
    fn test_uninstall_only() {
        let live = set(&["a", "b", "c"]);
        let saved = set(&["a"]);
        let plan = reconcile(&live, &saved);
        assert!(plan.install.is_empty());
        assert_eq!(plan.uninstall, set(&["b", "c"]));
    }

    #[test]
    fn test_mixed() {
        let live = set(&["a", "b"]);
        let saved = set(&["b", "c"]);
        let plan = reconcile(&live, &saved);
        assert_eq!(plan.install, set(&["c"]));
        assert_eq!(plan.uninstall, set(&["a"]));
    }

    #[test]
    fn test_set_algebra_properties() {
        let live = set(&["a", "b", "c", "d"]);
        let saved = set(&["c", "d", "e", "f"]);
        let plan = reconcile(&live, &saved);

        // install ⊆ saved, uninstall ⊆ live
        assert!(plan.install.is_subset(&saved));
        assert!(plan.uninstall.is_subset(&live));

        // install ∩ uninstall = ∅
        assert!(plan.install.is_disjoint(&plan.uninstall));

        // install ∪ uninstall ∪ (live ∩ saved) = live ∪ saved
        let mut union: BTreeSet<String> = plan.install.union(&plan.uninstall).cloned().collect();
        union.extend(live.intersection(&saved).cloned());
        let expected: BTreeSet<String> = live.union(&saved).cloned().collect();
        assert_eq!(union, expected);
    }

    #[test]
    fn test_idempotent_after_apply() {
        let live = set(&["a", "b"]);
        let saved = set(&["b", "c"]);
        let plan = reconcile(&live, &saved);

        // Simulate a fully successful apply: live ∪ install \ uninstall
        let mut new_live: BTreeSet<String> = live.union(&plan.install).cloned().collect();
        new_live.retain(|id| !plan.uninstall.contains(id));

        let replanned = reconcile(&new_live, &saved);
        assert!(replanned.is_empty());
    }
}
