//! Frontier-admission rules for the solver.
//!
//! The breadth-first search deduplicates on visited configurations; the
//! rules here prune on top of that, deciding whether a freshly generated
//! successor is enqueued at all. They are kept separate from the search
//! loop so each rule can be tested on its own and switched off.

use crate::puzzle::Move;

/// True when a successor was produced by the same cargo that produced its
/// parent, i.e. the boat immediately shuttles the same load back.
pub fn is_repeated_cargo(previous: Option<Move>, cargo: Move) -> bool {
    previous == Some(cargo)
}

/// Admission rules applied when the solver considers enqueuing a successor.
#[derive(Debug, Clone)]
pub struct PruneRules {
    /// Skip successors reached by repeating the cargo of the crossing that
    /// produced the current node. This prunes pointless there-and-back
    /// shuttles, but it is a heuristic: it can also skip a configuration
    /// the first time it is generated, leaving it to be rediscovered
    /// through another parent. Disable it to enqueue every first-seen
    /// configuration.
    pub skip_repeated_cargo: bool,
}

impl Default for PruneRules {
    fn default() -> Self {
        Self {
            skip_repeated_cargo: true,
        }
    }
}

impl PruneRules {
    /// Decide whether a successor reached via `cargo` may join the
    /// frontier, given the cargo that produced its parent (`None` for the
    /// root).
    pub fn admits(&self, previous: Option<Move>, cargo: Move) -> bool {
        !(self.skip_repeated_cargo && is_repeated_cargo(previous, cargo))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_cargo_detection() {
        let pair = Move::new(1, 1);
        let wolf = Move::new(0, 1);

        assert!(is_repeated_cargo(Some(pair), pair));
        assert!(!is_repeated_cargo(Some(pair), wolf));
        // The root has no producing cargo, so nothing counts as a repeat.
        assert!(!is_repeated_cargo(None, pair));
        assert!(!is_repeated_cargo(None, wolf));
    }

    #[test]
    fn test_default_rules_reject_repeats_only() {
        let rules = PruneRules::default();
        let pair = Move::new(1, 1);
        let wolf = Move::new(0, 1);

        assert!(!rules.admits(Some(pair), pair));
        assert!(rules.admits(Some(wolf), pair));
        assert!(rules.admits(None, pair));
    }

    #[test]
    fn test_disabled_guard_admits_everything() {
        let rules = PruneRules {
            skip_repeated_cargo: false,
        };
        let pair = Move::new(1, 1);

        assert!(rules.admits(Some(pair), pair));
        assert!(rules.admits(None, pair));
    }
}
