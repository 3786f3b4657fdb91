//! Point-in-time unit status snapshot.

use crate::unit::UnitState;

/// A point-in-time snapshot of a unit's cached status.
///
/// The derived flags are always consistent with `state`: the only way to
/// build a snapshot is [`from_state`](Self::from_state), and the poller
/// commits the whole value under one lock, so readers never observe
/// `is_active != (state == Active)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusSnapshot {
    /// Last observed unit state.
    pub state: UnitState,
    /// Whether the last observed state was [`UnitState::Active`].
    pub is_active: bool,
    /// Whether the last observed state was [`UnitState::Failed`].
    pub is_failed: bool,
}

impl StatusSnapshot {
    /// Builds the snapshot for `state`, deriving the activity flags.
    pub fn from_state(state: UnitState) -> Self {
        Self {
            state,
            is_active: state == UnitState::Active,
            is_failed: state == UnitState::Failed,
        }
    }
}

impl Default for StatusSnapshot {
    /// The degraded snapshot held before any sample has been committed.
    fn default() -> Self {
        Self::from_state(UnitState::Unknown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_state_active() {
        let snapshot = StatusSnapshot::from_state(UnitState::Active);
        assert_eq!(snapshot.state, UnitState::Active);
        assert!(snapshot.is_active);
        assert!(!snapshot.is_failed);
    }

    #[test]
    fn test_from_state_failed() {
        let snapshot = StatusSnapshot::from_state(UnitState::Failed);
        assert_eq!(snapshot.state, UnitState::Failed);
        assert!(!snapshot.is_active);
        assert!(snapshot.is_failed);
    }

    #[test]
    fn test_from_state_inactive_and_unknown() {
        for state in [UnitState::Inactive, UnitState::Unknown] {
            let snapshot = StatusSnapshot::from_state(state);
            assert_eq!(snapshot.state, state);
            assert!(!snapshot.is_active);
            assert!(!snapshot.is_failed);
        }
    }

    #[test]
    fn test_default_is_degraded() {
        let snapshot = StatusSnapshot::default();
        assert_eq!(snapshot.state, UnitState::Unknown);
        assert!(!snapshot.is_active);
        assert!(!snapshot.is_failed);
    }
}
