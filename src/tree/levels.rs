use super::{Result, TreeError};

/// Where an entry sits within its sibling group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IterationState {
    /// More siblings follow at this depth.
    Iterating,
    /// Final sibling at this depth.
    Last,
    /// Depth 0: the entry the run was started on. No connector.
    Root,
}

/// Iteration state for every depth the traversal has entered.
///
/// Indexed directly by depth. Deeper slots left over from an earlier subtree
/// are never cleared: a depth is always written before anything at or below
/// it is rendered, so stale values are overwritten before they are read.
#[derive(Debug, Clone, Default)]
pub struct LevelStates {
    states: Vec<Option<IterationState>>,
}

impl LevelStates {
    /// A table with depth 0 already marked as `Root`.
    pub fn new() -> Self {
        let mut levels = Self::default();
        levels.set(0, IterationState::Root);
        levels
    }

    pub fn set(&mut self, depth: usize, state: IterationState) {
        if self.states.len() <= depth {
            self.states.resize(depth + 1, None);
        }
        self.states[depth] = Some(state);
    }

    pub fn get(&self, depth: usize) -> Result<IterationState> {
        self.states
            .get(depth)
            .copied()
            .flatten()
            .ok_or(TreeError::MissingLevel { depth })
    }
}

/// Sibling state for position `index` (zero-based) in a group of `count`.
pub fn sibling_state(index: usize, count: usize) -> IterationState {
    if index + 1 == count {
        IterationState::Last
    } else {
        IterationState::Iterating
    }
}
