//! Target fleet container.
//!
//! Stored in `SimulationEngine`, NOT as ECS entities: targets are never
//! removed, only flagged, so their indices stay stable for external trackers.

use aerostrike_core::components::AerialTarget;
use aerostrike_core::state::ScoreView;

#[derive(Debug, Clone, Default)]
pub struct Fleet {
    targets: Vec<AerialTarget>,
}

impl Fleet {
    pub fn new(targets: Vec<AerialTarget>) -> Self {
        Self { targets }
    }

    pub fn targets(&self) -> &[AerialTarget] {
        &self.targets
    }

    pub fn targets_mut(&mut self) -> &mut [AerialTarget] {
        &mut self.targets
    }

    pub fn get(&self, index: usize) -> Option<&AerialTarget> {
        self.targets.get(index)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn destroyed_count(&self) -> u32 {
        self.targets.iter().filter(|t| t.destroyed).count() as u32
    }

    pub fn score(&self) -> ScoreView {
        ScoreView {
            destroyed: self.destroyed_count(),
            total: self.targets.len() as u32,
        }
    }

    /// Flag a target destroyed. Returns `false` if it already was, or the
    /// index is out of range.
    pub fn mark_destroyed(&mut self, index: usize) -> bool {
        match self.targets.get_mut(index) {
            Some(target) if !target.destroyed => {
                target.destroyed = true;
                true
            }
            _ => false,
        }
    }

    /// Drop every target, handing back the records for node cleanup.
    pub fn clear(&mut self) -> Vec<AerialTarget> {
        std::mem::take(&mut self.targets)
    }
}
