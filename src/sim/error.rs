//! Simulation invariant violations

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    /// A level index outside the level table. The progression bounds check
    /// guarantees this never happens during a session.
    #[error("level index {index} out of range ({count} levels)")]
    InvalidLevelIndex { index: usize, count: usize },
}
