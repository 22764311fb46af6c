use super::domain::{BlockLevel, OverallLevel};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LadderError {
    #[error("threshold {0} exceeds 100")]
    OutOfRange(u8),
    #[error("thresholds must be strictly descending, got {0:?}")]
    NotDescending(Vec<u8>),
}

/// A single rung: percentages at or above `min_percentage` map to `level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LadderStep<L> {
    pub min_percentage: u8,
    pub level: L,
}

/// Monotonic percentage → level table, evaluated from the highest rung down.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThresholdLadder<L> {
    steps: Vec<LadderStep<L>>,
    floor: L,
}

impl<L: Copy> ThresholdLadder<L> {
    pub fn new(steps: Vec<LadderStep<L>>, floor: L) -> Result<Self, LadderError> {
        if let Some(step) = steps.iter().find(|step| step.min_percentage > 100) {
            return Err(LadderError::OutOfRange(step.min_percentage));
        }
        let descending = steps
            .windows(2)
            .all(|pair| pair[0].min_percentage > pair[1].min_percentage);
        if !descending {
            return Err(LadderError::NotDescending(
                steps.iter().map(|step| step.min_percentage).collect(),
            ));
        }
        Ok(Self { steps, floor })
    }

    pub fn classify(&self, percentage: u8) -> L {
        self.steps
            .iter()
            .find(|step| percentage >= step.min_percentage)
            .map(|step| step.level)
            .unwrap_or(self.floor)
    }

    pub fn steps(&self) -> &[LadderStep<L>] {
        &self.steps
    }

    pub fn floor(&self) -> L {
        self.floor
    }
}

impl ThresholdLadder<BlockLevel> {
    /// Bounds are the lower limits of avanzado, intermedio and basico.
    pub fn for_blocks(bounds: [u8; 3]) -> Result<Self, LadderError> {
        let [avanzado, intermedio, basico] = bounds;
        Self::new(
            vec![
                LadderStep { min_percentage: avanzado, level: BlockLevel::Avanzado },
                LadderStep { min_percentage: intermedio, level: BlockLevel::Intermedio },
                LadderStep { min_percentage: basico, level: BlockLevel::Basico },
            ],
            BlockLevel::Critico,
        )
    }
}

impl ThresholdLadder<OverallLevel> {
    /// Bounds are the lower limits of avanzado, intermedio and basico.
    pub fn for_overall(bounds: [u8; 3]) -> Result<Self, LadderError> {
        let [avanzado, intermedio, basico] = bounds;
        Self::new(
            vec![
                LadderStep { min_percentage: avanzado, level: OverallLevel::Avanzado },
                LadderStep { min_percentage: intermedio, level: OverallLevel::Intermedio },
                LadderStep { min_percentage: basico, level: OverallLevel::Basico },
            ],
            OverallLevel::Inicial,
        )
    }
}

pub type BlockLadder = ThresholdLadder<BlockLevel>;
pub type OverallLadder = ThresholdLadder<OverallLevel>;
