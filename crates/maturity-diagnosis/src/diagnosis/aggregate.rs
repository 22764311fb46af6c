use super::domain::Responses;
use super::questionnaire::{Block, BlockKind, Questionnaire};
use std::collections::HashMap;
use tracing::{debug, warn};

pub const MIN_RESPONSE: u8 = 1;
pub const MAX_RESPONSE: u8 = 5;

/// Normalized view over the raw answers: every lookup yields a value in 1..=5.
#[derive(Debug, Clone, Default)]
pub struct ResponseSheet {
    values: HashMap<String, u8>,
}

impl ResponseSheet {
    pub fn new(responses: &Responses) -> Self {
        let values = responses
            .iter()
            .map(|(id, raw)| (id.to_string(), clamp_response(id, raw)))
            .collect();
        Self { values }
    }

    /// Unanswered questions count as the lowest maturity answer.
    pub fn value(&self, question_id: &str) -> u8 {
        self.values
            .get(question_id)
            .copied()
            .unwrap_or(MIN_RESPONSE)
    }

    pub fn average(&self, question_ids: &[&str]) -> f64 {
        if question_ids.is_empty() {
            return f64::from(MIN_RESPONSE);
        }
        let sum: u32 = question_ids
            .iter()
            .map(|id| u32::from(self.value(id)))
            .sum();
        f64::from(sum) / question_ids.len() as f64
    }
}

fn clamp_response(question_id: &str, raw: i64) -> u8 {
    let clamped = raw.clamp(i64::from(MIN_RESPONSE), i64::from(MAX_RESPONSE));
    if clamped != raw {
        warn!(
            question = question_id,
            raw, clamped, "response outside 1..=5, clamping"
        );
    }
    // clamped is within 1..=5
    clamped as u8
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlockScore {
    pub id: BlockKind,
    pub score: f64,
    pub max_score: f64,
    pub percentage: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Aggregate {
    pub blocks: Vec<BlockScore>,
    pub total_score: f64,
    pub max_total_score: f64,
    pub percentage: u8,
}

impl Aggregate {
    /// Mean of the rounded block percentages, used by the insight and action rules.
    pub fn average_block_percentage(&self) -> f64 {
        if self.blocks.is_empty() {
            return 0.0;
        }
        let sum: u32 = self
            .blocks
            .iter()
            .map(|block| u32::from(block.percentage))
            .sum();
        f64::from(sum) / self.blocks.len() as f64
    }
}

/// Points earned for a single answer: 1 → a fifth of the weight, 5 → the full weight.
pub fn contribution(response: u8, weight: f64) -> f64 {
    f64::from(response) * (weight / f64::from(MAX_RESPONSE))
}

/// Rounds half up and clamps to 0..=100; a zero denominator yields 0.
pub fn percentage(score: f64, max: f64) -> u8 {
    if max <= 0.0 || !max.is_finite() || !score.is_finite() {
        return 0;
    }
    (100.0 * score / max).round().clamp(0.0, 100.0) as u8
}

pub fn score_block(block: &Block, sheet: &ResponseSheet) -> BlockScore {
    let score = block
        .questions
        .iter()
        .map(|question| contribution(sheet.value(&question.id), question.weight))
        .sum();
    let max_score = block.computed_max();

    BlockScore {
        id: block.id,
        score,
        max_score,
        percentage: percentage(score, max_score),
    }
}

pub fn aggregate(questionnaire: &Questionnaire, sheet: &ResponseSheet) -> Aggregate {
    let blocks: Vec<BlockScore> = questionnaire
        .blocks
        .iter()
        .map(|block| score_block(block, sheet))
        .collect();
    let total_score = blocks.iter().map(|block| block.score).sum();
    let max_total_score = questionnaire.max_total_points;

    Aggregate {
        percentage: percentage(total_score, max_total_score),
        blocks,
        total_score,
        max_total_score,
    }
}

/// Count of answered ids the questionnaire does not know about.
pub(crate) fn unknown_response_count(questionnaire: &Questionnaire, responses: &Responses) -> usize {
    let known: std::collections::HashSet<&str> = questionnaire.question_ids().collect();
    let unknown = responses
        .iter()
        .filter(|(id, _)| !known.contains(id))
        .count();
    if unknown > 0 {
        debug!(unknown, "ignoring responses for unknown question ids");
    }
    unknown
}
