use crate::diagnosis::aggregate::ResponseSheet;
use crate::diagnosis::{
    BlockAnalysis, BlockKind, BlockLevel, DiagnosisEngine, FallbackSource, Preset, Questionnaire,
    Responses,
};

pub(super) fn engine(preset: Preset) -> DiagnosisEngine {
    DiagnosisEngine::new(preset.profile().expect("preset profile builds"))
}

pub(super) fn uniform(questionnaire: &Questionnaire, value: i64) -> Responses {
    questionnaire
        .question_ids()
        .map(|id| (id.to_string(), value))
        .collect()
}

pub(super) fn responses(pairs: &[(&str, i64)]) -> Responses {
    pairs.iter().map(|(id, value)| (*id, *value)).collect()
}

pub(super) fn sheet(pairs: &[(&str, i64)]) -> ResponseSheet {
    ResponseSheet::new(&responses(pairs))
}

/// Extended questionnaire with every `proc*` at 4, every `dat*` at 1 and the rest at 3.
pub(super) fn process_strong_data_weak() -> Responses {
    Questionnaire::extended()
        .question_ids()
        .map(|id| {
            let value = if id.starts_with("proc") {
                4
            } else if id.starts_with("dat") {
                1
            } else {
                3
            };
            (id.to_string(), value)
        })
        .collect()
}

pub(super) fn analysis(id: BlockKind, title: &str, percentage: u8) -> BlockAnalysis {
    BlockAnalysis {
        id,
        title: title.to_string(),
        score: f64::from(percentage),
        max_score: 100.0,
        percentage,
        level: BlockLevel::Basico,
        insights: Vec::new(),
        recommendations: Vec::new(),
    }
}

/// Fails the test if the planner asks for padding.
pub(super) struct NoPadding;

impl FallbackSource for NoPadding {
    fn next_index(&mut self, _len: usize) -> usize {
        panic!("no fallback padding expected");
    }
}
