use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::io::Read;
use std::path::Path;

/// Thematic areas the rule tables know how to talk about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Procesos,
    Datos,
    Cultura,
    Tecnologia,
    Estrategia,
    Seguridad,
}

impl BlockKind {
    pub const fn id(self) -> &'static str {
        match self {
            Self::Procesos => "procesos",
            Self::Datos => "datos",
            Self::Cultura => "cultura",
            Self::Tecnologia => "tecnologia",
            Self::Estrategia => "estrategia",
            Self::Seguridad => "seguridad",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    /// Share of the block's points this question is worth at the top answer.
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: BlockKind,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Declared maximum. Scoring uses [`Block::computed_max`] instead.
    pub max_points: f64,
    pub questions: Vec<Question>,
}

impl Block {
    pub fn computed_max(&self) -> f64 {
        self.questions.iter().map(|question| question.weight).sum()
    }

    pub fn display_name(&self) -> &str {
        strip_ordinal(&self.title)
    }
}

/// Drops a leading ordinal such as `"1. "` from a block title.
pub fn strip_ordinal(title: &str) -> &str {
    if let Some((prefix, rest)) = title.split_once(". ") {
        if !prefix.is_empty() && prefix.chars().all(|c| c.is_ascii_digit()) {
            return rest.trim();
        }
    }
    title.trim()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Questionnaire {
    pub name: String,
    pub max_total_points: f64,
    pub blocks: Vec<Block>,
}

#[derive(Debug, thiserror::Error)]
pub enum QuestionnaireError {
    #[error("questionnaire '{0}' has no blocks")]
    Empty(String),
    #[error("block '{0}' is declared more than once")]
    DuplicateBlock(BlockKind),
    #[error("question id '{0}' is declared more than once")]
    DuplicateQuestion(String),
    #[error("question '{question}' has invalid weight {weight}")]
    InvalidWeight { question: String, weight: f64 },
    #[error("declared max total points {0} must be a finite, non-negative number")]
    InvalidMaxTotal(f64),
    #[error("failed to read questionnaire: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid questionnaire JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Content-authoring problems that do not prevent evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaWarning {
    MaxTotalMismatch { declared: f64, computed: f64 },
    BlockMaxMismatch { block: BlockKind, declared: f64, computed: f64 },
    ZeroMaxBlock(BlockKind),
}

impl fmt::Display for SchemaWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaWarning::MaxTotalMismatch { declared, computed } => write!(
                f,
                "declared max total points {declared} differs from the sum of block maxima {computed}"
            ),
            SchemaWarning::BlockMaxMismatch {
                block,
                declared,
                computed,
            } => write!(
                f,
                "block '{block}' declares {declared} max points but its question weights sum to {computed}"
            ),
            SchemaWarning::ZeroMaxBlock(block) => {
                write!(f, "block '{block}' has no scorable questions and always reports 0%")
            }
        }
    }
}

const WEIGHT_TOLERANCE: f64 = 0.01;

impl Questionnaire {
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, QuestionnaireError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, QuestionnaireError> {
        let file = std::fs::File::open(path)?;
        Self::from_json_reader(std::io::BufReader::new(file))
    }

    pub fn block(&self, kind: BlockKind) -> Option<&Block> {
        self.blocks.iter().find(|block| block.id == kind)
    }

    pub fn question_ids(&self) -> impl Iterator<Item = &str> {
        self.blocks
            .iter()
            .flat_map(|block| block.questions.iter().map(|question| question.id.as_str()))
    }

    pub fn question_count(&self) -> usize {
        self.blocks.iter().map(|block| block.questions.len()).sum()
    }

    /// Rejects structurally broken schemas and reports advisory drift.
    pub fn validate(&self) -> Result<Vec<SchemaWarning>, QuestionnaireError> {
        if self.blocks.is_empty() {
            return Err(QuestionnaireError::Empty(self.name.clone()));
        }
        if !self.max_total_points.is_finite() || self.max_total_points < 0.0 {
            return Err(QuestionnaireError::InvalidMaxTotal(self.max_total_points));
        }

        let mut seen_blocks = HashSet::new();
        let mut seen_questions = HashSet::new();
        let mut warnings = Vec::new();

        for block in &self.blocks {
            if !seen_blocks.insert(block.id) {
                return Err(QuestionnaireError::DuplicateBlock(block.id));
            }

            for question in &block.questions {
                if !question.weight.is_finite() || question.weight < 0.0 {
                    return Err(QuestionnaireError::InvalidWeight {
                        question: question.id.clone(),
                        weight: question.weight,
                    });
                }
                if !seen_questions.insert(question.id.as_str()) {
                    return Err(QuestionnaireError::DuplicateQuestion(question.id.clone()));
                }
            }

            let computed = block.computed_max();
            if computed <= 0.0 {
                warnings.push(SchemaWarning::ZeroMaxBlock(block.id));
            } else if (computed - block.max_points).abs() > WEIGHT_TOLERANCE {
                warnings.push(SchemaWarning::BlockMaxMismatch {
                    block: block.id,
                    declared: block.max_points,
                    computed,
                });
            }
        }

        let computed_total: f64 = self.blocks.iter().map(Block::computed_max).sum();
        if (computed_total - self.max_total_points).abs() > WEIGHT_TOLERANCE {
            warnings.push(SchemaWarning::MaxTotalMismatch {
                declared: self.max_total_points,
                computed: computed_total,
            });
        }

        Ok(warnings)
    }
}
