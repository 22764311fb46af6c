use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Coarse organization headcount tier selected by the respondent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompanySize {
    #[serde(rename = "1")]
    Solo,
    #[serde(rename = "2-5")]
    Micro,
    #[serde(rename = "6-15")]
    Small,
    #[serde(rename = "16-50")]
    Medium,
    #[serde(rename = "51-200")]
    Large,
    #[serde(rename = "200+")]
    Enterprise,
}

impl CompanySize {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Solo,
            Self::Micro,
            Self::Small,
            Self::Medium,
            Self::Large,
            Self::Enterprise,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Solo => "1",
            Self::Micro => "2-5",
            Self::Small => "6-15",
            Self::Medium => "16-50",
            Self::Large => "51-200",
            Self::Enterprise => "200+",
        }
    }

    /// Lowest headcount covered by the tier.
    pub const fn headcount_floor(self) -> u32 {
        match self {
            Self::Solo => 1,
            Self::Micro => 2,
            Self::Small => 6,
            Self::Medium => 16,
            Self::Large => 51,
            Self::Enterprise => 200,
        }
    }

    pub const fn group(self) -> SizeGroup {
        match self {
            Self::Solo | Self::Micro | Self::Small => SizeGroup::Small,
            Self::Medium | Self::Large | Self::Enterprise => SizeGroup::Large,
        }
    }
}

impl fmt::Display for CompanySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown company size tier '{0}' (expected one of 1, 2-5, 6-15, 16-50, 51-200, 200+)")]
pub struct UnknownCompanySize(pub String);

impl FromStr for CompanySize {
    type Err = UnknownCompanySize;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ordered()
            .into_iter()
            .find(|size| size.label() == trimmed)
            .ok_or_else(|| UnknownCompanySize(trimmed.to_string()))
    }
}

/// Two-way grouping used where the rule tables only distinguish small from large teams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeGroup {
    Small,
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationInfo {
    pub employee_count: CompanySize,
}

impl OrganizationInfo {
    pub fn new(employee_count: CompanySize) -> Self {
        Self { employee_count }
    }
}

/// Maturity level assigned to a single block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockLevel {
    Critico,
    Basico,
    Intermedio,
    Avanzado,
}

impl BlockLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Critico => "critico",
            Self::Basico => "basico",
            Self::Intermedio => "intermedio",
            Self::Avanzado => "avanzado",
        }
    }
}

/// Maturity level assigned to the questionnaire as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverallLevel {
    Inicial,
    Basico,
    Intermedio,
    Avanzado,
}

impl OverallLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Inicial => "inicial",
            Self::Basico => "basico",
            Self::Intermedio => "intermedio",
            Self::Avanzado => "avanzado",
        }
    }
}

/// Raw answers keyed by question id. Values are kept as supplied; range
/// handling happens when the engine reads them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Responses(HashMap<String, i64>);

impl Responses {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, question_id: impl Into<String>, value: i64) -> Option<i64> {
        self.0.insert(question_id.into(), value)
    }

    pub fn get(&self, question_id: &str) -> Option<i64> {
        self.0.get(question_id).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.0.iter().map(|(id, value)| (id.as_str(), *value))
    }
}

impl<K: Into<String>> FromIterator<(K, i64)> for Responses {
    fn from_iter<I: IntoIterator<Item = (K, i64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(id, value)| (id.into(), value)).collect())
    }
}

/// Per-block outcome of an evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockAnalysis {
    pub id: super::BlockKind,
    pub title: String,
    pub score: f64,
    pub max_score: f64,
    pub percentage: u8,
    pub level: BlockLevel,
    pub insights: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Complete diagnosis handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisResult {
    pub total_score: f64,
    pub max_total_score: f64,
    pub percentage: u8,
    pub overall_level: OverallLevel,
    pub block_analysis: Vec<BlockAnalysis>,
    pub main_insights: Vec<String>,
    pub priority_actions: [String; 3],
    pub timeframe: String,
    pub investment_guidance: String,
    pub company_size: CompanySize,
    pub organization_context: String,
}
