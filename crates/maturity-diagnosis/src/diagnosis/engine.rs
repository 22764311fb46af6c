use super::actions::{plan_actions, FallbackSource};
use super::aggregate::{aggregate, unknown_response_count, ResponseSheet};
use super::blocks::{block_insights, block_recommendations};
use super::domain::{BlockAnalysis, DiagnosisResult, OrganizationInfo, Responses};
use super::guidance::{investment_guidance, timeframe, PercentageTier};
use super::insights::main_insights;
use super::narrative::organization_context;
use super::presets::DiagnosisProfile;
use tracing::debug;

/// Stateless evaluator bound to one questionnaire and its level ladders.
#[derive(Debug, Clone)]
pub struct DiagnosisEngine {
    profile: DiagnosisProfile,
}

impl DiagnosisEngine {
    pub fn new(profile: DiagnosisProfile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &DiagnosisProfile {
        &self.profile
    }

    /// Scores the answers and synthesizes the full report. Only the action
    /// padding consumes `fallback`; everything else is a pure function of the inputs.
    pub fn diagnose<F: FallbackSource>(
        &self,
        responses: &Responses,
        organization: OrganizationInfo,
        fallback: &mut F,
    ) -> DiagnosisResult {
        let questionnaire = self.profile.questionnaire();
        let size = organization.employee_count;
        let sheet = ResponseSheet::new(responses);
        unknown_response_count(questionnaire, responses);

        let totals = aggregate(questionnaire, &sheet);

        let block_analysis: Vec<BlockAnalysis> = questionnaire
            .blocks
            .iter()
            .zip(&totals.blocks)
            .map(|(block, score)| {
                let level = self.profile.block_ladder().classify(score.percentage);
                BlockAnalysis {
                    id: block.id,
                    title: block.title.clone(),
                    score: score.score,
                    max_score: score.max_score,
                    percentage: score.percentage,
                    level,
                    insights: to_owned(block_insights(block.id, level)),
                    recommendations: to_owned(block_recommendations(
                        block.id,
                        level,
                        size.group(),
                    )),
                }
            })
            .collect();

        let overall_level = self.profile.overall_ladder().classify(totals.percentage);
        let main_insights = main_insights(&block_analysis, &totals, &sheet, size);
        let priority_actions = plan_actions(&totals, &sheet, size, fallback);
        let tier = PercentageTier::from_percentage(totals.percentage);

        debug!(
            questionnaire = %questionnaire.name,
            size = %size,
            percentage = totals.percentage,
            level = overall_level.label(),
            "diagnosis computed"
        );

        DiagnosisResult {
            total_score: totals.total_score,
            max_total_score: totals.max_total_score,
            percentage: totals.percentage,
            overall_level,
            block_analysis,
            main_insights,
            priority_actions,
            timeframe: timeframe(tier, size).to_string(),
            investment_guidance: investment_guidance(tier, size),
            company_size: size,
            organization_context: organization_context(size).to_string(),
        }
    }
}

fn to_owned(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|line| line.to_string()).collect()
}
