use crate::infra::{fallback_for, parse_company_size, parse_preset};
use clap::Args;
use maturity_diagnosis::config::AppConfig;
use maturity_diagnosis::diagnosis::narrative::organization_context;
use maturity_diagnosis::diagnosis::{
    responses_from_path, BlockLevel, CompanySize, DiagnosisEngine, DiagnosisResult,
    OrganizationInfo, OverallLevel, Preset, Responses, ThresholdLadder,
};
use maturity_diagnosis::error::AppError;
use maturity_diagnosis::telemetry::{self, LogSink};
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct DiagnoseArgs {
    /// Responses file: `question_id,value` CSV or a JSON object of id -> answer
    #[arg(long)]
    pub(crate) responses: PathBuf,
    /// Headcount tier: 1, 2-5, 6-15, 16-50, 51-200 or 200+
    #[arg(long, value_parser = parse_company_size)]
    pub(crate) employees: CompanySize,
    /// Questionnaire preset (compact or extended). Overrides DIAGNOSIS_PRESET.
    #[arg(long, value_parser = parse_preset)]
    pub(crate) preset: Option<Preset>,
    /// Seed for the generic action padding. Overrides DIAGNOSIS_FALLBACK_SEED.
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Print the result as JSON instead of a text report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct QuestionnaireArgs {
    /// Questionnaire preset (compact or extended). Overrides DIAGNOSIS_PRESET.
    #[arg(long, value_parser = parse_preset)]
    pub(crate) preset: Option<Preset>,
    /// Print the questionnaire as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Headcount tier of the canned respondent
    #[arg(long, value_parser = parse_company_size, default_value = "6-15")]
    pub(crate) employees: CompanySize,
    /// Seed for the generic action padding
    #[arg(long)]
    pub(crate) seed: Option<u64>,
}

struct Prepared {
    engine: DiagnosisEngine,
    fallback_seed: Option<u64>,
}

/// Loads configuration, routes logs to stderr and builds the engine. An
/// explicit preset replaces both DIAGNOSIS_PRESET and DIAGNOSIS_QUESTIONNAIRE_PATH.
fn prepare(preset: Option<Preset>) -> Result<Prepared, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry, LogSink::Stderr)?;

    let mut diagnosis = config.diagnosis;
    if let Some(preset) = preset {
        diagnosis.preset = preset;
        diagnosis.questionnaire_path = None;
    }

    let profile = diagnosis.build_profile()?;
    Ok(Prepared {
        engine: DiagnosisEngine::new(profile),
        fallback_seed: diagnosis.fallback_seed,
    })
}

pub(crate) fn run_diagnose(args: DiagnoseArgs) -> Result<(), AppError> {
    let DiagnoseArgs {
        responses,
        employees,
        preset,
        seed,
        json,
    } = args;

    let prepared = prepare(preset)?;
    let answers = responses_from_path(&responses)?;
    info!(path = %responses.display(), answers = answers.len(), "responses imported");

    let mut fallback = fallback_for(seed.or(prepared.fallback_seed));
    let result = prepared
        .engine
        .diagnose(&answers, OrganizationInfo::new(employees), &mut fallback);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render_report(&prepared.engine, &result));
    }
    Ok(())
}

pub(crate) fn run_questionnaire(args: QuestionnaireArgs) -> Result<(), AppError> {
    let prepared = prepare(args.preset)?;
    let profile = prepared.engine.profile();
    let questionnaire = profile.questionnaire();

    if args.json {
        println!("{}", serde_json::to_string_pretty(questionnaire)?);
        return Ok(());
    }

    println!(
        "Questionnaire '{}' | {} blocks | {} questions | {} points",
        questionnaire.name,
        questionnaire.blocks.len(),
        questionnaire.question_count(),
        questionnaire.max_total_points
    );
    for block in &questionnaire.blocks {
        println!(
            "\n{} ({} points)",
            block.display_name(),
            block.computed_max()
        );
        if !block.description.is_empty() {
            println!("  {}", block.description);
        }
        for question in &block.questions {
            println!("  [{}] {} (weight {})", question.id, question.prompt, question.weight);
            if let Some(explanation) = &question.explanation {
                println!("        {explanation}");
            }
        }
    }

    println!("\nAnswer scale: 1 (lowest maturity) to 5 (highest)");
    println!(
        "Block levels: {}",
        describe_ladder(profile.block_ladder(), BlockLevel::label)
    );
    println!(
        "Overall levels: {}",
        describe_ladder(profile.overall_ladder(), OverallLevel::label)
    );
    println!("Company size tiers:");
    for size in CompanySize::ordered() {
        println!(
            "  - {:>6} employees: {}",
            size.label(),
            organization_context(size)
        );
    }

    if !profile.warnings().is_empty() {
        println!("\nSchema warnings:");
        for warning in profile.warnings() {
            println!("  - {warning}");
        }
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let prepared = prepare(Some(Preset::Extended))?;
    let answers = canned_respondent(&prepared.engine);

    println!("AI maturity diagnosis demo");
    println!("Respondent: process-driven team with scattered, low-quality data\n");

    let mut fallback = fallback_for(args.seed.or(prepared.fallback_seed));
    let result = prepared.engine.diagnose(
        &answers,
        OrganizationInfo::new(args.employees),
        &mut fallback,
    );
    print!("{}", render_report(&prepared.engine, &result));
    Ok(())
}

/// Renders a ladder top-down, e.g. `avanzado >= 80%, ..., otherwise critico`.
fn describe_ladder<L: Copy>(ladder: &ThresholdLadder<L>, label: fn(L) -> &'static str) -> String {
    let mut rungs: Vec<String> = ladder
        .steps()
        .iter()
        .map(|step| format!("{} >= {}%", label(step.level), step.min_percentage))
        .collect();
    rungs.push(format!("otherwise {}", label(ladder.floor())));
    rungs.join(", ")
}

/// Strong documented processes, weak data, middling elsewhere, and KPIs not yet in place.
fn canned_respondent(engine: &DiagnosisEngine) -> Responses {
    let mut answers: Responses = engine
        .profile()
        .questionnaire()
        .question_ids()
        .map(|id| {
            let value = if id.starts_with("proc") {
                4
            } else if id.starts_with("dat") {
                1
            } else {
                3
            };
            (id, value)
        })
        .collect();
    answers.insert("proc3", 2);
    answers
}

pub(crate) fn render_report(engine: &DiagnosisEngine, result: &DiagnosisResult) -> String {
    let mut out = String::new();
    let questionnaire = engine.profile().questionnaire();

    out.push_str(&format!(
        "AI maturity diagnosis ({})\n",
        questionnaire.name
    ));
    out.push_str(&format!(
        "Company size: {} employees | {}\n",
        result.company_size, result.organization_context
    ));
    out.push_str(&format!(
        "Overall: {}% ({}) | {:.1} / {:.1} points\n",
        result.percentage,
        result.overall_level.label(),
        result.total_score,
        result.max_total_score
    ));

    out.push_str("\nBlocks\n");
    for block in &result.block_analysis {
        let name = questionnaire
            .block(block.id)
            .map(|declared| declared.display_name())
            .unwrap_or(block.title.as_str());
        out.push_str(&format!(
            "- {}: {}% ({}) | {:.1}/{:.1}\n",
            name,
            block.percentage,
            block.level.label(),
            block.score,
            block.max_score
        ));
        for insight in &block.insights {
            out.push_str(&format!("    * {insight}\n"));
        }
        for recommendation in &block.recommendations {
            out.push_str(&format!("    > {recommendation}\n"));
        }
    }

    out.push_str("\nMain insights\n");
    for insight in &result.main_insights {
        out.push_str(&format!("- {insight}\n"));
    }

    out.push_str("\nPriority actions\n");
    for (index, action) in result.priority_actions.iter().enumerate() {
        out.push_str(&format!("{}. {action}\n", index + 1));
    }

    out.push_str(&format!("\nTimeframe: {}\n", result.timeframe));
    out.push_str(&format!("Investment: {}\n", result.investment_guidance));
    out
}
