use super::common::{analysis, engine, responses, sheet, uniform};
use crate::diagnosis::insights::{
    personalized_insights, strongest_block, weakest_blocks, PERSONALIZED_PATTERNS,
    QUICK_AUTOMATION_INSIGHT,
};
use crate::diagnosis::narrative::size_insight;
use crate::diagnosis::{BlockKind, CompanySize, OrganizationInfo, Preset, SequenceFallback};

fn pattern_text(name: &str) -> &'static str {
    PERSONALIZED_PATTERNS
        .iter()
        .find(|rule| rule.name == name)
        .map(|rule| rule.text)
        .expect("pattern exists")
}

/// Matches digital_visionary, operational_machine and open_team_without_champion.
fn three_archetypes() -> Vec<(&'static str, i64)> {
    vec![
        ("est1", 5),
        ("cul1", 1),
        ("cul2", 5),
        ("cul3", 1),
        ("tec1", 1),
        ("tec2", 1),
        ("tec3", 1),
        ("proc1", 4),
        ("proc2", 4),
        ("proc3", 4),
        ("proc4", 4),
        ("dat1", 4),
        ("dat2", 4),
        ("dat3", 4),
    ]
}

#[test]
fn personalized_insights_are_capped_in_declaration_order() {
    let answers = sheet(&three_archetypes());
    let fired = personalized_insights(&answers, CompanySize::Small);

    assert_eq!(
        fired,
        vec![
            pattern_text("digital_visionary"),
            pattern_text("operational_machine"),
        ]
    );
}

#[test]
fn size_scoped_insights_only_fire_for_their_tier() {
    let answers = sheet(&[("cul2", 5), ("cul3", 1)]);
    let open_team = pattern_text("open_team_without_champion");

    assert!(personalized_insights(&answers, CompanySize::Micro).contains(&open_team));
    assert!(!personalized_insights(&answers, CompanySize::Medium).contains(&open_team));
}

#[test]
fn ties_keep_declaration_order() {
    let blocks = vec![
        analysis(BlockKind::Procesos, "Procesos", 40),
        analysis(BlockKind::Datos, "Datos", 90),
        analysis(BlockKind::Cultura, "Cultura", 40),
        analysis(BlockKind::Tecnologia, "Tecnología", 90),
        analysis(BlockKind::Estrategia, "Estrategia", 40),
    ];

    let strongest = strongest_block(&blocks).expect("non-empty");
    assert_eq!(strongest.id, BlockKind::Datos);

    let weakest: Vec<BlockKind> = weakest_blocks(&blocks, 2)
        .into_iter()
        .map(|block| block.id)
        .collect();
    assert_eq!(weakest, vec![BlockKind::Procesos, BlockKind::Cultura]);
}

#[test]
fn middling_answers_skip_strength_and_weakness_lines() {
    let engine = engine(Preset::Compact);
    let answers = uniform(engine.profile().questionnaire(), 3);
    let result = engine.diagnose(
        &answers,
        OrganizationInfo::new(CompanySize::Medium),
        &mut SequenceFallback::new([0]),
    );

    assert!(result.block_analysis.iter().all(|block| block.percentage == 60));
    assert_eq!(
        result.main_insights,
        vec![
            size_insight(CompanySize::Medium).to_string(),
            QUICK_AUTOMATION_INSIGHT.to_string(),
        ]
    );
}

#[test]
fn lowest_answers_name_the_two_first_weak_blocks() {
    let engine = engine(Preset::Compact);
    let result = engine.diagnose(
        &uniform(engine.profile().questionnaire(), 1),
        OrganizationInfo::new(CompanySize::Solo),
        &mut SequenceFallback::new([0]),
    );

    assert_eq!(
        result.main_insights,
        vec![
            size_insight(CompanySize::Solo).to_string(),
            QUICK_AUTOMATION_INSIGHT.to_string(),
            "Procesos y Organización: sin procesos documentados, la IA puede amplificar problemas existentes".to_string(),
            "Datos y Conectividad: la calidad de datos es crítica - ningún algoritmo funciona con datos incorrectos".to_string(),
        ]
    );
}

#[test]
fn top_answers_report_a_strength_without_quick_wins() {
    let engine = engine(Preset::Compact);
    let result = engine.diagnose(
        &uniform(engine.profile().questionnaire(), 5),
        OrganizationInfo::new(CompanySize::Large),
        &mut SequenceFallback::new([0]),
    );

    assert!(!result
        .main_insights
        .contains(&QUICK_AUTOMATION_INSIGHT.to_string()));
    assert!(result.main_insights.contains(
        &"Tu mayor fortaleza está en procesos y organización: tienes KPIs implementados que te permiten optimizar continuamente".to_string()
    ));
}

fn diagnose_medium(pairs: &[(&str, i64)]) -> crate::diagnosis::DiagnosisResult {
    engine(Preset::Compact).diagnose(
        &responses(pairs),
        OrganizationInfo::new(CompanySize::Medium),
        &mut SequenceFallback::new([0]),
    )
}

fn block_percentage(result: &crate::diagnosis::DiagnosisResult, id: BlockKind) -> u8 {
    result
        .block_analysis
        .iter()
        .find(|block| block.id == id)
        .map(|block| block.percentage)
        .expect("block analysed")
}

#[test]
fn strength_line_starts_at_seventy_percent() {
    let result = diagnose_medium(&[("proc1", 4), ("proc2", 4), ("proc3", 3), ("proc4", 3)]);

    assert_eq!(block_percentage(&result, BlockKind::Procesos), 70);
    assert!(result.main_insights.contains(
        &"Tu mayor fortaleza está en procesos y organización: tus procesos están bien estructurados, ideal para automatización".to_string()
    ));
}

#[test]
fn block_at_fifty_percent_is_not_a_weakness() {
    let result = diagnose_medium(&[
        ("proc1", 4),
        ("proc2", 4),
        ("proc3", 3),
        ("proc4", 3),
        ("dat1", 5),
        ("dat2", 5),
        ("dat3", 5),
        ("cul1", 5),
        ("cul2", 5),
        ("cul3", 5),
        ("tec1", 5),
        ("tec2", 5),
        ("tec3", 5),
        ("est1", 2),
        ("est2", 3),
    ]);

    assert_eq!(block_percentage(&result, BlockKind::Estrategia), 50);
    assert!(!result
        .main_insights
        .iter()
        .any(|line| line.starts_with("Estrategia")));
}

#[test]
fn quick_automation_line_stops_at_seventy_percent_average() {
    let result = diagnose_medium(&[
        ("proc1", 5),
        ("proc2", 5),
        ("proc3", 5),
        ("proc4", 5),
        ("dat1", 4),
        ("dat2", 4),
        ("dat3", 4),
        ("cul1", 3),
        ("cul2", 3),
        ("cul3", 3),
        ("tec1", 3),
        ("tec2", 3),
        ("tec3", 3),
        ("est1", 2),
        ("est2", 3),
    ]);

    let sum: u32 = result
        .block_analysis
        .iter()
        .map(|block| u32::from(block.percentage))
        .sum();
    assert_eq!(sum, 350);
    assert!(!result
        .main_insights
        .contains(&QUICK_AUTOMATION_INSIGHT.to_string()));
}
