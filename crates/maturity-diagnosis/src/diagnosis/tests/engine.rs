use super::common::{engine, process_strong_data_weak, responses, uniform};
use crate::diagnosis::actions::FALLBACK_ACTIONS;
use crate::diagnosis::blocks::{block_insights, block_recommendations};
use crate::diagnosis::insights::QUICK_AUTOMATION_INSIGHT;
use crate::diagnosis::narrative::{automation_starter, organization_context, size_insight};
use crate::diagnosis::{
    BlockKind, BlockLevel, CompanySize, OrganizationInfo, OverallLevel, Preset, RandomFallback,
    SequenceFallback, SizeGroup,
};

#[test]
fn process_strong_data_weak_scenario() {
    let engine = engine(Preset::Extended);
    let result = engine.diagnose(
        &process_strong_data_weak(),
        OrganizationInfo::new(CompanySize::Small),
        &mut SequenceFallback::new([1, 3]),
    );

    let procesos = &result.block_analysis[0];
    assert_eq!(procesos.id, BlockKind::Procesos);
    assert_eq!(procesos.score, 80.0);
    assert_eq!(procesos.percentage, 80);
    assert_eq!(procesos.level, BlockLevel::Avanzado);
    assert!(procesos.recommendations.is_empty());

    let datos = &result.block_analysis[1];
    assert_eq!(datos.percentage, 20);
    assert_eq!(datos.level, BlockLevel::Critico);
    assert_eq!(
        datos.recommendations,
        vec![
            "Consolida datos críticos en un sistema central".to_string(),
            "Limpia y normaliza la información más importante".to_string(),
        ]
    );

    let seguridad = &result.block_analysis[5];
    assert_eq!(seguridad.max_score, 80.0);
    assert_eq!(seguridad.percentage, 60);

    assert_eq!(result.total_score, 328.0);
    assert_eq!(result.max_total_score, 600.0);
    assert_eq!(result.percentage, 55);
    assert_eq!(result.overall_level, OverallLevel::Basico);

    assert_eq!(
        result.main_insights,
        vec![
            size_insight(CompanySize::Small).to_string(),
            QUICK_AUTOMATION_INSIGHT.to_string(),
            "Tu mayor fortaleza está en procesos y organización: tienes KPIs implementados que te permiten optimizar continuamente".to_string(),
            "Datos y Conectividad: la calidad de datos es crítica - ningún algoritmo funciona con datos incorrectos".to_string(),
        ]
    );
    assert_eq!(
        result.priority_actions,
        [
            automation_starter(CompanySize::Small).to_string(),
            FALLBACK_ACTIONS[1].to_string(),
            FALLBACK_ACTIONS[3].to_string(),
        ]
    );
    assert!(result.timeframe.starts_with("Empieza con chatbots"));
    assert!(result.investment_guidance.starts_with("PLAN DUAL"));
    assert_eq!(result.company_size, CompanySize::Small);
    assert_eq!(
        result.organization_context,
        organization_context(CompanySize::Small)
    );
}

#[test]
fn extremes_map_to_the_ends_of_both_ladders() {
    for preset in [Preset::Compact, Preset::Extended] {
        let engine = engine(preset);
        let questionnaire = engine.profile().questionnaire();
        let org = OrganizationInfo::new(CompanySize::Micro);

        let lowest = engine.diagnose(&uniform(questionnaire, 1), org, &mut RandomFallback::seeded(1));
        assert_eq!(lowest.overall_level, OverallLevel::Inicial, "{preset}");
        assert!(lowest
            .block_analysis
            .iter()
            .all(|block| block.level == BlockLevel::Critico));

        let highest = engine.diagnose(&uniform(questionnaire, 5), org, &mut RandomFallback::seeded(1));
        assert_eq!(highest.overall_level, OverallLevel::Avanzado, "{preset}");
        assert!(highest
            .block_analysis
            .iter()
            .all(|block| block.level == BlockLevel::Avanzado && block.percentage == 100));
    }
}

#[test]
fn extended_security_drift_caps_the_total() {
    let engine = engine(Preset::Extended);
    let result = engine.diagnose(
        &uniform(engine.profile().questionnaire(), 5),
        OrganizationInfo::new(CompanySize::Enterprise),
        &mut RandomFallback::seeded(3),
    );

    assert_eq!(result.total_score, 580.0);
    assert_eq!(result.percentage, 97);
}

#[test]
fn seeded_runs_are_identical() {
    let engine = engine(Preset::Compact);
    let answers = responses(&[("proc1", 2), ("dat1", 4), ("tec3", 3), ("est2", 5)]);
    let org = OrganizationInfo::new(CompanySize::Medium);

    let first = engine.diagnose(&answers, org, &mut RandomFallback::seeded(11));
    let second = engine.diagnose(&answers, org, &mut RandomFallback::seeded(11));
    assert_eq!(first, second);
}

#[test]
fn block_analysis_keeps_questionnaire_order() {
    let engine = engine(Preset::Extended);
    let result = engine.diagnose(
        &process_strong_data_weak(),
        OrganizationInfo::new(CompanySize::Large),
        &mut RandomFallback::seeded(5),
    );

    let ids: Vec<BlockKind> = result.block_analysis.iter().map(|block| block.id).collect();
    let declared: Vec<BlockKind> = engine
        .profile()
        .questionnaire()
        .blocks
        .iter()
        .map(|block| block.id)
        .collect();
    assert_eq!(ids, declared);
}

#[test]
fn block_tables_follow_level_and_size_group() {
    let engine = engine(Preset::Compact);
    let answers = uniform(engine.profile().questionnaire(), 1);

    let solo = engine.diagnose(&answers, OrganizationInfo::new(CompanySize::Solo), &mut RandomFallback::seeded(0));
    let large = engine.diagnose(&answers, OrganizationInfo::new(CompanySize::Large), &mut RandomFallback::seeded(0));

    let expected_insights: Vec<String> = block_insights(BlockKind::Procesos, BlockLevel::Critico)
        .iter()
        .map(|line| line.to_string())
        .collect();
    assert_eq!(solo.block_analysis[0].insights, expected_insights);
    assert_eq!(
        solo.block_analysis[0].recommendations[0],
        block_recommendations(BlockKind::Procesos, BlockLevel::Critico, SizeGroup::Small)[0]
    );
    assert_eq!(
        large.block_analysis[0].recommendations[0],
        block_recommendations(BlockKind::Procesos, BlockLevel::Critico, SizeGroup::Large)[0]
    );
    assert_ne!(
        solo.block_analysis[0].recommendations,
        large.block_analysis[0].recommendations
    );
}

#[test]
fn wild_answers_stay_within_bounds() {
    let engine = engine(Preset::Extended);
    let questionnaire = engine.profile().questionnaire();
    for value in [-50, 0, 6, 1_000] {
        let result = engine.diagnose(
            &uniform(questionnaire, value),
            OrganizationInfo::new(CompanySize::Small),
            &mut RandomFallback::seeded(9),
        );
        assert!(result.percentage <= 100);
        assert!(result
            .block_analysis
            .iter()
            .all(|block| block.percentage <= 100 && block.score <= block.max_score));
    }
}

#[test]
fn block_remarks_are_carried_over_as_written() {
    let engine = engine(Preset::Extended);
    let answers = responses(&[("seg1", 2), ("seg2", 2), ("seg3", 2), ("seg4", 2)]);
    let result = engine.diagnose(
        &answers,
        OrganizationInfo::new(CompanySize::Medium),
        &mut SequenceFallback::new([0]),
    );

    let datos = &result.block_analysis[1];
    assert_eq!(datos.level, BlockLevel::Critico);
    assert_eq!(
        datos.insights[0],
        "Datos fragmentados impiden aprovecha IA efectivamente"
    );

    let seguridad = &result.block_analysis[5];
    assert_eq!(seguridad.id, BlockKind::Seguridad);
    assert_eq!((seguridad.percentage, seguridad.level), (40, BlockLevel::Basico));
    assert_eq!(
        seguridad.insights,
        vec!["La seguridad debe fortalecerse antes de manejar datos sensibles con IA".to_string()]
    );
}
