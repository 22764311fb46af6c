use super::common::{responses, sheet, uniform};
use crate::diagnosis::aggregate::{aggregate, contribution, percentage, ResponseSheet};
use crate::diagnosis::{Block, BlockKind, Preset, Question, Questionnaire, BlockLadder};

#[test]
fn contribution_scales_weight_by_fifths() {
    assert_eq!(contribution(1, 25.0), 5.0);
    assert_eq!(contribution(5, 25.0), 25.0);
    assert_eq!(contribution(3, 20.0), 12.0);
}

#[test]
fn percentage_rounds_half_up_and_guards_zero() {
    assert_eq!(percentage(1.0, 200.0), 1);
    assert_eq!(percentage(5.0, 200.0), 3);
    assert_eq!(percentage(328.0, 600.0), 55);
    assert_eq!(percentage(10.0, 0.0), 0);
    assert_eq!(percentage(900.0, 600.0), 100);
}

#[test]
fn all_top_answers_reach_full_marks() {
    let questionnaire = Questionnaire::compact();
    let totals = aggregate(&questionnaire, &ResponseSheet::new(&uniform(&questionnaire, 5)));

    assert!(totals.blocks.iter().all(|block| block.percentage == 100));
    assert_eq!(totals.percentage, 100);
    assert!((totals.total_score - 500.0).abs() < 0.01);
}

#[test]
fn missing_answers_score_like_the_lowest_answer() {
    let questionnaire = Questionnaire::compact();
    let empty = aggregate(&questionnaire, &sheet(&[]));
    let lowest = aggregate(&questionnaire, &ResponseSheet::new(&uniform(&questionnaire, 1)));

    assert_eq!(empty, lowest);
    assert!(empty.blocks.iter().all(|block| block.percentage == 20));
    assert_eq!(empty.percentage, 20);
}

#[test]
fn out_of_range_answers_are_clamped() {
    let questionnaire = Questionnaire::compact();
    let high = aggregate(&questionnaire, &sheet(&[("proc1", 9)]));
    let low = aggregate(&questionnaire, &sheet(&[("proc1", -3)]));

    assert_eq!(high.blocks[0].score, 40.0);
    assert_eq!(high.blocks[0].percentage, 40);
    assert_eq!(low.blocks[0].score, 20.0);

    let wild: Vec<(&str, i64)> = questionnaire
        .question_ids()
        .map(|id| (id, i64::MAX))
        .collect();
    let totals = aggregate(&questionnaire, &sheet(&wild));
    assert!(totals.percentage <= 100);
    assert!(totals.blocks.iter().all(|block| block.percentage <= 100));
}

#[test]
fn unknown_question_ids_do_not_change_scores() {
    let questionnaire = Questionnaire::compact();
    let base = aggregate(&questionnaire, &sheet(&[("proc1", 4), ("dat2", 2)]));
    let noisy = aggregate(
        &questionnaire,
        &sheet(&[("proc1", 4), ("dat2", 2), ("zzz9", 5), ("seg1", 5)]),
    );

    assert_eq!(base, noisy);
}

#[test]
fn empty_block_scores_zero_percent() {
    let questionnaire = Questionnaire {
        name: "sparse".to_string(),
        max_total_points: 20.0,
        blocks: vec![
            Block {
                id: BlockKind::Procesos,
                title: "Procesos".to_string(),
                description: String::new(),
                max_points: 20.0,
                questions: vec![Question {
                    id: "proc1".to_string(),
                    prompt: "¿Procesos documentados?".to_string(),
                    explanation: None,
                    weight: 20.0,
                }],
            },
            Block {
                id: BlockKind::Seguridad,
                title: "Seguridad".to_string(),
                description: String::new(),
                max_points: 0.0,
                questions: Vec::new(),
            },
        ],
    };

    let totals = aggregate(&questionnaire, &sheet(&[("proc1", 5)]));
    assert_eq!(totals.blocks[1].max_score, 0.0);
    assert_eq!(totals.blocks[1].percentage, 0);
    assert_eq!(totals.percentage, 100);
}

#[test]
fn raising_one_answer_never_lowers_scores() {
    let questionnaire = Preset::Extended.questionnaire();
    let ladder = BlockLadder::for_blocks(Preset::Extended.block_bounds()).expect("ladder");
    let ids: Vec<&str> = questionnaire.question_ids().collect();

    for target in &ids {
        let mut previous = None;
        for value in 1..=5 {
            let mut answers = uniform(&questionnaire, 3);
            answers.insert(*target, value);
            let totals = aggregate(&questionnaire, &ResponseSheet::new(&answers));
            let block = totals
                .blocks
                .iter()
                .find(|block| {
                    questionnaire
                        .block(block.id)
                        .is_some_and(|b| b.questions.iter().any(|q| q.id == *target))
                })
                .expect("question belongs to a block");
            let current = (
                block.score,
                block.percentage,
                ladder.classify(block.percentage),
                totals.percentage,
            );

            if let Some((score, pct, level, total)) = previous {
                assert!(current.0 >= score, "{target} score dropped at {value}");
                assert!(current.1 >= pct);
                assert!(current.2 >= level);
                assert!(current.3 >= total);
            }
            previous = Some(current);
        }
    }
}

#[test]
fn responses_collect_from_pairs() {
    let answers = responses(&[("proc1", 3), ("proc1", 4)]);
    assert_eq!(answers.len(), 1);
    assert_eq!(answers.get("proc1"), Some(4));
}
