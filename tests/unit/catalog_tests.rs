//! Catalog-wide checks: every lesson runs, and config values reach the lessons

use proc_lessons::{catalog, find, run_transcript, Category, LessonError, LessonsConfig, Outcome};

/// Input that lets each lesson run to completion
fn sample_input(name: &str) -> &'static str {
    match name {
        "circle-input" | "circle-const" => "2\n",
        "bool-vars" => "0\n",
        "comparison" => "1\n2\n",
        "mixed-expressions" => "6\n7\n0\n",
        "nested-ride" => "10\n170\n",
        "sort-three" | "swap-sort-three" => "3 2 1\n",
        "switch-calc" => "6\n3\n-\n",
        "while-counter" => "2\n",
        "rectangle" => "3\n2\n",
        "pyramid" => "4\n1\n",
        "sum-break" | "sum-break-if" => "200\n100\n",
        "add-until-zero" => "1\n0\n",
        "mini-calc" => "1\n+ 1\nq\n",
        "sepline-params" => "#\n5\n",
        "absolutize" => "-3\n",
        "reciprocal" => "1\n",
        _ => "",
    }
}

#[test]
fn test_every_lesson_completes_with_sample_input() {
    let config = LessonsConfig::default();
    for lesson in catalog() {
        let (outcome, transcript) = run_transcript(lesson, sample_input(lesson.name), &config)
            .unwrap_or_else(|e| panic!("{} failed: {}", lesson.name, e));
        assert_eq!(outcome, Outcome::Completed, "{}", lesson.name);
        assert!(!transcript.is_empty(), "{} printed nothing", lesson.name);
    }
}

#[test]
fn test_every_category_has_lessons() {
    for category in [
        Category::Variables,
        Category::Logic,
        Category::Conditionals,
        Category::Loops,
        Category::Functions,
        Category::UserTypes,
    ] {
        assert!(
            catalog().iter().any(|l| l.category == category),
            "no lessons in {}",
            category
        );
    }
}

#[test]
fn test_input_lessons_fail_on_closed_input() {
    let config = LessonsConfig::default();
    for lesson in catalog() {
        if sample_input(lesson.name).is_empty() || lesson.name == "reciprocal" {
            continue;
        }
        let result = run_transcript(lesson, "", &config);
        assert!(
            matches!(result, Err(LessonError::UnexpectedEof)),
            "{} did not report end of input",
            lesson.name
        );
    }
}

#[test]
fn test_brush_and_block_chars_from_config() {
    let mut config = LessonsConfig::default();
    config.loops.brush_char = '*';
    config.loops.block_char = '@';

    let (_, rect) = run_transcript(find("rectangle").unwrap(), "2 1", &config).unwrap();
    assert!(rect.ends_with("\n**\n"));

    let (_, pyramid) = run_transcript(find("pyramid").unwrap(), "2 0", &config).unwrap();
    assert!(pyramid.ends_with("@\n@@\n"));
}

#[test]
fn test_target_sum_and_count_from_config() {
    let mut config = LessonsConfig::default();
    config.loops.target_sum = 10;
    config.loops.max_number_count = 2;

    let (_, text) = run_transcript(find("sum-break").unwrap(), "4 7", &config).unwrap();
    assert!(text.contains("Target sum 10 reached.\n"));

    let (_, text) = run_transcript(find("sum-break-if").unwrap(), "1 1 100", &config).unwrap();
    assert!(text.ends_with("Final sum: 2\n"));
}

#[test]
fn test_quit_chars_from_config() {
    let mut config = LessonsConfig::default();
    config.calculator.quit_chars = vec!['x'];

    let (_, text) = run_transcript(find("mini-calc").unwrap(), "1 q 2 x", &config).unwrap();
    assert!(text.contains("E: unknown operator 'q'.\n"));
    assert!(text.ends_with("Current value: 1\n> "));
}

#[test]
fn test_monster_level_from_config() {
    let mut config = LessonsConfig::default();
    config.logic.monster_level = 100;

    let (_, text) = run_transcript(find("mixed-expressions").unwrap(), "50 40 0", &config).unwrap();
    assert!(text.ends_with("You beat the monster: 0\n"));
}
