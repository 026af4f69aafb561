//! Exact transcripts for the lessons with the most interesting branches

use proc_lessons::{find, run_transcript, LessonError, LessonsConfig, Outcome};

fn run(name: &str, input: &str) -> Result<(Outcome, String), LessonError> {
    run_transcript(find(name).unwrap(), input, &LessonsConfig::default())
}

#[test]
fn test_centered_pyramid_transcript() {
    let (outcome, text) = run("pyramid", "4\n1\n").unwrap();
    assert_eq!(outcome, Outcome::Completed);
    assert_eq!(
        text,
        "Enter the pyramid's height: Should the tip be centered (0/1)? \
         \x20  #\n  ###\n #####\n#######\n"
    );
}

#[test]
fn test_mini_calc_fractional_values() {
    let (_, text) = run("mini-calc", "1\n/ 3\n* 1000000\nq\n").unwrap();
    assert!(text.contains("Current value: 0.333333\n"));
    assert!(text.contains("Current value: 333333\n"));
}

#[test]
fn test_mini_calc_operator_glued_to_operand() {
    let (_, text) = run("mini-calc", "2\n*21\nQ\n").unwrap();
    assert!(text.contains("> Current value: 42\n"));
}

#[test]
fn test_invalid_numbers_are_input_errors() {
    let err = run("sort-three", "1 two 3").unwrap_err();
    assert!(err.is_input_error());

    let err = run("rectangle", "-1 2").unwrap_err();
    assert!(matches!(err, LessonError::InvalidInput { .. }));

    let err = run("pyramid", "3 yes").unwrap_err();
    assert!(matches!(err, LessonError::InvalidInput { .. }));
}

#[test]
fn test_reciprocal_exit_status() {
    let (outcome, text) = run("reciprocal", "0").unwrap();
    assert_eq!(outcome.exit_code(), 1);
    assert!(!text.contains("Reciprocal"));

    let (outcome, _) = run("reciprocal", "3.5").unwrap();
    assert_eq!(outcome, Outcome::Failed(1));
}

#[test]
fn test_unknown_lesson() {
    assert!(matches!(find("hello"), Err(LessonError::UnknownLesson(_))));
}
