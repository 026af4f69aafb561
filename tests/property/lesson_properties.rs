//! Property-based tests for the lessons with real algorithmic content

use proptest::prelude::*;
use proc_lessons::lessons::conditionals::sort_three_inline;
use proc_lessons::lessons::functions::sort3;
use proc_lessons::lessons::loops::{draw_pyramid, draw_rectangle};
use proc_lessons::{find, run_transcript, Accumulator, CalcError, LessonsConfig};

/// Generate operator characters, mostly valid ones
fn arb_operator() -> impl Strategy<Value = char> {
    prop::sample::select(vec!['+', '-', '*', '/', '%', '^'])
}

fn rendered(draw: impl FnOnce(&mut Vec<u8>)) -> String {
    let mut out = Vec::new();
    draw(&mut out);
    String::from_utf8(out).unwrap()
}

proptest! {
    #[test]
    fn prop_sort_three_inline_orders_a_permutation(a in any::<i32>(), b in any::<i32>(), c in any::<i32>()) {
        let (x, y, z) = sort_three_inline(a, b, c);

        prop_assert!(x <= y && y <= z);

        let mut input = [a, b, c];
        input.sort();
        prop_assert_eq!([x, y, z], input);
    }

    #[test]
    fn prop_swap_sort_matches_inline_sort(a in any::<i32>(), b in any::<i32>(), c in any::<i32>()) {
        let (mut x, mut y, mut z) = (a, b, c);
        sort3(&mut x, &mut y, &mut z);

        prop_assert_eq!((x, y, z), sort_three_inline(a, b, c));
    }

    #[test]
    fn prop_sort_lessons_print_sorted_triple(a in -1000i32..1000, b in -1000i32..1000, c in -1000i32..1000) {
        let (x, y, z) = sort_three_inline(a, b, c);
        let expected = format!("Enter three numbers: Sorted: {} {} {}\n", x, y, z);
        let input = format!("{} {} {}", a, b, c);
        let config = LessonsConfig::default();

        for name in ["sort-three", "swap-sort-three"] {
            let (_, text) = run_transcript(find(name).unwrap(), &input, &config).unwrap();
            prop_assert_eq!(&text, &expected);
        }
    }

    #[test]
    fn prop_rectangle_dimensions(width in 0u32..40, height in 0u32..40) {
        let text = rendered(|out| draw_rectangle(out, width, height, '#').unwrap());
        let lines: Vec<&str> = text.lines().collect();

        prop_assert_eq!(lines.len(), height as usize);
        for line in lines {
            prop_assert_eq!(line.chars().count(), width as usize);
        }
    }

    #[test]
    fn prop_pyramid_row_widths(height in 0u32..40, centered in any::<bool>()) {
        let text = rendered(|out| draw_pyramid(out, height, centered, '#').unwrap());
        let lines: Vec<&str> = text.lines().collect();

        prop_assert_eq!(lines.len(), height as usize);
        for (y, line) in lines.iter().enumerate() {
            let blocks = line.chars().filter(|&c| c == '#').count();
            if centered {
                prop_assert_eq!(blocks, 2 * y + 1);
                prop_assert_eq!(line.chars().count(), height as usize + y);
            } else {
                prop_assert_eq!(blocks, y + 1);
                prop_assert_eq!(line.chars().count(), y + 1);
            }
        }
    }

    #[test]
    fn prop_division_by_zero_keeps_value(start in -1e6f64..1e6) {
        let mut acc = Accumulator::new(start);
        prop_assert_eq!(acc.apply('/', 0.0), Err(CalcError::DivisionByZero));
        prop_assert_eq!(acc.value(), start);
    }

    #[test]
    fn prop_operator_applied_exactly_once(
        start in -1e3f64..1e3,
        op in arb_operator(),
        operand in 1f64..1e3,
    ) {
        let mut acc = Accumulator::new(start);
        let result = acc.apply(op, operand);

        let expected = match op {
            '+' => Some(start + operand),
            '-' => Some(start - operand),
            '*' => Some(start * operand),
            '/' => Some(start / operand),
            _ => None,
        };
        match expected {
            Some(value) => {
                prop_assert_eq!(result, Ok(value));
                prop_assert_eq!(acc.value(), value);
            }
            None => {
                prop_assert_eq!(result, Err(CalcError::UnknownOperator(op)));
                prop_assert_eq!(acc.value(), start);
            }
        }
    }

    #[test]
    fn prop_mini_calc_prints_one_value_per_command(ops in prop::collection::vec((arb_operator(), 0u8..5), 0..20)) {
        let mut input = String::from("1\n");
        for (op, operand) in &ops {
            input.push_str(&format!("{} {}\n", op, operand));
        }
        input.push_str("q\n");

        let (_, text) = run_transcript(find("mini-calc").unwrap(), &input, &LessonsConfig::default()).unwrap();
        prop_assert_eq!(text.matches("Current value: ").count(), ops.len());
        prop_assert_eq!(text.matches("> ").count(), ops.len() + 1);
    }
}
