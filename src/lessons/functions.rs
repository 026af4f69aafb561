//! Function parameters, return values and references

use std::io::{self, Write};
use tracing::warn;

use crate::config::LessonsConfig;
use crate::console::{fmt_f64, Console};
use crate::error::{LessonError, LessonResult};
use crate::lesson::Outcome;

/// Print `len` copies of `sep_char` followed by a newline
pub fn print_sepline(out: &mut dyn Write, sep_char: char, sep_len: u32) -> io::Result<()> {
    for _ in 0..sep_len {
        write!(out, "{}", sep_char)?;
    }
    writeln!(out)
}

pub fn sepline(console: &mut Console<'_>, config: &LessonsConfig) -> LessonResult<Outcome> {
    let SeparatorStyle { sep_char, sep_len } = SeparatorStyle::basic(config);

    console.line("Above separator lines.")?;
    print_sepline(console, sep_char, sep_len)?;
    console.line("Between separator lines.")?;
    print_sepline(console, sep_char, sep_len)?;
    console.line("Below separator lines.")?;
    Ok(Outcome::Completed)
}

struct SeparatorStyle {
    sep_char: char,
    sep_len: u32,
}

impl SeparatorStyle {
    fn basic(config: &LessonsConfig) -> Self {
        Self {
            sep_char: config.separator.basic_char,
            sep_len: config.separator.basic_len,
        }
    }
}

pub fn sepline_params(console: &mut Console<'_>, config: &LessonsConfig) -> LessonResult<Outcome> {
    console.line("First separator line:")?;
    print_sepline(console, '=', 60)?;
    console.line("Second separator line:")?;
    print_sepline(console, '_', 80 / 4)?;

    console.prompt("Enter separator character: ")?;
    let sepline_char = console.read_char()?;

    console.prompt("Enter length of separator line: ")?;
    let sepline_length = console.read_unsigned()?;
    if sepline_length > config.separator.max_len {
        return Err(LessonError::invalid_input(
            &sepline_length.to_string(),
            "a length within the separator limit",
        ));
    }
    let doubled = sepline_length
        .checked_mul(2)
        .ok_or_else(|| LessonError::Overflow(format!("double of {}", sepline_length)))?;

    console.line("Your custom separator line:")?;
    print_sepline(console, sepline_char, sepline_length)?;

    console.line("Double the length:")?;
    print_sepline(console, sepline_char, doubled)?;
    Ok(Outcome::Completed)
}

fn f(out: &mut dyn Write, mut y: i32) -> io::Result<()> {
    writeln!(out, "entered f: {}", y)?;
    y = 23;
    writeln!(out, "leaving f: {}", y)
}

fn g(out: &mut dyn Write, mut x: i32) -> io::Result<()> {
    writeln!(out, "entered g: {}", x)?;
    x = 23;
    writeln!(out, "leaving g: {}", x)
}

/// Callees assign to their copy; the caller's `x` stays 42
pub fn pass_by_value(console: &mut Console<'_>, _config: &LessonsConfig) -> LessonResult<Outcome> {
    let x = 42;
    f(console, x)?;
    writeln!(console, "after f: {}", x)?;
    g(console, x)?;
    writeln!(console, "after g: {}", x)?;
    Ok(Outcome::Completed)
}

pub fn sqr(n: f64) -> f64 {
    n * n
}

pub fn square(console: &mut Console<'_>, config: &LessonsConfig) -> LessonResult<Outcome> {
    let x = 5.0;
    writeln!(console, "{} squared: {}", fmt_f64(x), fmt_f64(sqr(x)))?;
    writeln!(console, "{} to the 4th power: {}", fmt_f64(x), fmt_f64(sqr(sqr(x))))?;

    let pi = config.circle.pi;
    let radius = 5;
    writeln!(
        console,
        "area of circle with r={}: {}",
        radius,
        fmt_f64(sqr(f64::from(radius)) * pi)
    )?;
    Ok(Outcome::Completed)
}

/// Make `v` non-negative in place
///
/// `i32::MIN` has no positive counterpart and is left as is.
pub fn absolutize(v: &mut i32) {
    if *v < 0 {
        *v = v.wrapping_neg();
    }
}

pub fn absolutize_lesson(console: &mut Console<'_>, _config: &LessonsConfig) -> LessonResult<Outcome> {
    console.prompt("x: ")?;
    let mut x = console.read_int()?;

    absolutize(&mut x);
    writeln!(console, "absolutized x: {}", x)?;
    Ok(Outcome::Completed)
}

/// Store the smaller of `x` and `y` in `min` and the larger in `max`
pub fn minmax(x: i32, y: i32, min: &mut i32, max: &mut i32) {
    if x < y {
        *min = x;
        *max = y;
    } else {
        *min = y;
        *max = x;
    }
}

pub fn minmax_lesson(console: &mut Console<'_>, _config: &LessonsConfig) -> LessonResult<Outcome> {
    let (a, b) = (42, 14);
    let (mut lo, mut hi) = (0, 0);
    minmax(a, b, &mut lo, &mut hi);
    writeln!(console, "Lower: {}", lo)?;
    writeln!(console, "Higher: {}", hi)?;
    Ok(Outcome::Completed)
}

pub fn swap(a: &mut i32, b: &mut i32) {
    let original_a = *a;
    *a = *b;
    *b = original_a;
}

/// Sort three values in place using [`swap`]
pub fn sort3(a: &mut i32, b: &mut i32, c: &mut i32) {
    // Make sure a is the smallest number
    if *a > *b {
        swap(a, b);
    }
    if *a > *c {
        swap(a, c);
    }

    // Make sure that b and c are in the correct order
    if *b > *c {
        swap(b, c);
    }
}

pub fn swap_sort_three(console: &mut Console<'_>, _config: &LessonsConfig) -> LessonResult<Outcome> {
    console.prompt("Enter three numbers: ")?;
    let mut a = console.read_int()?;
    let mut b = console.read_int()?;
    let mut c = console.read_int()?;

    sort3(&mut a, &mut b, &mut c);
    writeln!(console, "Sorted: {} {} {}", a, b, c)?;
    Ok(Outcome::Completed)
}

/// Integer reciprocal; bad input or zero ends the program with status 1
pub fn reciprocal(console: &mut Console<'_>, _config: &LessonsConfig) -> LessonResult<Outcome> {
    console.prompt("Enter x: ")?;
    let x = match console.read_int() {
        Ok(x) => x,
        Err(e) if e.is_input_error() => {
            warn!(error = %e, "reciprocal input rejected");
            console.line("E: Invalid number.")?;
            return Ok(Outcome::Failed(1));
        }
        Err(e) => return Err(e),
    };

    if x == 0 {
        console.line("E: x is zero.")?;
        return Ok(Outcome::Failed(1));
    }

    writeln!(console, "Reciprocal: {}", 1 / x)?;
    Ok(Outcome::Completed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lesson::{find, run_transcript};

    fn run(name: &str, input: impl AsRef<[u8]>) -> (Outcome, String) {
        let lesson = find(name).unwrap();
        run_transcript(lesson, input, &LessonsConfig::default()).unwrap()
    }

    fn transcript(name: &str, input: &str) -> String {
        run(name, input).1
    }

    #[test]
    fn test_sepline() {
        let dashes = "-".repeat(60);
        assert_eq!(
            transcript("sepline", ""),
            format!(
                "Above separator lines.\n{0}\nBetween separator lines.\n{0}\nBelow separator lines.\n",
                dashes
            )
        );
    }

    #[test]
    fn test_sepline_params() {
        let text = transcript("sepline-params", "*\n3\n");
        let expected = format!(
            "First separator line:\n{}\nSecond separator line:\n{}\n\
             Enter separator character: Enter length of separator line: \
             Your custom separator line:\n***\nDouble the length:\n******\n",
            "=".repeat(60),
            "_".repeat(20)
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn test_sepline_length_limit() {
        let lesson = find("sepline-params").unwrap();
        let result = run_transcript(lesson, "= 100001", &LessonsConfig::default());
        assert!(matches!(result, Err(LessonError::InvalidInput { .. })));
    }

    #[test]
    fn test_pass_by_value() {
        assert_eq!(
            transcript("pass-by-value", ""),
            "entered f: 42\nleaving f: 23\nafter f: 42\n\
             entered g: 42\nleaving g: 23\nafter g: 42\n"
        );
    }

    #[test]
    fn test_square() {
        assert_eq!(
            transcript("square", ""),
            "5 squared: 25\n5 to the 4th power: 625\narea of circle with r=5: 78.5398\n"
        );
    }

    #[test]
    fn test_absolutize() {
        for (input, expected) in [(-7, 7), (0, 0), (12, 12), (i32::MIN, i32::MIN)] {
            let mut v = input;
            absolutize(&mut v);
            assert_eq!(v, expected);
        }
        assert_eq!(transcript("absolutize", "-15"), "x: absolutized x: 15\n");
    }

    #[test]
    fn test_minmax() {
        let (mut lo, mut hi) = (0, 0);
        minmax(3, 3, &mut lo, &mut hi);
        assert_eq!((lo, hi), (3, 3));
        minmax(-1, 8, &mut lo, &mut hi);
        assert_eq!((lo, hi), (-1, 8));

        assert_eq!(transcript("minmax", ""), "Lower: 14\nHigher: 42\n");
    }

    #[test]
    fn test_swap_sort_three() {
        let (mut a, mut b) = (1, 2);
        swap(&mut a, &mut b);
        assert_eq!((a, b), (2, 1));

        assert_eq!(
            transcript("swap-sort-three", "3\n1\n2\n"),
            "Enter three numbers: Sorted: 1 2 3\n"
        );
    }

    #[test]
    fn test_reciprocal_success() {
        assert_eq!(run("reciprocal", "1"), (Outcome::Completed, "Enter x: Reciprocal: 1\n".to_string()));
        assert_eq!(run("reciprocal", "-1").1, "Enter x: Reciprocal: -1\n");
        assert_eq!(run("reciprocal", "4").1, "Enter x: Reciprocal: 0\n");
    }

    #[test]
    fn test_reciprocal_failures_exit_with_one() {
        assert_eq!(
            run("reciprocal", "0"),
            (Outcome::Failed(1), "Enter x: E: x is zero.\n".to_string())
        );
        assert_eq!(
            run("reciprocal", "zero"),
            (Outcome::Failed(1), "Enter x: E: Invalid number.\n".to_string())
        );
        assert_eq!(run("reciprocal", "").0, Outcome::Failed(1));
    }

    #[test]
    fn test_reciprocal_undecodable_input_is_invalid_number() {
        assert_eq!(
            run("reciprocal", b"\xff\n"),
            (Outcome::Failed(1), "Enter x: E: Invalid number.\n".to_string())
        );
    }
}
