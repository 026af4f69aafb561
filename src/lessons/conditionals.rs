//! if/else chains and match-based dispatch

use std::io::Write;
use tracing::warn;

use crate::calculator::Operator;
use crate::config::LessonsConfig;
use crate::console::{fmt_f64, Console};
use crate::error::LessonResult;
use crate::lesson::Outcome;

const MIN_AGE: i32 = 16;
const MIN_HEIGHT_CM: i32 = 160;

/// Only younger riders are asked for their height
pub fn nested_ride(console: &mut Console<'_>, _config: &LessonsConfig) -> LessonResult<Outcome> {
    console.prompt("How old are you? ")?;
    let age = console.read_int()?;

    if age < MIN_AGE {
        console.prompt("How tall are you? ")?;
        let height = console.read_int()?;

        if height < MIN_HEIGHT_CM {
            console.line("Sorry, you are not tall enough.")?;
        } else {
            console.line("You are tall enough to take a ride!")?;
        }
    } else {
        console.line("You are old enough to take a ride!")?;
    }
    Ok(Outcome::Completed)
}

/// Order three values with three compare-and-swap steps
pub fn sort_three_inline(mut a: i32, mut b: i32, mut c: i32) -> (i32, i32, i32) {
    // Make sure a is the smallest number
    if a > b {
        (a, b) = (b, a);
    }
    if a > c {
        (a, c) = (c, a);
    }

    // Make sure that b and c are in the correct order
    if b > c {
        (b, c) = (c, b);
    }
    (a, b, c)
}

pub fn sort_three(console: &mut Console<'_>, _config: &LessonsConfig) -> LessonResult<Outcome> {
    console.prompt("Enter three numbers: ")?;
    let a = console.read_int()?;
    let b = console.read_int()?;
    let c = console.read_int()?;

    let (a, b, c) = sort_three_inline(a, b, c);
    writeln!(console, "Sorted: {} {} {}", a, b, c)?;
    Ok(Outcome::Completed)
}

pub fn switch_calc(console: &mut Console<'_>, _config: &LessonsConfig) -> LessonResult<Outcome> {
    console.prompt("Enter left-hand side operand: ")?;
    let lhs = console.read_double()?;
    console.prompt("Enter right-hand side operand: ")?;
    let rhs = console.read_double()?;

    console.prompt("Enter operator: ")?;
    let op = console.read_char()?;

    match Operator::from_char(op) {
        Some(operator) => {
            let result = operator.apply(lhs, rhs);
            writeln!(
                console,
                "{} {} {} = {}",
                fmt_f64(lhs),
                operator,
                fmt_f64(rhs),
                fmt_f64(result)
            )?;
        }
        None => {
            warn!(%op, "unknown operator");
            writeln!(console, "E: '{}' is not a known operator.", op)?;
        }
    }
    Ok(Outcome::Completed)
}
