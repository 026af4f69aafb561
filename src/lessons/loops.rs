//! while, for and do-while style loops

use std::io::{self, Write};
use tracing::{debug, warn};

use crate::calculator::Accumulator;
use crate::config::LessonsConfig;
use crate::console::{fmt_f64, Console};
use crate::error::LessonResult;
use crate::lesson::Outcome;

pub fn while_counter(console: &mut Console<'_>, _config: &LessonsConfig) -> LessonResult<Outcome> {
    console.prompt("Enter number of iterations: ")?;
    let n = console.read_unsigned()?;

    let mut i = 0u32;
    while i < n {
        writeln!(console, "Iteration with i = {}", i)?;
        i += 1;
    }
    writeln!(console, "Loop left with i = {}", i)?;
    Ok(Outcome::Completed)
}

/// Paint `height` rows of `width` brush characters
pub fn draw_rectangle(out: &mut dyn Write, width: u32, height: u32, brush: char) -> io::Result<()> {
    for _ in 0..height {
        for _ in 0..width {
            write!(out, "{}", brush)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Build a pyramid of `height` rows
///
/// Row `y` has `y + 1` blocks, or `2y + 1` blocks behind `height - 1 - y`
/// spaces when the tip is centered.
pub fn draw_pyramid(out: &mut dyn Write, height: u32, centered: bool, block: char) -> io::Result<()> {
    let block_factor = if centered { 2 } else { 1 };

    for y in 0..height {
        if centered {
            for _ in 0..height - 1 - y {
                write!(out, " ")?;
            }
        }
        for _ in 0..u64::from(y) * block_factor + 1 {
            write!(out, "{}", block)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

pub fn rectangle(console: &mut Console<'_>, config: &LessonsConfig) -> LessonResult<Outcome> {
    console.prompt("width: ")?;
    let width = console.read_unsigned()?;
    console.prompt("height: ")?;
    let height = console.read_unsigned()?;

    writeln!(console)?;
    draw_rectangle(console, width, height, config.loops.brush_char)?;
    Ok(Outcome::Completed)
}

pub fn pyramid(console: &mut Console<'_>, config: &LessonsConfig) -> LessonResult<Outcome> {
    console.prompt("Enter the pyramid's height: ")?;
    let height = console.read_unsigned()?;
    console.prompt("Should the tip be centered (0/1)? ")?;
    let centered = console.read_bool()?;

    draw_pyramid(console, height, centered, config.loops.block_char)?;
    Ok(Outcome::Completed)
}

/// Read numbers until the target sum is reached, leaving the loop with `break`
pub fn sum_break(console: &mut Console<'_>, config: &LessonsConfig) -> LessonResult<Outcome> {
    let target_sum = config.loops.target_sum;

    console.line("Enter number:")?;
    let mut sum = 0i64;
    for _ in 0..config.loops.max_number_count {
        let n = console.read_int()?;
        sum += i64::from(n);

        if sum >= target_sum {
            writeln!(console, "Target sum {} reached.", target_sum)?;
            break;
        }
        console.line("Sum not reached yet.")?;
    }
    writeln!(console, "Final sum: {}", sum)?;
    Ok(Outcome::Completed)
}

/// Same as [`sum_break`], with the target check moved into the loop condition
pub fn sum_break_if(console: &mut Console<'_>, config: &LessonsConfig) -> LessonResult<Outcome> {
    let target_sum = config.loops.target_sum;

    console.line("Enter number:")?;
    let mut sum = 0i64;
    let mut i = 0;
    while i < config.loops.max_number_count && sum < target_sum {
        let n = console.read_int()?;
        sum += i64::from(n);

        if sum < target_sum {
            console.line("Sum not reached yet.")?;
        }
        i += 1;
    }
    if sum >= target_sum {
        writeln!(console, "Target sum {} reached.", target_sum)?;
    }

    writeln!(console, "Final sum: {}", sum)?;
    Ok(Outcome::Completed)
}

/// Body runs at least once; entering 0 adds nothing and ends the loop
pub fn add_until_zero(console: &mut Console<'_>, _config: &LessonsConfig) -> LessonResult<Outcome> {
    console.prompt("Enter initial value: ")?;
    let mut value = console.read_double()?;

    loop {
        console.prompt("Enter value to add or 0 to exit: ")?;
        let d = console.read_double()?;
        value += d;
        writeln!(console, "Current value: {}", fmt_f64(value))?;

        if d == 0.0 {
            break;
        }
    }
    Ok(Outcome::Completed)
}

/// Operator/operand loop over a running value until a quit character
///
/// Running out of input ends the session the same way a quit character does.
pub fn mini_calc(console: &mut Console<'_>, config: &LessonsConfig) -> LessonResult<Outcome> {
    console.prompt("Enter initial value: ")?;
    let mut acc = Accumulator::new(console.read_double()?);

    console.line("Enter an operator followed by an operand.")?;
    loop {
        console.prompt("> ")?;
        let op = match console.try_read_char()? {
            Some(op) if !config.calculator.is_quit(op) => op,
            _ => break,
        };
        let operand = console.read_double()?;

        match acc.apply(op, operand) {
            Ok(value) => debug!(%op, operand, value, "applied"),
            Err(e) => {
                warn!(%op, operand, error = %e, "rejected");
                writeln!(console, "E: {}", e)?;
            }
        }
        writeln!(console, "Current value: {}", fmt_f64(acc.value()))?;
    }
    Ok(Outcome::Completed)
}
