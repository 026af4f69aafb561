//! Variables, constants and console input

use std::io::Write;

use crate::config::LessonsConfig;
use crate::console::{fmt_f64, Console};
use crate::error::{LessonError, LessonResult};
use crate::lesson::Outcome;

/// Derived measures of a circle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleMeasures {
    pub diameter: f64,
    pub area: f64,
    pub perimeter: f64,
}

/// Compute diameter, area and perimeter for `radius`
pub fn measure_circle(radius: f64, pi: f64) -> CircleMeasures {
    let area = radius * radius * pi;
    let diameter = 2.0 * radius;
    let perimeter = diameter * pi;
    CircleMeasures {
        diameter,
        area,
        perimeter,
    }
}

/// Integer radius: the diameter stays an integer, area and perimeter do not
pub fn vars_basic(console: &mut Console<'_>, config: &LessonsConfig) -> LessonResult<Outcome> {
    let pi = config.circle.pi;
    let radius = config.circle.fixed_radius;

    let area = f64::from(radius) * f64::from(radius) * pi;
    let diameter = radius
        .checked_mul(2)
        .ok_or_else(|| LessonError::Overflow(format!("diameter of radius {}", radius)))?;
    let perimeter = f64::from(diameter) * pi;

    writeln!(
        console,
        "r = {} ==> d = {}, A = {}, P = {}",
        radius,
        diameter,
        fmt_f64(area),
        fmt_f64(perimeter)
    )?;
    Ok(Outcome::Completed)
}

pub fn circle_input(console: &mut Console<'_>, config: &LessonsConfig) -> LessonResult<Outcome> {
    console.prompt("Enter the circle's radius: ")?;
    let radius = console.read_double()?;

    print_measures(console, radius, config.circle.pi)
}

/// Same computation, but every binding is fixed once it is initialized
pub fn circle_const(console: &mut Console<'_>, config: &LessonsConfig) -> LessonResult<Outcome> {
    const PROMPT: &str = "Enter the circle's radius: ";

    console.prompt(PROMPT)?;
    let radius = console.read_double()?;

    print_measures(console, radius, config.circle.pi)
}

fn print_measures(console: &mut Console<'_>, radius: f64, pi: f64) -> LessonResult<Outcome> {
    let m = measure_circle(radius, pi);
    writeln!(
        console,
        "r = {} ==> d = {}, A = {}, P = {}",
        fmt_f64(radius),
        fmt_f64(m.diameter),
        fmt_f64(m.area),
        fmt_f64(m.perimeter)
    )?;
    Ok(Outcome::Completed)
}
