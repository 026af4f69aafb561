//! Proc Lessons - introductory procedural programming lessons as console programs
//!
//! Each lesson is a tiny self-contained program demonstrating one concept:
//! - variables and console input
//! - booleans, comparisons and conditionals
//! - while/for/do-while style loops
//! - function parameters, return values and references
//! - user-defined aggregate types
//!
//! Lessons share nothing but the [`Console`] they talk through and the
//! [`LessonsConfig`] holding their constants.

pub mod calculator;
pub mod config;
pub mod console;
pub mod error;
pub mod lesson;
pub mod lessons;
pub mod player;

// Re-export commonly used types for convenience
pub use error::{LessonError, LessonResult};
pub use config::LessonsConfig;
pub use console::{fmt_bool, fmt_f64, Console};
pub use lesson::{catalog, find, run_transcript, Category, Lesson, LessonInfo, Outcome};
pub use calculator::{Accumulator, CalcError, Operator};
pub use player::{EncapsulatedPlayer, Player, Point, PositionedPlayer};
