//! Lesson descriptors, the catalog and the runner

use std::fmt;
use serde::{Deserialize, Serialize};
use tracing::{info, info_span, warn};
use uuid::Uuid;

use crate::config::LessonsConfig;
use crate::console::Console;
use crate::error::{LessonError, LessonResult};
use crate::lessons;

/// Which language concept a lesson demonstrates
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Variables,
    Logic,
    Conditionals,
    Loops,
    Functions,
    UserTypes,
}

impl Category {
    /// Get the display name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Category::Variables => "Variables",
            Category::Logic => "Logic",
            Category::Conditionals => "Conditionals",
            Category::Loops => "Loops",
            Category::Functions => "Functions",
            Category::UserTypes => "User types",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// How a lesson program ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Ran to the end, exit status 0
    Completed,
    /// Returned early with a nonzero exit status
    Failed(u8),
}

impl Outcome {
    pub fn exit_code(&self) -> u8 {
        match self {
            Outcome::Completed => 0,
            Outcome::Failed(code) => *code,
        }
    }
}

/// Signature every lesson program has
pub type Program = fn(&mut Console<'_>, &LessonsConfig) -> LessonResult<Outcome>;

/// A single runnable lesson
#[derive(Clone, Copy)]
pub struct Lesson {
    pub name: &'static str,
    pub category: Category,
    pub summary: &'static str,
    pub program: Program,
}

impl fmt::Debug for Lesson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lesson")
            .field("name", &self.name)
            .field("category", &self.category)
            .finish()
    }
}

/// Serializable listing entry for a lesson
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonInfo {
    pub name: String,
    pub category: Category,
    pub summary: String,
}

impl Lesson {
    /// Run the lesson program inside a tracing span tagged with a fresh run id
    pub fn run(&self, console: &mut Console<'_>, config: &LessonsConfig) -> LessonResult<Outcome> {
        let run_id = Uuid::new_v4();
        let span = info_span!("lesson", name = self.name, %run_id);
        let _guard = span.enter();

        info!(category = %self.category, "lesson started");
        let result = (self.program)(console, config);
        match &result {
            Ok(outcome) => info!(exit_code = outcome.exit_code(), "lesson finished"),
            Err(e) => warn!(error = %e, "lesson aborted"),
        }
        result
    }

    pub fn info(&self) -> LessonInfo {
        LessonInfo {
            name: self.name.to_string(),
            category: self.category,
            summary: self.summary.to_string(),
        }
    }
}

/// Every lesson, grouped by category
pub fn catalog() -> &'static [Lesson] {
    lessons::ALL
}

/// Look up a lesson by its kebab-case name
pub fn find(name: &str) -> LessonResult<&'static Lesson> {
    catalog()
        .iter()
        .find(|lesson| lesson.name == name)
        .ok_or_else(|| LessonError::UnknownLesson(name.to_string()))
}

/// Run a lesson against in-memory input and capture what it printed
///
/// Input is taken as raw bytes so undecodable stdin can be replayed.
pub fn run_transcript(
    lesson: &Lesson,
    input: impl AsRef<[u8]>,
    config: &LessonsConfig,
) -> LessonResult<(Outcome, String)> {
    let mut reader = input.as_ref();
    let mut output = Vec::new();
    let outcome = {
        let mut console = Console::new(&mut reader, &mut output);
        lesson.run(&mut console, config)?
    };
    let transcript = String::from_utf8_lossy(&output).into_owned();
    Ok((outcome, transcript))
}
