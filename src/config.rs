//! Configuration management for the lesson runner

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use crate::error::LessonError;

/// Main configuration shared by all lessons
///
/// Every value defaults to the constant the lessons were written with, so an
/// empty config file reproduces the classic transcripts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LessonsConfig {
    /// Circle calculator constants
    pub circle: CircleConfig,
    /// Boolean logic constants
    pub logic: LogicConfig,
    /// Loop lesson constants
    pub loops: LoopConfig,
    /// Calculator loop settings
    pub calculator: CalculatorConfig,
    /// Separator line settings
    pub separator: SeparatorConfig,
}

/// Constants used by the circle lessons
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircleConfig {
    /// Value of pi the lessons approximate with
    pub pi: f64,
    /// Radius used by the lesson that reads no input
    pub fixed_radius: i32,
}

impl Default for CircleConfig {
    fn default() -> Self {
        Self {
            pi: 3.14159265359,
            fixed_radius: 3,
        }
    }
}

/// Constants used by the logic lessons
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogicConfig {
    /// Level the player has to exceed to beat the monster
    pub monster_level: i32,
}

impl Default for LogicConfig {
    fn default() -> Self {
        Self { monster_level: 12 }
    }
}

/// Constants used by the loop lessons
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoopConfig {
    /// Maximum numbers read by the summing loops
    pub max_number_count: u32,
    /// Sum at which the summing loops stop
    pub target_sum: i64,
    /// Character used to paint rectangles
    pub brush_char: char,
    /// Character used to build pyramids
    pub block_char: char,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            max_number_count: 10,
            target_sum: 256,
            brush_char: '#',
            block_char: '#',
        }
    }
}

/// Settings for the interactive calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Characters that end the calculator session
    pub quit_chars: Vec<char>,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            quit_chars: vec!['q', 'Q'],
        }
    }
}

impl CalculatorConfig {
    /// Whether `op` ends the session
    pub fn is_quit(&self, op: char) -> bool {
        self.quit_chars.contains(&op)
    }
}

/// Settings for the separator line lessons
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeparatorConfig {
    /// Character of the parameterless separator
    pub basic_char: char,
    /// Length of the parameterless separator
    pub basic_len: u32,
    /// Longest line a user may request
    pub max_len: u32,
}

impl Default for SeparatorConfig {
    fn default() -> Self {
        Self {
            basic_char: '-',
            basic_len: 60,
            max_len: 100_000,
        }
    }
}

impl LessonsConfig {
    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LessonError> {
        let content = fs::read_to_string(path).map_err(|e| LessonError::Configuration {
            message: format!("Failed to read config file: {}", e),
            field: "config_file".to_string(),
        })?;

        let config: LessonsConfig =
            toml::from_str(&content).map_err(|e| LessonError::Configuration {
                message: format!("Failed to parse config file: {}", e),
                field: "config_format".to_string(),
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), LessonError> {
        let content = self.to_toml()?;

        fs::write(path, content).map_err(|e| LessonError::Configuration {
            message: format!("Failed to write config file: {}", e),
            field: "config_write".to_string(),
        })?;

        Ok(())
    }

    /// Render the configuration as TOML
    pub fn to_toml(&self) -> Result<String, LessonError> {
        toml::to_string_pretty(self).map_err(|e| LessonError::Configuration {
            message: format!("Failed to serialize config: {}", e),
            field: "config_serialization".to_string(),
        })
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), LessonError> {
        if !(self.circle.pi > 0.0) {
            return Err(LessonError::Configuration {
                message: "Pi must be a positive number".to_string(),
                field: "circle.pi".to_string(),
            });
        }

        if self.loops.max_number_count == 0 {
            return Err(LessonError::Configuration {
                message: "Max number count must be greater than 0".to_string(),
                field: "loops.max_number_count".to_string(),
            });
        }

        if self.calculator.quit_chars.is_empty() {
            return Err(LessonError::Configuration {
                message: "At least one quit character is required".to_string(),
                field: "calculator.quit_chars".to_string(),
            });
        }

        if let Some(c) = self
            .calculator
            .quit_chars
            .iter()
            .find(|c| matches!(**c, '+' | '-' | '*' | '/') || c.is_whitespace())
        {
            return Err(LessonError::Configuration {
                message: format!("'{}' cannot be used as a quit character", c),
                field: "calculator.quit_chars".to_string(),
            });
        }

        if self.separator.max_len == 0 {
            return Err(LessonError::Configuration {
                message: "Separator length limit must be greater than 0".to_string(),
                field: "separator.max_len".to_string(),
            });
        }

        if self.separator.basic_len > self.separator.max_len {
            return Err(LessonError::Configuration {
                message: "Basic separator exceeds the separator length limit".to_string(),
                field: "separator.basic_len".to_string(),
            });
        }

        Ok(())
    }
}
