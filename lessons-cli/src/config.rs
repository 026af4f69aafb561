use std::path::Path;

use anyhow::Result;
use proc_lessons::LessonsConfig;

#[derive(Debug, Clone)]
pub struct ReplConfig {
    pub prompt: String,
    pub history_file: Option<String>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: "lessons> ".to_string(),
            history_file: Some(".lessons_history".to_string()),
        }
    }
}

/// Load the lesson config from `path`, or fall back to the defaults
pub fn load_lessons_config(path: Option<&Path>) -> Result<LessonsConfig> {
    match path {
        Some(path) => Ok(LessonsConfig::from_file(path)?),
        None => Ok(LessonsConfig::default()),
    }
}
