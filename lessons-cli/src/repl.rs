use anyhow::Result;
use colored::*;
use proc_lessons::{find, LessonsConfig, Outcome};
use rustyline::{DefaultEditor, Result as RustylineResult};
use tracing::debug;

use crate::config::ReplConfig;
use crate::{print_catalog, run_on_terminal};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    List,
    Run { name: String },
    Config,
    Help,
    Quit,
}

pub struct ReplInterface {
    editor: DefaultEditor,
    config: ReplConfig,
    lessons_config: LessonsConfig,
}

impl ReplInterface {
    pub fn new(config: ReplConfig, lessons_config: LessonsConfig) -> Result<Self> {
        let mut editor = DefaultEditor::new()?;

        // Load history if configured
        if let Some(history_file) = &config.history_file {
            let _ = editor.load_history(history_file);
        }

        Ok(Self {
            editor,
            config,
            lessons_config,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        self.display_welcome();

        loop {
            let input = match self.read_input() {
                Ok(input) => input,
                Err(_) => {
                    println!("\nGoodbye!");
                    break;
                }
            };
            if input.trim().is_empty() {
                continue;
            }
            let _ = self.editor.add_history_entry(input.as_str());

            match parse_command(&input) {
                Ok(ReplCommand::Quit) => {
                    println!("Goodbye!");
                    break;
                }
                Ok(command) => {
                    if let Err(e) = self.handle(command) {
                        eprintln!("{}", format!("Error: {}", e).red());
                    }
                }
                Err(e) => {
                    eprintln!("{}", format!("Error: {}", e).red());
                }
            }
        }

        // Save history if configured
        if let Some(history_file) = &self.config.history_file {
            let _ = self.editor.save_history(history_file);
        }

        Ok(())
    }

    fn handle(&mut self, command: ReplCommand) -> Result<()> {
        debug!(?command, "shell command");
        match command {
            ReplCommand::List => print_catalog(),
            ReplCommand::Run { name } => {
                let lesson = find(&name)?;
                let outcome = run_on_terminal(lesson, &self.lessons_config)?;
                println!();
                match outcome {
                    Outcome::Completed => println!("{}", "[lesson completed]".dimmed()),
                    Outcome::Failed(code) => {
                        println!("{}", format!("[lesson exited with status {}]", code).yellow())
                    }
                }
            }
            ReplCommand::Config => print!("{}", self.lessons_config.to_toml()?),
            ReplCommand::Help => display_help(),
            ReplCommand::Quit => {}
        }
        Ok(())
    }

    fn display_welcome(&self) {
        println!("{}", "Procedural programming lessons".bright_blue().bold());
        println!("{}", "Type 'list' to see the lessons, 'run <name>' to start one".cyan());
        println!("{}", "Type 'help' for available commands".dimmed());
        println!();
    }

    fn read_input(&mut self) -> RustylineResult<String> {
        self.editor.readline(&self.config.prompt)
    }
}

fn display_help() {
    println!("{}", "Commands:".bold());
    println!("  list          Show all lessons");
    println!("  run <name>    Run a lesson (also: just type its name)");
    println!("  config        Show the effective configuration");
    println!("  help          Show this help");
    println!("  quit          Leave the shell");
}

pub fn parse_command(input: &str) -> Result<ReplCommand> {
    let parts: Vec<&str> = input.split_whitespace().collect();

    match parts.as_slice() {
        ["list"] | ["ls"] => Ok(ReplCommand::List),
        ["run", name] => Ok(ReplCommand::Run {
            name: name.to_string(),
        }),
        ["run"] => Err(anyhow::anyhow!("Usage: run <name>")),
        ["config"] => Ok(ReplCommand::Config),
        ["help"] => Ok(ReplCommand::Help),
        ["quit"] | ["exit"] => Ok(ReplCommand::Quit),
        [] => Err(anyhow::anyhow!("Empty command")),
        [name] if find(name).is_ok() => Ok(ReplCommand::Run {
            name: name.to_string(),
        }),
        _ => Err(anyhow::anyhow!(
            "Unknown command: '{}'. Type 'help' for available commands.",
            input.trim()
        )),
    }
}
