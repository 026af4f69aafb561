use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use proc_lessons::error::logging;
use proc_lessons::{catalog, find, Console, Lesson, LessonsConfig, Outcome};

mod config;
mod repl;

use config::{load_lessons_config, ReplConfig};
use repl::ReplInterface;

#[derive(Parser)]
#[command(name = "lessons")]
#[command(about = "Run the introductory procedural programming lessons")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level written to stderr (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all lessons
    List {
        /// Print the list as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run a lesson on this terminal
    Run {
        /// Lesson name, as shown by `list`
        name: String,
    },
    /// Print the effective configuration as TOML
    ShowConfig,
    /// Interactive shell for picking and running lessons
    Shell,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(&cli) {
        eprintln!("{}", format!("Error: {}", e).red());
        return ExitCode::FAILURE;
    }

    match execute(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}", format!("Error: {:#}", e).red());
            ExitCode::FAILURE
        }
    }
}

fn init_logging(cli: &Cli) -> Result<()> {
    let mut log_config = logging::config_from_env();
    if let Some(level) = &cli.log_level {
        log_config.level = level
            .parse()
            .map_err(|_| anyhow::anyhow!("Invalid log level: '{}'", level))?;
    }
    if cli.log_json {
        log_config.format = logging::LogFormat::Json;
    }
    logging::init_logging(log_config).map_err(|e| anyhow::anyhow!(e))?;
    Ok(())
}

fn execute(cli: Cli) -> Result<ExitCode> {
    let config = load_lessons_config(cli.config.as_deref())?;

    match cli.command {
        Commands::List { json } => {
            if json {
                let infos: Vec<_> = catalog().iter().map(Lesson::info).collect();
                println!("{}", serde_json::to_string_pretty(&infos)?);
            } else {
                print_catalog();
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Run { name } => {
            let lesson = find(&name)?;
            let outcome = run_on_terminal(lesson, &config)?;
            Ok(ExitCode::from(outcome.exit_code()))
        }
        Commands::ShowConfig => {
            print!("{}", config.to_toml()?);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Shell => {
            let mut shell = ReplInterface::new(ReplConfig::default(), config)?;
            shell.run()?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Run a lesson against the process's stdin and stdout
pub fn run_on_terminal(lesson: &Lesson, config: &LessonsConfig) -> Result<Outcome> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut output = stdout.lock();

    let outcome = {
        let mut console = Console::new(&mut input, &mut output);
        lesson.run(&mut console, config)?
    };
    output.flush()?;
    Ok(outcome)
}

pub fn print_catalog() {
    let mut current = None;
    for lesson in catalog() {
        if current != Some(lesson.category) {
            if current.is_some() {
                println!();
            }
            println!("{}", lesson.category.name().bright_blue().bold());
            current = Some(lesson.category);
        }
        println!("  {} {}", format!("{:<20}", lesson.name).green(), lesson.summary.dimmed());
    }
}
