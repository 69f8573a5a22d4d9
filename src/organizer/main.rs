use clap::Parser;
use colored::Colorize;
use directories::ProjectDirs;
use organizer::api::{parse_line, OrganizerApi};
use organizer::config::OrganizerConfig;
use organizer::error::{OrganizerError, Result};
use organizer::store::fs::FileStore;
use organizer::store::SnapshotStore;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod args;
mod render;
use args::Cli;
use render::{print_help, print_messages, print_result};

const HOME_ENV: &str = "ORGANIZER_HOME";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let data_dir = resolve_data_dir(&cli)?;
    let config = OrganizerConfig::load(&data_dir).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "config unreadable, using defaults");
        OrganizerConfig::default()
    });
    let mut api = OrganizerApi::open(FileStore::new(data_dir), config);

    if let Some((verb, args)) = cli.command.split_first() {
        let result = api.run(verb, args);
        print_result(&result, api.registry());
    } else {
        run_console(&mut api)?;
    }

    api.save()
}

fn init_tracing(verbose: bool) {
    let env_filter = if verbose {
        EnvFilter::new("organizer=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(false),
        )
        .init();
}

fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "organizer", "organizer")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| OrganizerError::Config("could not determine a data directory".into()))
}

fn run_console<S: SnapshotStore>(api: &mut OrganizerApi<S>) -> Result<()> {
    println!("Welcome to the assistant bot!");
    print_help(api.registry());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let Some(line) = prompt(&mut lines, "Enter a command: ")? else {
            break;
        };
        let mut result = api.execute(&line);

        if let Some(suggestion) = result.suggestions.first().cloned() {
            print_messages(&result.messages);
            let question = format!("Run '{}' instead? [y/N]: ", suggestion);
            let answer = prompt(&mut lines, &question)?.unwrap_or_default();
            if answer.trim().eq_ignore_ascii_case("y") {
                let args = parse_line(&line).map(|(_, args)| args).unwrap_or_default();
                result = api.run(&suggestion, &args);
            } else {
                println!("{}", "Command not run.".dimmed());
                continue;
            }
        }

        print_result(&result, api.registry());
        if result.exit {
            break;
        }
    }
    Ok(())
}

/// Prints `text` and reads one line. `None` on end of input.
fn prompt<B: BufRead>(lines: &mut io::Lines<B>, text: &str) -> Result<Option<String>> {
    print!("{}", text);
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?)),
        None => {
            println!();
            Ok(None)
        }
    }
}
