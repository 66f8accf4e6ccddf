use super::print::{print_rejection, print_result, OutputOptions};
use super::setup::{Cli, Commands};
use clap::Parser;
use coursebox::api::CourseboxApi;
use coursebox::config::CourseboxConfig;
use coursebox::error::{BoxError, Result};
use coursebox::store::fs::FileStore;
use directories::ProjectDirs;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::prelude::*;

const HOME_ENV: &str = "COURSEBOX_HOME";
const PROMPT: &str = "> ";
const GREETING: &str = "Hello from coursebox! Type 'help' to see what you can do.";

/// Runs the binary and returns its exit code.
pub fn run() -> i32 {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    if !io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    match dispatch(cli) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

/// Logs go to stderr so stdout carries only command output.
fn init_tracing(verbose: bool) {
    let directives = if verbose {
        "coursebox=debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "coursebox=error".into())
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(directives))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn dispatch(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir)?;
    tracing::debug!(data_dir = %data_dir.display(), "using data directory");

    if let Some(Commands::Config { key, value }) = cli.command {
        return handle_config(&data_dir, key.as_deref(), value.as_deref());
    }

    let mut api = CourseboxApi::open(&data_dir)?;
    let options = OutputOptions {
        route_only: cli.route,
        width: api.config().wrap_width,
    };

    if cli.exec.is_empty() {
        run_session(&mut api, options)
    } else {
        for line in &cli.exec {
            if !step(&mut api, line, options)? {
                break;
            }
        }
        Ok(())
    }
}

fn resolve_data_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "coursebox", "coursebox")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            BoxError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                "could not determine a data directory; use --data-dir",
            ))
        })
}

/// Reads stdin until `bye` or end of input.
fn run_session(api: &mut CourseboxApi<FileStore>, options: OutputOptions) -> Result<()> {
    let interactive = io::stdin().is_terminal();
    if interactive {
        println!("{}", GREETING);
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            print!("{}", PROMPT);
            io::stdout().flush()?;
        }
        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        if !step(api, &line, options)? {
            return Ok(());
        }
    }
}

/// Runs one line. Returns `false` once the session should end.
/// Rejected input is printed and the session goes on; storage failures end it.
fn step(api: &mut CourseboxApi<FileStore>, line: &str, options: OutputOptions) -> Result<bool> {
    match api.execute(line) {
        Ok(result) => {
            print_result(&result, options);
            Ok(!result.exit)
        }
        Err(e) if e.is_recoverable() => {
            print_rejection(&e, options.width);
            Ok(true)
        }
        Err(e) => Err(e),
    }
}

fn handle_config(data_dir: &Path, key: Option<&str>, value: Option<&str>) -> Result<()> {
    let mut config = CourseboxConfig::load(data_dir)?;
    match (key, value) {
        (None, _) => {
            for key in CourseboxConfig::KEYS {
                println!("{} = {}", key, config.get(key)?);
            }
        }
        (Some(key), None) => println!("{} = {}", key, config.get(key)?),
        (Some(key), Some(value)) => {
            config.set(key, value)?;
            config.save(data_dir)?;
            tracing::info!(key, value, "config updated");
            println!("{} = {}", key, config.get(key)?);
        }
    }
    Ok(())
}
