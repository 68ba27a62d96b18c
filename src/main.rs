use cowsay_rs::config::{load_config, AppConfig, CliArgs, Command};
use cowsay_rs::{catalog, command::MooCommand, mood, render, RenderRequest};

use anyhow::{bail, Context, Result};
use clap::{CommandFactory, Parser};
use std::io::{self, BufRead, IsTerminal};
use tracing::{debug, warn};

fn main() -> Result<()> {
    // Parse command line arguments
    let args = CliArgs::parse();

    // Load configuration
    let config = load_config(&args)?;
    init_logging(&config.log_level);

    if args.debug_config {
        println!("Configuration:");
        println!("{:#?}", config);
        return Ok(());
    }

    let mut rng = rand::thread_rng();

    if let Some(Command::Moo { words }) = &args.command {
        let cmd = MooCommand::from_words(words)?.columns(config.columns);
        debug!(?cmd, "running moo command");
        print!("{}", cmd.execute(&mut rng)?);
        return Ok(());
    }

    if args.list {
        print_lists();
        return Ok(());
    }

    let text = if args.message.is_empty() {
        read_stdin().context("reading message from stdin")?
    } else {
        args.message.clone()
    };
    if text.is_empty() {
        CliArgs::command().print_help()?;
        std::process::exit(1);
    }

    let request = build_request(&args, &config, text, &mut rng)?;
    debug!(
        cow = %request.character,
        mood = ?request.mood,
        mode = request.mode.as_str(),
        columns = request.columns,
        "rendering"
    );

    let output = render::render(&request, &mut rng)?;
    print!("{}", output);

    Ok(())
}

/// Initialize logging; `RUST_LOG` wins over the configured level.
fn init_logging(level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(format!("cowsay_rs={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn build_request(
    args: &CliArgs,
    config: &AppConfig,
    text: Vec<String>,
    rng: &mut impl rand::Rng,
) -> Result<RenderRequest> {
    let (cow, mood) = if args.random {
        (catalog::random(rng).to_string(), Some(mood::random(rng).to_string()))
    } else {
        let cow = catalog::resolve(&config.cow, rng).to_string();
        let mood = match config.mood.as_deref() {
            Some(mood::RANDOM) => Some(mood::random(rng).to_string()),
            other => other.map(str::to_string),
        };
        (cow, mood)
    };

    if !catalog::exists(&cow) {
        warn!(cow = %cow, "unknown cow requested");
        bail!("cow '{}' not found", cow);
    }
    if let Some(mood) = mood.as_deref() {
        if !mood::exists(mood) {
            warn!(mood = %mood, "unknown mood requested");
            bail!("mood '{}' not found", mood);
        }
    }

    let mut request = RenderRequest::new(text)
        .character(cow)
        .mode(config.mode())
        .columns(config.columns);
    request.mood = mood;
    Ok(request)
}

fn read_stdin() -> io::Result<Vec<String>> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(Vec::new());
    }
    stdin.lock().lines().collect()
}

fn print_lists() {
    println!("Available cows:");
    for name in catalog::names() {
        println!("  {}", name);
    }
    println!("\nAvailable moods:");
    for name in mood::names() {
        println!("  {}", name);
    }
}
