use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

use phpgen::model::FileModel;
use phpgen::{Config, Printer};

/// Render a JSON code model as PHP source.
#[derive(Parser, Debug)]
#[command(name = "phpgen", version, about)]
struct Cli {
    /// Path to the JSON model describing the file.
    model: PathBuf,

    /// Configuration file (defaults to ./phpgen.toml, then the user config).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the generated PHP here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(log_level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("phpgen: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> phpgen::Result<()> {
    let working_dir = std::env::current_dir()?;
    let config = Config::load(cli.config.as_deref(), &working_dir)?;

    let model = FileModel::from_file(&cli.model)?;
    let file = model.build()?;
    let php = Printer::new(config.printer).print_file(&file);

    match &cli.output {
        Some(path) => {
            std::fs::write(path, &php)?;
            info!(path = %path.display(), bytes = php.len(), "wrote PHP file");
        }
        None => {
            print!("{php}");
            info!(bytes = php.len(), "rendered PHP file");
        }
    }
    Ok(())
}
