use clap::Parser;
use file_navigator::commands::run_menu;
use file_navigator::core::{config::AppConfig, error::Result, print_error, session::Session};
use std::env;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "file-navigator")]
#[command(about = "A lean console file explorer with numbered selection")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    /// Directory to start in (defaults to the configured or home directory)
    #[arg(long, value_name = "DIR")]
    start_dir: Option<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else if env::var_os("RUST_LOG").is_none() {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    if let Err(e) = run(cli) {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = AppConfig::load(cli.config.as_deref())?;
    if !config.color {
        colored::control::set_override(false);
    }

    let mut session = Session::initialize(cli.start_dir, &config)?;
    log::info!("Browsing from {}", session.current_path().display());

    let stdin = io::stdin();
    run_menu(&mut session, &mut stdin.lock())
}
