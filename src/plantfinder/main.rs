use clap::Parser;
use console::Term;
use plantfinder::catalog::fs::FileSource;
use plantfinder::config::FinderConfig;
use plantfinder::error::Result;
use plantfinder::session::Session;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::args::Cli;
use cli::render::TerminalSink;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => FinderConfig::load_file(path)?,
        None => {
            let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            FinderConfig::load(cwd)?
        }
    };
    if let Some(path) = cli.catalog {
        config.catalog_path = path;
    }

    let use_color = !cli.no_color && Term::stdout().features().colors_supported();
    let sink = TerminalSink::new(std::io::stdout(), use_color)?;
    let source = FileSource::new(&config.catalog_path);

    let mut session = Session::start(&source, sink, &config);
    cli::run_loop(&mut session);
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
