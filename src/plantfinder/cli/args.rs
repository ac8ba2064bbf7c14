use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "plantfinder", version)]
#[command(about = "Browse a plant catalog with facet filters and search", long_about = None)]
pub struct Cli {
    /// Catalog JSON file (overrides the config file)
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Config file [default: ./plantfinder.json when present]
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::parse_from(["plantfinder", "--catalog", "x.json", "--no-color", "-v"]);
        assert_eq!(cli.catalog, Some(PathBuf::from("x.json")));
        assert!(cli.no_color);
        assert!(cli.verbose);
        assert!(cli.config.is_none());
    }
}
