use anyhow::Result;
use clap::Parser;
use npm_global::commands;
use std::path::PathBuf;

/// npm-global - declared global npm packages
///
/// Inspect the packages declared for global installation.
///
/// The declaration file is taken from --file, then NPM_GLOBAL_FILE, then
/// ./npm-global.json, then the per-user config directory.
///
/// Examples:
///   npm-global check             # Validate the declarations
///   npm-global show lodash       # Show one declared package
#[derive(Parser, Debug)]
#[command(author, version = env!("NPM_GLOBAL_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Declaration file (overrides the default lookup)
    #[arg(long = "file", short = 'f', value_name = "PATH", global = true)]
    pub file: Option<PathBuf>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Validate the declaration file
    Check,

    /// List declared packages
    List,

    /// Show every field of a declared package
    Show(ShowArgs),

    /// Print the finalized declarations as JSON
    Export,
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Name of the declared package
    #[arg(value_name = "NAME")]
    pub name: String,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = npm_global::runtime::RealRuntime;

    match cli.command {
        Commands::Check => commands::check(runtime, cli.file)?,
        Commands::List => commands::list(runtime, cli.file)?,
        Commands::Show(args) => commands::show(runtime, &args.name, cli.file)?,
        Commands::Export => commands::export(runtime, cli.file)?,
    }
    Ok(())
}
