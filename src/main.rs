use std::path::PathBuf;

use clap::{Parser, Subcommand};
use mmsw::{AppError, OutputFormat, PostProcessOptions};

#[derive(Parser)]
#[command(name = "mmsw")]
#[command(version)]
#[command(
    about = "Configure and launch MMS post-processing workflow runs",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch a post-processing run over the configured period and input directory
    #[clap(visible_alias = "pp")]
    PostProcess {
        /// Run spec TOML file (defaults to the built-in SST drifter run)
        #[arg(long)]
        spec: Option<PathBuf>,
        /// External post-processing launcher executable
        #[arg(long)]
        tool: Option<PathBuf>,
        /// Print the launcher command without executing it
        #[arg(long)]
        dry_run: bool,
        /// Output format
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },
    /// Print the effective run spec without launching
    ShowSpec {
        /// Run spec TOML file (defaults to the built-in SST drifter run)
        #[arg(long)]
        spec: Option<PathBuf>,
        /// Output format
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::PostProcess { spec, tool, dry_run, format } => {
            mmsw::post_process(&PostProcessOptions { spec, tool, dry_run, format }).map(|_| ())
        }
        Commands::ShowSpec { spec, format } => mmsw::show_spec(spec.as_deref(), format),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
