use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "awss", version, about = "AWSome Scripts", long_about = None)]
struct Cli {
    /// Sketch to use (defaults to the default sketch)
    #[arg(short, long, global = true)]
    sketch: Option<String>,

    /// Verbose mode
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Manage sketches and their items
    Sketch(commands::sketch::SketchArgs),
    /// Manage EMR clusters
    #[command(subcommand)]
    Emr(commands::emr::EmrCommand),
    /// CodeArtifact login/logout
    #[command(subcommand)]
    Ca(commands::ca::CaCommand),
    /// Run an Airflow CLI command through MWAA
    Mwaa(commands::mwaa::MwaaArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
            .init();
    }

    match cli.command {
        Command::Sketch(args) => commands::sketch::execute(args, cli.sketch).await,
        Command::Emr(command) => commands::emr::execute(command, cli.sketch, cli.verbose).await,
        Command::Ca(command) => commands::ca::execute(command, cli.sketch).await,
        Command::Mwaa(args) => commands::mwaa::execute(args, cli.sketch).await,
    }
}
