//! Retouch CLI - AI photo edits from the command line.

use clap::{Parser, Subcommand};

mod commands;

use commands::{
    AdjustCommand, BackgroundCommand, DescribeCommand, FilterCommand, GenerateCommand,
    ReplaceTextCommand, RetouchCommand,
};

/// Retouch CLI - AI photo editing via the Gemini image models.
///
/// Supported operations:
///   - Localized retouch around a pixel coordinate
///   - Stylistic filters and global adjustments
///   - Background removal with a transparent PNG result
///   - Text replacement with optional style hints
///   - Image description
///   - Text-to-image generation
#[derive(Parser)]
#[command(name = "retouch")]
#[command(about = "AI photo editing CLI")]
#[command(version)]
pub struct Cli {
    /// API key (defaults to $GEMINI_API_KEY)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Override the model used by the operation
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Request timeout in seconds (requests are unbounded if unset)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Output file (default: edited.<ext>, or stdout for text)
    #[arg(short = 'o', long, global = true)]
    pub output: Option<String>,

    /// Verbose output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Localized retouch around a point
    Retouch(RetouchCommand),
    /// Apply a stylistic filter
    Filter(FilterCommand),
    /// Apply a global adjustment
    Adjust(AdjustCommand),
    /// Remove the background
    #[command(alias = "bg")]
    Background(BackgroundCommand),
    /// Replace text in the image
    ReplaceText(ReplaceTextCommand),
    /// Describe the image
    Describe(DescribeCommand),
    /// Generate an image from a text prompt
    Generate(GenerateCommand),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "retouch=debug".into()),
            )
            .init();
    }

    match &cli.command {
        Commands::Retouch(cmd) => cmd.run(&cli).await,
        Commands::Filter(cmd) => cmd.run(&cli).await,
        Commands::Adjust(cmd) => cmd.run(&cli).await,
        Commands::Background(cmd) => cmd.run(&cli).await,
        Commands::ReplaceText(cmd) => cmd.run(&cli).await,
        Commands::Describe(cmd) => cmd.run(&cli).await,
        Commands::Generate(cmd) => cmd.run(&cli).await,
    }
}
