use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "credits-rtf")]
#[command(about = "Generate a Credits.rtf file from the licenses of a project's GitHub dependencies")]
#[command(version)]
pub struct Cli {
    /// Input: a project directory containing an .xcodeproj, an .xcodeproj/.pbxproj
    /// file, or a plain text file with GitHub repository URLs (one per line)
    pub input: PathBuf,

    /// The output file name
    #[arg(short, long)]
    pub output: PathBuf,

    /// Font size for the title
    #[arg(short = 't', long = "title-font-size", value_parser = clap::value_parser!(u32).range(1..))]
    pub title_font_size: Option<u32>,

    /// Font size for the content
    #[arg(short = 'f', long = "font-size", value_parser = clap::value_parser!(u32).range(1..))]
    pub font_size: Option<u32>,

    /// Ignored repositories by name, repeat for multiple
    #[arg(short = 'x', long = "exclude")]
    pub excludes: Vec<String>,

    /// Don't automatically open the output file after generation
    #[arg(short = 'O', long = "no-open")]
    pub no_open: bool,

    /// Config file (default: ./credits.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write a JSON report of every reference's outcome
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}
