use crate::formatter::supported_formats;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[arg(short = 'f', long = "format", default_value = "pretty", help = format_help())]
    pub format: String,

    /// (optional) Path to a JSON snapshot report, defaults to reading stdin
    pub input: Option<PathBuf>,

    #[arg(short, long)]
    pub verbose: bool,
}

fn format_help() -> String {
    format!(
        "(optional) Output format, one of: {}",
        supported_formats().join(", ")
    )
}
