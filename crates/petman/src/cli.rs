use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "petman",
    author,
    version,
    about = "Wizard101 pet-record manager",
    arg_required_else_help = false
)]
pub struct Cli {
    #[command(flatten)]
    pub run: RunArgs,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Path to a petman.toml configuration file.
    #[arg(long, value_name = "PATH", env = "PETMAN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory containing the banner and icon assets.
    #[arg(long, value_name = "PATH")]
    pub assets: Option<PathBuf>,

    /// Override the window size (e.g. `1280x800`).
    #[arg(long, value_name = "WIDTHxHEIGHT")]
    pub size: Option<String>,

    /// Backdrop fill color as `#rrggbb`, overriding the theme.
    #[arg(long, value_name = "HEX")]
    pub background: Option<String>,

    /// Resize debounce interval in milliseconds.
    #[arg(long, value_name = "MILLISECONDS")]
    pub debounce_ms: Option<u64>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write the pet collection to a JSON file and exit.
    Export(ExportArgs),
}

#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Destination JSON file.
    #[arg(value_name = "PATH")]
    pub out: PathBuf,

    /// Seed the export with a sample pet instead of an empty collection.
    #[arg(long)]
    pub sample: bool,
}

pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses a `WIDTHxHEIGHT` string such as `1280x800`.
pub fn parse_window_size(value: &str) -> Result<(u32, u32), String> {
    let trimmed = value.trim();
    let (width, height) = trimmed
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("invalid size '{trimmed}'; expected WIDTHxHEIGHT"))?;

    let width: u32 = width
        .trim()
        .parse()
        .map_err(|_| format!("invalid width in '{trimmed}'"))?;
    let height: u32 = height
        .trim()
        .parse()
        .map_err(|_| format!("invalid height in '{trimmed}'"))?;

    if width == 0 || height == 0 {
        return Err(format!("size '{trimmed}' must be at least 1x1"));
    }

    Ok((width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_sizes() {
        assert_eq!(parse_window_size("1280x800").unwrap(), (1280, 800));
        assert_eq!(parse_window_size(" 1000 X 700 ").unwrap(), (1000, 700));
    }

    #[test]
    fn rejects_malformed_sizes() {
        assert!(parse_window_size("1280").is_err());
        assert!(parse_window_size("0x700").is_err());
        assert!(parse_window_size("widexhigh").is_err());
    }
}
