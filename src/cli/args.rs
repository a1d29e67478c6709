//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::enums::OutputKind;

/// Convert images to text art whose character density follows image brightness
#[derive(Parser, Debug)]
#[command(name = "ascii-art")]
#[command(version, about = "Brightness-matched ASCII art from images", long_about = None)]
#[command(after_help = "SHELL COMMANDS:
    chars               List the current charset
    add <spec>          Add characters (x, a-z, space, all)
    remove <spec>       Remove characters
    res [up|down]       Show, double or halve the resolution
    reverse             Toggle reverse brightness mapping
    output <console|html>
    asciiArt            Render with the current settings
    exit                Quit")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Image to convert
    pub image: Option<PathBuf>,

    /// Tiles per row (power of two)
    #[arg(short, long)]
    pub resolution: Option<usize>,

    /// Initial charset (x, a-z, space, all)
    #[arg(long)]
    pub charset: Option<String>,

    /// Map bright areas to sparse characters
    #[arg(long)]
    pub reverse: bool,

    /// Output writer
    #[arg(short, long)]
    pub output: Option<OutputKind>,

    /// Path of the page written by the html output
    #[arg(long)]
    pub html_path: Option<PathBuf>,

    /// Render once and exit instead of starting the shell
    #[arg(long)]
    pub render: bool,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Create default config file
    Init,
}
