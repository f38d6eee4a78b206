//! CLI entry point for treep

use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use termcolor::{BufferedStandardStream, ColorChoice};
use treep::logging::init_logging;
use treep::{Lister, OutputConfig, TreeConfig};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // https://no-color.org/
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "treep")]
#[command(about = "List the contents of directories in a tree-like format")]
#[command(version)]
struct Args {
    /// Directories to list
    #[arg(value_name = "DIRECTORY", default_value = ".")]
    directories: Vec<PathBuf>,

    /// List directories only
    #[arg(short = 'd', long = "dirs-only")]
    dirs_only: bool,

    /// Print the full path prefix for each entry
    #[arg(short = 'f', long = "full-path")]
    full_path: bool,

    /// Max display depth of the directory tree
    #[arg(short = 'L', long = "level", value_name = "LEVEL")]
    level: Option<usize>,

    /// Ignore entries matching pattern (can be used multiple times)
    #[arg(short = 'I', long = "ignore")]
    ignore: Vec<String>,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = init_logging() {
        eprintln!("treep: warning: could not set up logging: {}", e);
    }

    let use_color = !args.json && should_use_color(args.color);

    let tree_config = TreeConfig {
        dirs_only: args.dirs_only,
        max_depth: args.level,
        ignore_patterns: args.ignore,
    };
    let output_config = OutputConfig {
        full_path: args.full_path,
        use_color,
        json: args.json,
    };

    let choice = if output_config.use_color {
        ColorChoice::Always
    } else {
        ColorChoice::Never
    };
    let mut stdout = BufferedStandardStream::stdout(choice);
    let mut stderr = std::io::stderr().lock();

    let lister = Lister::new(tree_config, output_config);
    let result = lister
        .list(&args.directories, &mut stdout, &mut stderr)
        .and_then(|_| stdout.flush());

    if let Err(e) = result {
        eprintln!("treep: error writing output: {}", e);
        process::exit(1);
    }
}
