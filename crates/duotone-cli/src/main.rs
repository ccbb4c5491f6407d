//! `duotone` - resolve duotone presets and render filter stylesheets.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser, Debug)]
#[command(name = "duotone", version, about = "Duotone presets, selectors and stylesheets")]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the merged duotone palette
    Palette {
        /// Theme or settings document (.json, .yaml, .yml)
        #[arg(long)]
        settings: PathBuf,
    },
    /// Print the colors of a preset reference
    Resolve {
        #[arg(long)]
        settings: PathBuf,
        /// Reference such as var:preset|duotone|blue-orange
        reference: String,
    },
    /// Print the preset reference matching a list of colors
    Match {
        #[arg(long)]
        settings: PathBuf,
        #[arg(required = true)]
        colors: Vec<String>,
    },
    /// Scope block filter selectors to an instance class
    Scope {
        /// Instance class, or comma separated classes
        scope: String,
        /// Comma separated filter selectors
        selectors: String,
    },
    /// Print a gradient previewing a list of colors
    Gradient {
        #[arg(long)]
        angle: Option<String>,
        #[arg(required = true)]
        colors: Vec<String>,
    },
    /// Render the duotone stylesheet for a list of blocks
    Render {
        #[arg(long)]
        settings: PathBuf,
        /// JSON list of block types
        #[arg(long)]
        block_types: PathBuf,
        /// JSON list of blocks
        #[arg(long)]
        blocks: PathBuf,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let output = match cli.command {
        Command::Palette { settings } => commands::palette(&settings)?,
        Command::Resolve {
            settings,
            reference,
        } => commands::resolve(&settings, &reference)?,
        Command::Match { settings, colors } => commands::match_colors(&settings, &colors)?,
        Command::Scope { scope, selectors } => commands::scope(&scope, &selectors),
        Command::Gradient { angle, colors } => commands::gradient(&colors, angle.as_deref()),
        Command::Render {
            settings,
            block_types,
            blocks,
        } => commands::render(&settings, &block_types, &blocks)?,
    };

    println!("{}", output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_match_colors() {
        let cli = Cli::parse_from(["duotone", "match", "--settings", "t.json", "#000", "#fff"]);
        match cli.command {
            Command::Match { colors, .. } => assert_eq!(colors, ["#000", "#fff"]),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_render_flags() {
        let cli = Cli::parse_from([
            "duotone",
            "-v",
            "render",
            "--settings",
            "theme.yaml",
            "--block-types",
            "types.json",
            "--blocks",
            "post.json",
        ]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Command::Render { .. }));
    }
}
