//! Lumen CLI
//!
//! Inspect the design tokens a configuration resolves to, preview button
//! styles, and validate `lumen.toml` files.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Inspect Lumen themes and components
#[derive(Parser, Debug)]
#[command(name = "lumen")]
#[command(about = "Inspect Lumen design tokens and component styles")]
#[command(version)]
struct Cli {
    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the resolved theme as JSON
    Tokens {
        #[command(flatten)]
        theme: ThemeArgs,
    },

    /// Resolve a button style
    Button {
        #[command(flatten)]
        theme: ThemeArgs,

        /// solid, outline or ghost
        #[arg(long, default_value = "solid")]
        variant: String,

        /// primary, secondary, success, warning, error or info
        #[arg(long, default_value = "primary")]
        color: String,

        /// small, medium or large
        #[arg(long, default_value = "medium")]
        size: String,

        #[arg(long)]
        disabled: bool,

        #[arg(long)]
        loading: bool,

        /// Reject unknown variant names instead of falling back
        #[arg(long)]
        strict: bool,
    },

    /// Validate a theme config file
    Check {
        /// Path to lumen.toml
        path: PathBuf,
    },
}

/// Options selecting the theme to resolve
#[derive(Args, Debug, Clone)]
pub struct ThemeArgs {
    /// Theme config file (lumen.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Preset (lumen, ocean, forest); overrides the config file
    #[arg(short, long)]
    pub preset: Option<String>,

    /// light, dark or auto; overrides the config file
    #[arg(short, long)]
    pub scheme: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Tokens { theme } => commands::tokens(&theme),
        Command::Button {
            theme,
            variant,
            color,
            size,
            disabled,
            loading,
            strict,
        } => commands::button(
            &theme,
            &commands::ButtonArgs {
                variant,
                color,
                size,
                disabled,
                loading,
                strict,
            },
        ),
        Command::Check { path } => commands::check(&path),
    }
}
