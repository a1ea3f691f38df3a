//! Castpage CLI
//!
//! Renders theme previews as CSS custom properties and converts between the
//! customizer's UI state and the persisted theme shape.

mod commands;
mod config;

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use config::{CastpageConfig, OutputFormat, CONFIG_FILE};

#[derive(Parser, Debug)]
#[command(name = "castpage")]
#[command(about = "Theme preview and conversion tools for castpage pages")]
#[command(version)]
struct Cli {
    /// Configuration file (defaults to ./castpage.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render preview CSS variables
    Render {
        /// Theme record (JSON)
        #[arg(long, conflicts_with = "preset")]
        theme: Option<PathBuf>,

        /// Built-in preset id
        #[arg(long)]
        preset: Option<String>,

        /// Unsaved UI state (JSON)
        #[arg(long)]
        ui: Option<PathBuf>,

        /// Page attributes (JSON)
        #[arg(long)]
        page: Option<PathBuf>,

        /// Output format (overrides the config file)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Convert a stored theme into UI state
    Load {
        #[arg(long)]
        theme: PathBuf,

        #[arg(long)]
        page: Option<PathBuf>,

        /// Existing UI state; its values win over the theme
        #[arg(long)]
        ui: Option<PathBuf>,
    },

    /// Convert UI state into the persisted theme shape
    Save {
        #[arg(long)]
        ui: PathBuf,

        /// Merge the update into this theme and print the full record
        #[arg(long)]
        theme: Option<PathBuf>,
    },

    /// Print the default UI state
    Defaults,

    /// List themeable fields (`*` marks fields without a UI yet)
    Fields {
        #[arg(long)]
        section: Option<String>,

        #[arg(long)]
        implemented: bool,
    },

    /// List sections in display order
    Sections,

    /// List built-in presets
    Presets,

    /// Check a value against a field; VALUE is JSON or plain text
    Validate { field: String, value: String },
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Runs a command; `Ok(false)` means it completed but reported a failure
fn run(cli: Cli, config: CastpageConfig, out: &mut impl Write) -> Result<bool> {
    match cli.command {
        Command::Render {
            theme,
            preset,
            ui,
            page,
            format,
        } => {
            let preset = preset.as_deref().unwrap_or(&config.render.preset);
            let theme = commands::resolve_theme(theme.as_deref(), preset)?;
            let format = format.unwrap_or(config.render.format);
            commands::render(out, &theme, ui.as_deref(), page.as_deref(), format)?;
        }
        Command::Load { theme, page, ui } => {
            commands::load(out, &theme, page.as_deref(), ui.as_deref())?
        }
        Command::Save { ui, theme } => commands::save(out, &ui, theme.as_deref())?,
        Command::Defaults => commands::defaults(out)?,
        Command::Fields {
            section,
            implemented,
        } => commands::fields(out, section.as_deref(), implemented)?,
        Command::Sections => commands::sections(out)?,
        Command::Presets => commands::presets(out)?,
        Command::Validate { field, value } => {
            return commands::validate(out, &field, &value);
        }
    }
    Ok(true)
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config_path = cli.config.clone();
    let config = CastpageConfig::load(config_path.as_deref().unwrap_or(Path::new(CONFIG_FILE)))?;
    init_logging(&config.logging.level);

    tracing::debug!("command: {:?}", cli.command);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let succeeded = run(cli, config, &mut out)?;
    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
