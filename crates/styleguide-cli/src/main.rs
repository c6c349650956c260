//! Styleguide CLI - Response style management
//!
//! Terminal client for the styleguide server: list, add, edit, and
//! delete styles, and print the style-detection prompt.

mod api;
mod config;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::{Confirm, Input};
use std::fs;

use api::StyleClient;
use config::Config;

#[derive(Parser)]
#[command(name = "styleguide")]
#[command(about = "Styleguide CLI - response style management", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Style operations
    Style {
        #[command(subcommand)]
        action: StyleAction,
    },

    /// Print the style-detection prompt
    Prompt,

    /// Manage CLI configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum StyleAction {
    /// List all styles
    List,

    /// Print a style's stored description (clean output for piping)
    Show {
        /// Style ID
        id: i64,
    },

    /// Add a style
    Add {
        /// Style name (will prompt if not provided)
        name: Option<String>,
        /// Style description (or use -f for file)
        description: Option<String>,
        /// Read description from file
        #[arg(short, long)]
        file: Option<String>,
    },

    /// Edit a style
    Edit {
        /// Style ID
        id: i64,
        /// New name (keeps the current name if omitted)
        #[arg(short, long)]
        name: Option<String>,
        /// New description (keeps the current description if omitted)
        #[arg(short, long)]
        description: Option<String>,
        /// Read description from file
        #[arg(short, long)]
        file: Option<String>,
    },

    /// Delete a style
    Delete {
        /// Style ID
        id: i64,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set the server base URL
    SetUrl {
        /// Base URL, e.g. http://localhost:8000
        url: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Style { action } => cmd_style(action).await,
        Commands::Prompt => cmd_prompt().await,
        Commands::Config { action } => cmd_config(action).await,
    }
}

// ============================================
// Command Implementations
// ============================================

fn client() -> Result<StyleClient> {
    let config = Config::load()?;
    Ok(StyleClient::new(&config.base_url))
}

async fn cmd_style(action: StyleAction) -> Result<()> {
    match action {
        StyleAction::List => {
            let styles = client()?.list_styles().await?;

            if styles.is_empty() {
                println!("No styles found.");
                println!("\n{}", "Add one with:".dimmed());
                println!("  styleguide style add <name> <description>");
                return Ok(());
            }

            println!("{}", "Styles:".bold());
            for style in styles {
                println!(
                    "  {} {} {}",
                    format!("#{}", style.id).dimmed(),
                    style.name.cyan().bold(),
                    style.updated_at.format("%Y-%m-%d").to_string().dimmed()
                );
                println!("    {}", truncate_string(&style.description, 80).dimmed());
            }
        }

        StyleAction::Show { id } => {
            let styles = client()?.list_styles().await?;
            let style = styles
                .into_iter()
                .find(|s| s.id == id)
                .with_context(|| format!("Style {} not found", id))?;

            // Raw description to stdout (clean for piping)
            println!("{}", style.description);
        }

        StyleAction::Add {
            name,
            description,
            file,
        } => {
            let name = match name {
                Some(n) => n,
                None => Input::new()
                    .with_prompt("Style name")
                    .interact_text()
                    .context("Failed to read input")?,
            };

            let description = resolve_description(description, file)?;

            let style = client()?.create_style(&name, &description).await?;

            println!(
                "{} Style '{}' added (#{})",
                "✓".green(),
                style.name.cyan(),
                style.id
            );
        }

        StyleAction::Edit {
            id,
            name,
            description,
            file,
        } => {
            let api = client()?;
            let styles = api.list_styles().await?;
            let current = styles
                .into_iter()
                .find(|s| s.id == id)
                .with_context(|| format!("Style {} not found", id))?;

            let name = name.unwrap_or(current.name);
            // An omitted description resubmits the stored value, which
            // already carries the response-style tags and gets wrapped
            // again on save.
            let description = match (description, file) {
                (None, None) => current.description,
                (description, file) => resolve_description(description, file)?,
            };

            let updated = api.update_style(id, &name, &description).await?;

            println!(
                "{} Style '{}' updated (#{})",
                "✓".green(),
                updated.name.cyan(),
                updated.id
            );
        }

        StyleAction::Delete { id, yes } => {
            let api = client()?;
            let styles = api.list_styles().await?;
            let style = styles
                .into_iter()
                .find(|s| s.id == id)
                .with_context(|| format!("Style {} not found", id))?;

            if !yes {
                let confirmed = Confirm::new()
                    .with_prompt(format!("Delete style '{}' (#{})?", style.name, style.id))
                    .default(false)
                    .interact()
                    .context("Failed to read input")?;
                if !confirmed {
                    println!("Aborted.");
                    return Ok(());
                }
            }

            api.delete_style(id).await?;

            println!("{} Style '{}' deleted", "✓".green(), style.name.cyan());
        }
    }

    Ok(())
}

async fn cmd_prompt() -> Result<()> {
    let resp = client()?.detection_prompt().await?;

    // Prompt to stdout (clean for piping into a clipboard tool)
    println!("{}", resp.prompt);

    Ok(())
}

async fn cmd_config(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = Config::load()?;

            println!("{}", "Configuration:".bold());
            println!("  Path: {:?}", Config::config_path()?);
            println!("  Base URL: {}", config.base_url);
        }

        ConfigAction::SetUrl { url } => {
            let mut config = Config::load()?;
            config.set_base_url(url);

            let api = StyleClient::new(&config.base_url);
            print!("Testing connection... ");
            match api.health().await {
                Ok(true) => println!("{}", "OK".green()),
                _ => println!("{}", "unreachable (saved anyway)".yellow()),
            }

            config.save()?;
            println!(
                "{} Base URL saved to {:?}",
                "✓".green(),
                Config::config_path()?
            );
        }
    }

    Ok(())
}

/// Resolve a description from the positional argument, a file, or an
/// interactive prompt
fn resolve_description(description: Option<String>, file: Option<String>) -> Result<String> {
    match (description, file) {
        (Some(d), None) => Ok(d),
        (None, Some(f)) => {
            fs::read_to_string(&f).with_context(|| format!("Failed to read file: {}", f))
        }
        (Some(_), Some(_)) => {
            bail!("Cannot specify both a description and --file");
        }
        (None, None) => Input::new()
            .with_prompt("Style description")
            .interact_text()
            .context("Failed to read input"),
    }
}

/// Truncate string safely for UTF-8 (by char count, not bytes)
fn truncate_string(s: &str, max_chars: usize) -> String {
    let chars: Vec<char> = s.chars().take(max_chars).collect();
    if s.chars().count() > max_chars {
        format!("{}...", chars.into_iter().collect::<String>())
    } else {
        s.to_string()
    }
}
